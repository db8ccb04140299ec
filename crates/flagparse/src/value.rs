use serde::{Deserialize, Serialize};

/// A parsed (or default) argument value.
///
/// Serialized untagged so a result map renders as a flat JSON object:
/// booleans for flags, integers for stackable flags, strings or `null` for
/// options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true`, a non-zero integer, or a string other than `""` and `"0"`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Str(s) => !s.is_empty() && s != "0",
        }
    }

    /// Whether this value may stand in for a missing option value.
    ///
    /// Exactly `0` counts alongside truthy values; `null`, `false`, `""` and
    /// `"0"` do not.
    pub fn is_usable_default(&self) -> bool {
        self.is_truthy() || matches!(self, Self::Int(0))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Counter step for stackable flags.
    pub(crate) fn incremented(&self) -> Self {
        match self {
            Self::Int(n) => Self::Int(n.saturating_add(1)),
            Self::Bool(b) => Self::Int(i64::from(*b) + 1),
            Self::Null | Self::Str(_) => Self::Int(1),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

/// Seed value of a flag: a boolean, or the starting count of a stackable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagDefault {
    Bool(bool),
    Int(i64),
}

impl From<bool> for FlagDefault {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FlagDefault {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for FlagDefault {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<FlagDefault> for Value {
    fn from(d: FlagDefault) -> Self {
        match d {
            FlagDefault::Bool(b) => Self::Bool(b),
            FlagDefault::Int(n) => Self::Int(n),
        }
    }
}
