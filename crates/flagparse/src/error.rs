use std::fmt;

/// Hard failure of a parse. Only raised in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// One or more tokens matched no flag or option.
    #[error("{}", unknown_message(.0))]
    InvalidArguments(Vec<String>),
}

impl Error {
    /// The raw tokens that caused the failure, in encounter order.
    pub fn invalid_arguments(&self) -> &[String] {
        match self {
            Self::InvalidArguments(list) => list,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn unknown_message(list: &[String]) -> String {
    let plural = if list.len() > 1 { "s" } else { "" };
    format!("unknown argument{plural}: {}", list.join(", "))
}

/// Which registry table a definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Flag,
    Option,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => f.write_str("flag"),
            Self::Option => f.write_str("option"),
        }
    }
}

/// Non-fatal problem noticed while registering definitions or parsing.
///
/// Diagnostics never abort a parse. They are kept on the parser and also
/// logged through `tracing` at warn level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// An option was given without a value and has no usable default.
    #[error("no value given for {raw}")]
    MissingOptionValue { raw: String },
    /// A definition's name or alias is already taken; the new one was dropped.
    #[error("{kind} already exists: {name}")]
    DuplicateDefinition { kind: DefinitionKind, name: String },
    /// A definition was registered with an empty name.
    #[error("no {kind} name given")]
    MissingName { kind: DefinitionKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_uses_singular_for_one_token() {
        let err = Error::InvalidArguments(vec!["--nope".to_string()]);
        assert_eq!(err.to_string(), "unknown argument: --nope");
    }

    #[test]
    fn message_lists_all_tokens_comma_joined() {
        let err = Error::InvalidArguments(vec!["-x".to_string(), "stray".to_string()]);
        assert_eq!(err.to_string(), "unknown arguments: -x, stray");
        assert_eq!(err.invalid_arguments(), ["-x", "stray"]);
    }

    #[test]
    fn diagnostics_render_human_messages() {
        let d = Diagnostic::DuplicateDefinition {
            kind: DefinitionKind::Option,
            name: "cache".to_string(),
        };
        assert_eq!(d.to_string(), "option already exists: cache");
        let d = Diagnostic::MissingOptionValue {
            raw: "-C".to_string(),
        };
        assert_eq!(d.to_string(), "no value given for -C");
        let d = Diagnostic::MissingName {
            kind: DefinitionKind::Flag,
        };
        assert_eq!(d.to_string(), "no flag name given");
    }

    #[test]
    fn diagnostics_are_std_errors() {
        let d: Box<dyn std::error::Error> = Box::new(Diagnostic::MissingOptionValue {
            raw: "--out".to_string(),
        });
        assert_eq!(d.to_string(), "no value given for --out");
    }
}
