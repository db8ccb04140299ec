//! Serializable definition settings.
//!
//! These mirror the builder API on [`FlagDef`]/[`OptionDef`] so a whole parser
//! can be described in JSON:
//!
//! ```json
//! {
//!   "strict": false,
//!   "flags": [{ "name": "verbose", "short": "v", "description": "Verbose output" }],
//!   "options": [{ "name": "name", "short": "n", "default": "James" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::registry::{FlagDef, OptionDef};
use crate::value::{FlagDefault, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentsConfig {
    /// Fail the parse on unknown tokens instead of only recording them.
    #[serde(default)]
    pub strict: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<FlagSettings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagSettings {
    pub name: String,

    /// Shorthand for a leading alias, usually a single letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FlagDefault>,

    #[serde(default)]
    pub stackable: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSettings {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default: Value,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

fn alias_list(short: &Option<String>, aliases: &[String]) -> Vec<String> {
    short
        .iter()
        .filter(|s| !s.is_empty())
        .chain(aliases)
        .cloned()
        .collect()
}

impl From<&FlagSettings> for FlagDef {
    fn from(s: &FlagSettings) -> Self {
        let mut flag = FlagDef::new(s.name.as_str())
            .aliases(alias_list(&s.short, &s.aliases))
            .stackable(s.stackable)
            .description(s.description.as_str());
        if let Some(default) = &s.default {
            flag = flag.default(*default);
        }
        flag
    }
}

impl From<&OptionSettings> for OptionDef {
    fn from(s: &OptionSettings) -> Self {
        OptionDef::new(s.name.as_str())
            .aliases(alias_list(&s.short, &s.aliases))
            .default(s.default.clone())
            .description(s.description.as_str())
    }
}
