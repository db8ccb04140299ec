//! Flag and option definitions, and the registry that resolves tokens to them.

use indexmap::IndexMap;

use crate::error::{DefinitionKind, Diagnostic};
use crate::value::{FlagDefault, Value};

/// A boolean (or counting) argument triggered by presence alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
    name: String,
    aliases: Vec<String>,
    default: Option<FlagDefault>,
    stackable: bool,
    description: String,
}

impl FlagDef {
    /// A flag with no aliases, not stackable, defaulting to `false`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            default: None,
            stackable: false,
            description: String::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        push_unique(&mut self.aliases, alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            push_unique(&mut self.aliases, alias.into());
        }
        self
    }

    /// Seed value written to the result before scanning.
    pub fn default(mut self, value: impl Into<FlagDefault>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Count repeated occurrences instead of setting `true`.
    pub fn stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_names(&self) -> &[String] {
        &self.aliases
    }

    /// `false` unless set; `0` for stackable flags.
    pub fn default_value(&self) -> Value {
        match &self.default {
            Some(v) => Value::from(*v),
            None if self.stackable => Value::Int(0),
            None => Value::Bool(false),
        }
    }

    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    pub fn help(&self) -> &str {
        &self.description
    }
}

/// An argument that takes the value tokens following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDef {
    name: String,
    aliases: Vec<String>,
    default: Value,
    description: String,
}

impl OptionDef {
    /// An option with no aliases and no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            default: Value::Null,
            description: String::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        push_unique(&mut self.aliases, alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for alias in aliases {
            push_unique(&mut self.aliases, alias.into());
        }
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_names(&self) -> &[String] {
        &self.aliases
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn help(&self) -> &str {
        &self.description
    }
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

/// Declared flags and options, in registration order.
///
/// Every primary name and alias is unique across both tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    flags: IndexMap<String, FlagDef>,
    options: IndexMap<String, OptionDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a flag unless its name or an alias is already taken.
    pub fn register_flag(&mut self, flag: FlagDef) -> Result<(), Diagnostic> {
        self.check_free(DefinitionKind::Flag, &flag.name, &flag.aliases)?;
        self.flags.insert(flag.name.clone(), flag);
        Ok(())
    }

    /// Insert an option unless its name or an alias is already taken.
    pub fn register_option(&mut self, option: OptionDef) -> Result<(), Diagnostic> {
        self.check_free(DefinitionKind::Option, &option.name, &option.aliases)?;
        self.options.insert(option.name.clone(), option);
        Ok(())
    }

    fn check_free(
        &self,
        kind: DefinitionKind,
        name: &str,
        aliases: &[String],
    ) -> Result<(), Diagnostic> {
        if name.is_empty() {
            return Err(Diagnostic::MissingName { kind });
        }
        let taken = std::iter::once(name)
            .chain(aliases.iter().map(String::as_str))
            .find(|candidate| self.is_known(candidate));
        match taken {
            Some(candidate) => Err(Diagnostic::DuplicateDefinition {
                kind,
                name: candidate.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn is_known(&self, key: &str) -> bool {
        self.lookup_flag(key).is_some() || self.lookup_option(key).is_some()
    }

    /// Find a flag by primary name, then by alias in registration order.
    pub fn lookup_flag(&self, key: &str) -> Option<&FlagDef> {
        self.flags
            .get(key)
            .or_else(|| self.flags.values().find(|f| f.aliases.iter().any(|a| a == key)))
    }

    /// Find an option by primary name, then by alias in registration order.
    pub fn lookup_option(&self, key: &str) -> Option<&OptionDef> {
        self.options
            .get(key)
            .or_else(|| self.options.values().find(|o| o.aliases.iter().any(|a| a == key)))
    }

    pub fn is_flag(&self, key: &str) -> bool {
        self.lookup_flag(key).is_some()
    }

    pub fn is_option(&self, key: &str) -> bool {
        self.lookup_option(key).is_some()
    }

    pub fn is_stackable(&self, key: &str) -> bool {
        self.lookup_flag(key).is_some_and(FlagDef::is_stackable)
    }

    pub fn flags(&self) -> impl Iterator<Item = &FlagDef> {
        self.flags.values()
    }

    pub fn options(&self) -> impl Iterator<Item = &OptionDef> {
        self.options.values()
    }

    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let mut r = Registry::new();
        r.register_flag(FlagDef::new("verbose").alias("v")).unwrap();
        r.register_flag(FlagDef::new("count").aliases(["c", "cnt"]).stackable(true))
            .unwrap();
        r.register_option(OptionDef::new("cache").alias("C").default("/tmp"))
            .unwrap();
        r
    }

    #[test]
    fn flag_defaults() {
        let f = FlagDef::new("x");
        assert_eq!(f.default_value(), Value::Bool(false));
        assert!(!f.is_stackable());
        assert!(f.alias_names().is_empty());

        let s = FlagDef::new("x").stackable(true);
        assert_eq!(s.default_value(), Value::Int(0));

        let seeded = FlagDef::new("x").stackable(true).default(2);
        assert_eq!(seeded.default_value(), Value::Int(2));
        assert_eq!(FlagDef::new("x").default(true).default_value(), Value::Bool(true));
    }

    #[test]
    fn option_defaults_to_null() {
        let o = OptionDef::new("name");
        assert!(o.default_value().is_null());
        assert!(o.alias_names().is_empty());
    }

    #[test]
    fn lookup_by_primary_and_alias() {
        let r = registry();
        assert_eq!(r.lookup_flag("verbose").map(FlagDef::name), Some("verbose"));
        assert_eq!(r.lookup_flag("v").map(FlagDef::name), Some("verbose"));
        assert_eq!(r.lookup_flag("cnt").map(FlagDef::name), Some("count"));
        assert_eq!(r.lookup_option("C").map(OptionDef::name), Some("cache"));
        assert!(r.lookup_flag("C").is_none());
        assert!(r.lookup_option("v").is_none());
        assert!(r.is_stackable("c"));
        assert!(!r.is_stackable("v"));
        assert!(!r.is_flag("nope") && !r.is_option("nope"));
    }

    #[test]
    fn duplicate_primary_key_is_rejected_and_first_kept() {
        let mut r = registry();
        let err = r
            .register_flag(FlagDef::new("verbose").description("second"))
            .unwrap_err();
        assert_eq!(
            err,
            Diagnostic::DuplicateDefinition {
                kind: DefinitionKind::Flag,
                name: "verbose".to_string()
            }
        );
        assert_eq!(r.lookup_flag("verbose").map(FlagDef::help), Some(""));
    }

    #[test]
    fn names_are_unique_across_flags_and_options() {
        let mut r = registry();
        assert!(r.register_option(OptionDef::new("verbose")).is_err());
        assert!(r.register_option(OptionDef::new("level").alias("v")).is_err());
        assert!(r.register_flag(FlagDef::new("C")).is_err());
        assert!(!r.is_option("level"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut r = Registry::new();
        assert_eq!(
            r.register_option(OptionDef::new("")),
            Err(Diagnostic::MissingName {
                kind: DefinitionKind::Option
            })
        );
        assert!(!r.has_options());
    }

    #[test]
    fn enumeration_keeps_registration_order() {
        let r = registry();
        let names: Vec<&str> = r.flags().map(FlagDef::name).collect();
        assert_eq!(names, ["verbose", "count"]);
        assert!(r.has_flags() && r.has_options());
    }
}
