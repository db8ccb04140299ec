use indexmap::IndexMap;

use crate::config::ArgumentsConfig;
use crate::error::{Diagnostic, Error, Result};
use crate::help::HelpScreen;
use crate::lexer::Lexer;
use crate::registry::{FlagDef, OptionDef, Registry};
use crate::token::Token;
use crate::value::Value;

/// Parsed values keyed by primary name, in the order they were first set.
pub type ArgumentMap = IndexMap<String, Value>;

/// Argument parser over a captured argv.
///
/// Register flags and options, then call [`Arguments::parse`]. Each parse
/// starts from a clean result: defaults are seeded, the argv is scanned once
/// left to right, and unknown tokens are collected. In strict mode unknown
/// tokens turn into [`Error::InvalidArguments`].
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    argv: Vec<String>,
    strict: bool,
    registry: Registry,
    parsed: ArgumentMap,
    invalid: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Arguments {
    /// Capture the process arguments, minus the program name.
    pub fn from_env() -> Self {
        Self::with_args(
            std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned()),
        )
    }

    pub fn with_args<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Build a parser from serialized settings.
    pub fn from_config<I, S>(config: &ArgumentsConfig, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Self::with_args(argv);
        args.set_strict(config.strict);
        for flag in &config.flags {
            args.add_flag(FlagDef::from(flag));
        }
        for option in &config.options {
            args.add_option(OptionDef::from(option));
        }
        args
    }

    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Register a flag. A clashing name is reported as a diagnostic and the
    /// earlier definition is kept.
    pub fn add_flag(&mut self, flag: FlagDef) -> &mut Self {
        if let Err(diagnostic) = self.registry.register_flag(flag) {
            self.warn(diagnostic);
        }
        self
    }

    pub fn add_flags<I>(&mut self, flags: I) -> &mut Self
    where
        I: IntoIterator<Item = FlagDef>,
    {
        for flag in flags {
            self.add_flag(flag);
        }
        self
    }

    /// Register an option. A clashing name is reported as a diagnostic and
    /// the earlier definition is kept.
    pub fn add_option(&mut self, option: OptionDef) -> &mut Self {
        if let Err(diagnostic) = self.registry.register_option(option) {
            self.warn(diagnostic);
        }
        self
    }

    pub fn add_options<I>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = OptionDef>,
    {
        for option in options {
            self.add_option(option);
        }
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn flag(&self, key: &str) -> Option<&FlagDef> {
        self.registry.lookup_flag(key)
    }

    pub fn option(&self, key: &str) -> Option<&OptionDef> {
        self.registry.lookup_option(key)
    }

    pub fn is_flag(&self, key: &str) -> bool {
        self.registry.is_flag(key)
    }

    pub fn is_option(&self, key: &str) -> bool {
        self.registry.is_option(key)
    }

    pub fn is_stackable(&self, key: &str) -> bool {
        self.registry.is_stackable(key)
    }

    /// Parse the captured argv against the registered definitions.
    ///
    /// The returned map is also kept on `self`. Missing option values are
    /// reported through [`Arguments::diagnostics`]; unknown tokens through
    /// [`Arguments::invalid_arguments`], or as an error in strict mode.
    pub fn parse(&mut self) -> Result<&ArgumentMap> {
        self.parsed.clear();
        self.invalid.clear();
        self.diagnostics
            .retain(|d| !matches!(d, Diagnostic::MissingOptionValue { .. }));

        self.apply_defaults();

        let mut lexer = Lexer::new(self.argv.iter().map(String::as_str));
        while let Some(mut token) = lexer.next() {
            if self.parse_flag(&mut token) {
                continue;
            }
            if self.parse_option(&mut token, &mut lexer) {
                continue;
            }
            tracing::debug!(raw = token.raw(), "unknown argument");
            self.invalid.push(token.raw().to_string());
        }

        if self.strict && !self.invalid.is_empty() {
            return Err(Error::InvalidArguments(self.invalid.clone()));
        }
        Ok(&self.parsed)
    }

    fn apply_defaults(&mut self) {
        for flag in self.registry.flags() {
            self.parsed.insert(flag.name().to_string(), flag.default_value());
        }
        for option in self.registry.options() {
            if option.default_value().is_usable_default() {
                self.parsed
                    .insert(option.name().to_string(), option.default_value().clone());
            }
        }
    }

    fn parse_flag(&mut self, token: &mut Token) -> bool {
        let Some(flag) = self.registry.lookup_flag(token.key()) else {
            return false;
        };
        token.rename(flag.name());

        if flag.is_stackable() {
            let count = self
                .parsed
                .get(token.key())
                .map_or(Value::Int(1), Value::incremented);
            self.parsed.insert(token.key().to_string(), count);
        } else {
            self.parsed.insert(token.key().to_string(), Value::Bool(true));
        }
        true
    }

    fn parse_option(&mut self, token: &mut Token, lexer: &mut Lexer) -> bool {
        let Some(option) = self.registry.lookup_option(token.key()) else {
            return false;
        };
        token.rename(option.name());

        if lexer.at_end() || lexer.next_is_argument() {
            let default = option.default_value();
            if default.is_usable_default() {
                let default = default.clone();
                self.parsed.insert(token.key().to_string(), default);
            } else {
                self.parsed.insert(token.key().to_string(), Value::Null);
                self.warn(Diagnostic::MissingOptionValue {
                    raw: token.raw().to_string(),
                });
            }
            return true;
        }

        let mut values: Vec<String> = Vec::new();
        while let Some(value) = lexer.next() {
            values.push(value.raw().to_string());
            if lexer.at_end() || lexer.next_is_argument() {
                break;
            }
        }
        self.parsed
            .insert(token.key().to_string(), Value::Str(values.join(" ")));
        true
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// Values from the last parse.
    pub fn arguments(&self) -> &ArgumentMap {
        &self.parsed
    }

    /// Value of a parsed argument, `None` when unset.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parsed.get(key)
    }

    /// Whether `key` is present in the parsed map (its value may be null).
    pub fn contains(&self, key: &str) -> bool {
        self.parsed.contains_key(key)
    }

    /// Shorthand for a truthy parsed value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_truthy)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.parsed.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.parsed.shift_remove(key)
    }

    /// Tokens from the last parse that matched no flag or option.
    pub fn invalid_arguments(&self) -> &[String] {
        &self.invalid
    }

    /// Registration and parse warnings, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The parsed map as a flat JSON object.
    pub fn as_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.parsed)
    }

    pub fn help_screen(&self) -> HelpScreen {
        HelpScreen::new(&self.registry)
    }
}
