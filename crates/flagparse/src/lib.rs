//! Argument lexing and parsing for flags and options.
//!
//! The pipeline is small and synchronous:
//! - [`Token`] classifies one argv string as long, short or value
//! - [`Lexer`] streams tokens, exploding short clusters (`-vq` => `-v -q`)
//! - [`Registry`] holds [`FlagDef`]/[`OptionDef`] definitions and their aliases
//! - [`Arguments`] drives the lexer against the registry and owns the result
//! - [`HelpScreen`] renders the registry as aligned usage text
//!
//! ```
//! use flagparse::{Arguments, FlagDef, OptionDef, Value};
//!
//! let mut args = Arguments::with_args(["-v", "--name", "John", "Doe"]);
//! args.add_flag(FlagDef::new("verbose").alias("v"))
//!     .add_option(OptionDef::new("name").alias("n"));
//! args.parse().unwrap();
//!
//! assert_eq!(args.get("verbose"), Some(&Value::Bool(true)));
//! assert_eq!(args.get("name"), Some(&Value::from("John Doe")));
//! ```

mod arguments;
mod config;
mod error;
mod help;
mod lexer;
mod registry;
mod token;
mod value;

pub use arguments::{ArgumentMap, Arguments};
pub use config::{ArgumentsConfig, FlagSettings, OptionSettings};
pub use error::{DefinitionKind, Diagnostic, Error, Result};
pub use help::HelpScreen;
pub use lexer::Lexer;
pub use registry::{FlagDef, OptionDef, Registry};
pub use token::{Token, TokenKind};
pub use value::{FlagDefault, Value};
