//! End-to-end parses over the demo definitions.

use flagparse::{Arguments, Diagnostic, Error, FlagDef, OptionDef, Value};
use serde_json::json;

const CWD: &str = "/home/user/project";

fn demo(argv: &[&str]) -> Arguments {
    let mut args = Arguments::with_args(argv.iter().copied());
    args.add_flag(FlagDef::new("verbose").alias("v"))
        .add_flag(FlagDef::new("version"))
        .add_option(OptionDef::new("cache").alias("C").default(CWD))
        .add_option(OptionDef::new("name").alias("n").default("James"));
    args
}

fn parsed_json(args: &Arguments) -> serde_json::Value {
    serde_json::from_str(&args.as_json().unwrap()).unwrap()
}

#[test]
fn cluster_with_option_value() {
    let mut args = demo(&["-vC", "./", "--version"]);
    args.parse().unwrap();
    assert_eq!(
        parsed_json(&args),
        json!({"verbose": true, "cache": "./", "version": true, "name": "James"})
    );
    assert!(args.diagnostics().is_empty());
}

#[test]
fn cluster_option_without_value_keeps_default() {
    let mut args = demo(&["-vC", "--version"]);
    args.parse().unwrap();
    assert_eq!(
        parsed_json(&args),
        json!({"verbose": true, "cache": CWD, "version": true, "name": "James"})
    );
    assert!(args.diagnostics().is_empty());
}

#[test]
fn multi_word_value_stops_at_next_argument() {
    let mut args = demo(&["--name", "John", "Doe", "--verbose"]);
    args.parse().unwrap();
    assert_eq!(args.get("name"), Some(&Value::from("John Doe")));
    assert_eq!(args.get("verbose"), Some(&Value::Bool(true)));
    assert!(args.invalid_arguments().is_empty());
}

#[test]
fn multi_word_value_runs_to_end_of_input() {
    let mut args = demo(&["-vC", "multi", "word"]);
    args.parse().unwrap();
    assert_eq!(args.get("cache"), Some(&Value::from("multi word")));
}

#[test]
fn option_without_default_followed_by_flag_is_null() {
    let mut args = demo(&["--output", "--verbose"]);
    args.add_option(OptionDef::new("output").alias("o"));
    args.parse().unwrap();
    assert_eq!(args.get("output"), Some(&Value::Null));
    assert_eq!(args.get("verbose"), Some(&Value::Bool(true)));
    assert_eq!(
        args.diagnostics(),
        [Diagnostic::MissingOptionValue {
            raw: "--output".to_string()
        }]
    );
}

#[test]
fn stackable_flag_counts_repeats() {
    let mut args = Arguments::with_args(["-c", "-c", "-c"]);
    args.add_flag(FlagDef::new("c").stackable(true));
    args.parse().unwrap();
    assert_eq!(args.get("c"), Some(&Value::Int(3)));
}

#[test]
fn strict_mode_reports_single_unknown_argument() {
    let mut args = demo(&["-v", "--bogus"]);
    args.set_strict(true);
    let err = args.parse().unwrap_err();
    assert_eq!(err, Error::InvalidArguments(vec!["--bogus".to_string()]));
    assert_eq!(err.to_string(), "unknown argument: --bogus");
}

#[test]
fn strict_mode_reports_every_unknown_argument() {
    let mut args = demo(&["stray", "-vz", "--bogus"]);
    args.set_strict(true);
    let err = args.parse().unwrap_err();
    assert_eq!(err.to_string(), "unknown arguments: stray, -z, --bogus");
}

#[test]
fn non_strict_mode_collects_unknown_arguments() {
    let mut args = demo(&["stray", "-vz", "--bogus"]);
    args.parse().unwrap();
    assert_eq!(args.invalid_arguments(), ["stray", "-z", "--bogus"]);
    assert_eq!(args.get("verbose"), Some(&Value::Bool(true)));
}

#[test]
fn option_zero_default_is_seeded() {
    let mut args = Arguments::with_args(Vec::<String>::new());
    args.add_option(OptionDef::new("retries").default(0))
        .add_option(OptionDef::new("label"));
    args.parse().unwrap();
    assert_eq!(parsed_json(&args), json!({"retries": 0}));
}

#[test]
fn help_screen_lists_demo_definitions() {
    let args = demo(&[]);
    let text = args.help_screen().to_string();
    assert!(text.starts_with("Flags\n"));
    assert!(text.contains("--verbose, -v"));
    assert!(text.contains("\n\nOptions\n"));
    assert!(text.contains("[default: James]"));
}
