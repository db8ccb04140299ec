mod definitions;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flagparse::{Arguments, ArgumentsConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt};

use crate::definitions::{demo_definitions, load_definitions, write_default_definitions};

#[derive(Parser)]
#[command(name = "flagparse")]
#[command(version, about = "Parse arguments against flag/option definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a flagparse.json with the demo definitions
    Init(InitArgs),

    /// Parse arguments and print the result as JSON
    Parse(ParseArgs),

    /// Print the help screen for a set of definitions
    Usage(UsageArgs),
}

#[derive(Parser)]
struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Replace an existing definitions file
    #[arg(long)]
    force: bool,
}

#[derive(Parser)]
struct ParseArgs {
    /// Definitions file (default: ./flagparse.json, else built-in demo set)
    #[arg(short, long, value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// Fail on arguments that match no definition
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Arguments to parse (pass them after `--`)
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Parser)]
struct UsageArgs {
    /// Definitions file (default: ./flagparse.json, else built-in demo set)
    #[arg(short, long, value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// Wrap descriptions to this many columns
    #[arg(long, default_value_t = 80)]
    width: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => init(args),
        Commands::Parse(args) => parse(args),
        Commands::Usage(args) => usage(args),
    }
}

fn init(args: InitArgs) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let dest = write_default_definitions(&dir, args.force)?;
    eprintln!("Created: {}", dest.display());
    Ok(())
}

fn parse(args: ParseArgs) -> Result<()> {
    tracing::debug!(count = args.args.len(), "executing parse command");

    let mut config = definitions_or_demo(args.definitions.as_deref())?;
    config.strict |= args.strict;

    let mut parser = Arguments::from_config(&config, args.args);
    parser.parse().context("failed to parse arguments")?;

    for raw in parser.invalid_arguments() {
        tracing::warn!("ignoring unknown argument: {raw}");
    }

    if parser.is_set("help") {
        println!("{}\n", parser.help_screen());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(parser.arguments())?
    } else {
        parser.as_json()?
    };
    println!("{json}");
    Ok(())
}

fn usage(args: UsageArgs) -> Result<()> {
    tracing::debug!("executing usage command");

    let config = definitions_or_demo(args.definitions.as_deref())?;
    let parser = Arguments::from_config(&config, Vec::<String>::new());
    println!("{}", parser.help_screen().width(args.width));
    Ok(())
}

fn definitions_or_demo(path: Option<&Path>) -> Result<ArgumentsConfig> {
    if let Some(config) = load_definitions(path)? {
        return Ok(config);
    }
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(demo_definitions(&cwd))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
