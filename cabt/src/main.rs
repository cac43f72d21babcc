//! Cabt CLI - Command-line tools for the Caboose editor mode.
//!
//! This is the main entry point for the cabt CLI application.
//! It uses clap for argument parsing and dispatches to the
//! command handlers, which drive the `caboose-lex` mode over files.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::build_mode, run_capabilities, run_indent, run_reindent, run_tokens, CapabilitiesArgs,
    IndentArgs, ReindentArgs, TokensArgs,
};
use config::Config;
use error::{CabtError, Result};

/// Cabt - Command-line tools for the Caboose editor mode
///
/// Cabt shows how the editor tokenizes Caboose source files and which
/// indentation it suggests for every line.
#[derive(Parser, Debug)]
#[command(name = "cabt")]
#[command(author = "Caboose Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line tools for the Caboose editor mode", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CABT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CABT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CABT_NO_COLOR")]
    no_color: bool,

    /// Columns per indentation level (overrides the config file)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=64))]
    indent_unit: Option<u32>,

    /// Tab width used to measure indentation (overrides the config file)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=64))]
    tab_size: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cabt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each line
    ///
    /// Every token is shown as `style:text`; punctuation is shown as
    /// `punct`. Blank space is omitted.
    Tokens(TokensCommand),

    /// Compare actual and suggested indentation
    ///
    /// Prints each line with its current indentation and the suggestion,
    /// marking the lines that differ with `*`.
    Indent(IndentCommand),

    /// Re-indent a file
    ///
    /// Prints the file with every line indented as suggested. Lines inside
    /// block comments and multi-line strings are left untouched.
    Reindent(ReindentCommand),

    /// Show the editor capabilities of the mode
    ///
    /// Lists the electric characters, auto-closing pairs, fold strategy and
    /// comment forms. Each `--char` is looked up individually.
    Capabilities(CapabilitiesCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the indent subcommand.
#[derive(Parser, Debug)]
struct IndentCommand {
    /// Source files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Arguments for the reindent subcommand.
#[derive(Parser, Debug)]
struct ReindentCommand {
    /// Source file to re-indent
    file: PathBuf,

    /// Only report lines that would change; fail if there are any
    #[arg(long)]
    check: bool,
}

/// Arguments for the capabilities subcommand.
#[derive(Parser, Debug)]
struct CapabilitiesCommand {
    /// Character to look up (repeatable)
    #[arg(long = "char", value_name = "CHAR")]
    chars: Vec<char>,
}

/// Main entry point for the cabt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?.with_overrides(cli.indent_unit, cli.tab_size)?;

    // Execute the selected command
    let verbose = cli.verbose || config.verbose;
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CabtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    let mode = build_mode(&config.mode)?;
    match command {
        Commands::Tokens(args) => run_tokens(
            TokensArgs {
                files: args.files,
                verbose,
            },
            mode,
        ),
        Commands::Indent(args) => run_indent(
            IndentArgs {
                files: args.files,
                verbose,
            },
            mode,
        ),
        Commands::Reindent(args) => run_reindent(
            ReindentArgs {
                file: args.file,
                check: args.check,
                verbose,
            },
            mode,
        ),
        Commands::Capabilities(args) => run_capabilities(
            CapabilitiesArgs {
                chars: args.chars,
                verbose,
            },
            mode,
        ),
    }
}
