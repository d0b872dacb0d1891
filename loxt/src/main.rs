//! Loxt CLI - A command-line front end for the Lox scanner.
//!
//! This is the main entry point for the loxt CLI application.
//! It uses clap for argument parsing and dispatches to the file or REPL
//! mode based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{Outcome, OutputFormat, EXIT_HOST_ERROR},
    run_repl, run_tokenize, ReplArgs, TokenizeArgs,
};
use config::Config;
use error::{LoxtError, Result};

/// Loxt - scan Lox source into tokens
///
/// With a file argument, scans the file and prints its tokens. With no
/// arguments, starts an interactive prompt that scans one line at a time.
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    /// Token output format (default: from config, else text)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Source file to run; starts the REPL when omitted
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the loxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a file and print its tokens
    ///
    /// Exits with status 65 if the file contains lexical errors.
    Tokenize(FileCommand),

    /// Run a file
    ///
    /// Evaluation is not available yet, so this scans the file and prints
    /// its tokens exactly like `tokenize`.
    Run(FileCommand),
}

/// Arguments for the file subcommands.
#[derive(Parser, Debug)]
struct FileCommand {
    /// Source file to scan
    file: PathBuf,
}

/// Main entry point for the loxt CLI.
///
/// Exit status is 0 on success, 65 when the scanned source has lexical
/// errors and 1 when the tool itself fails.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_HOST_ERROR)
        },
    }
}

/// Loads configuration, initializes logging and executes the selected mode.
fn run(cli: Cli) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref())?;

    let verbose = cli.verbose || config.verbose;
    init_logging(verbose, cli.no_color)?;

    let format = cli.format.unwrap_or(config.output.format);
    execute_command(cli.command, cli.file, format, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token dump on stdout.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
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
        .map_err(|e| LoxtError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected mode.
///
/// A subcommand wins; otherwise a bare file argument runs that file and no
/// arguments at all start the REPL.
fn execute_command(
    command: Option<Commands>,
    file: Option<PathBuf>,
    format: OutputFormat,
    config: &Config,
) -> Result<Outcome> {
    match (command, file) {
        (Some(Commands::Tokenize(args)), _) => execute_tokenize(args.file, format),
        (Some(Commands::Run(args)), _) => execute_tokenize(args.file, format),
        (None, Some(file)) => execute_tokenize(file, format),
        (None, None) => execute_repl(format, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(file: PathBuf, format: OutputFormat) -> Result<Outcome> {
    run_tokenize(TokenizeArgs { file, format })
}

/// Execute the REPL. Lexical errors never change its exit status.
fn execute_repl(format: OutputFormat, config: &Config) -> Result<Outcome> {
    let repl_args = ReplArgs {
        prompt: config.repl.prompt.clone(),
        format,
    };
    run_repl(repl_args)?;
    Ok(Outcome::Clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["loxt"]);
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_parse_tokenize() {
        let cli = Cli::parse_from(["loxt", "tokenize", "test.lox"]);
        if let Some(Commands::Tokenize(args)) = cli.command {
            assert_eq!(args.file, PathBuf::from("test.lox"));
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["loxt", "run", "test.lox"]);
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn test_cli_parse_bare_file() {
        let cli = Cli::parse_from(["loxt", "program.lox"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("program.lox")));
    }

    #[test]
    fn test_cli_tokenize_requires_file() {
        assert!(Cli::try_parse_from(["loxt", "tokenize"]).is_err());
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["loxt", "--format", "json", "tokenize", "a.lox"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));

        let cli = Cli::parse_from(["loxt", "tokenize", "a.lox", "-f", "text"]);
        assert_eq!(cli.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["loxt", "--format", "xml", "a.lox"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["loxt", "--verbose", "tokenize", "a.lox"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["loxt", "--config", "/path/to/loxt.toml", "run", "a.lox"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/loxt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["loxt", "--no-color"]);
        assert!(cli.no_color);
    }
}
