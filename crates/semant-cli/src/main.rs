use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// Static semantic analyzer for compiled ASTs.
///
/// Reads a program as a versioned JSON AST, checks declarations, scopes,
/// types and control flow, and reports every violation it finds.
///
/// EXAMPLES:
///     semant check prog.json           Check a program
///     semant check prog.json --json    Emit diagnostics as JSON lines
///     semant typecheck prog.json       Dump accepted signatures and globals
///     semant explain S3006             Describe a diagnostic code
///
/// ENVIRONMENT VARIABLES:
///     SEMANT_LOG              Log filter (e.g. 'debug', 'semant_core=trace')
///     SEMANT_DIAGNOSTICS      Set to 'json' for JSON diagnostics by default
///     SEMANT_ENTRY_POINT      Override the entry function name
///     SEMANT_PRINT_INTRINSIC  Override the print intrinsic name
///     NO_COLOR                Set to disable colored output
///     SEMANT_NO_COLOR         Same as NO_COLOR, for semant only
#[derive(Parser)]
#[command(name = "semant")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Path to a semant.toml (default: search upwards from the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a program for static semantic errors
    ///
    /// Loads the JSON AST, runs every semantic check and prints the
    /// diagnostics to stderr. Exits with status 1 if any error is found.
    ///
    /// EXAMPLES:
    ///     semant check prog.json         Check for errors
    ///     semant check prog.json --json  Output as JSON
    #[command(visible_alias = "c")]
    Check {
        /// Path to the JSON AST
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Dump checked signatures and globals as JSON
    ///
    /// Runs the checker and prints the function signatures and global
    /// variables it accepted, plus the error count, to stdout.
    Typecheck {
        /// Path to the JSON AST
        file: String,
    },

    /// Explain a diagnostic code
    ///
    /// EXAMPLES:
    ///     semant explain S1010
    Explain {
        /// Diagnostic code (e.g. S3006)
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    init_tracing(cli.verbose, &cli_config);

    match cli.command {
        Commands::Check { file, json } => {
            let settings = config::load_settings(cli.config.as_deref(), &cli_config)?;
            // Command-line flag overrides configuration
            let use_json = json || settings.wants_json();
            commands::check::run(&file, use_json, &settings)?;
        }
        Commands::Typecheck { file } => {
            let settings = config::load_settings(cli.config.as_deref(), &cli_config)?;
            commands::typecheck::run(&file, &settings)?;
        }
        Commands::Explain { code } => {
            commands::explain::run(&code)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool, config: &config::Config) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        config
            .log_filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!config.no_color)
        .with_target(false)
        .try_init();
}
