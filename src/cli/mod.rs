//! Command-line interface for presubmit-checks.
//!
//! This module provides the `presubmit` CLI with subcommands for:
//! - `upload`: Run the on-upload presubmit checks
//! - `commit`: Run the on-commit presubmit checks
//! - `list`: List registered checks
//! - `completions`: Generate shell completions

mod commands;

use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Presubmit check runner for code-review hooks.
#[derive(Debug, Parser)]
#[command(
    name = "presubmit",
    author,
    version,
    about = "Run presubmit checks and report failures to the reviewer",
    long_about = r#"
presubmit runs this repository's presubmit checks: currently a single
check that executes ./run_tests.sh and converts a failing run into a
structured error report.

The upload and commit stages apply identical checks, so both subcommands
behave the same; they exist to mirror the review tool's two lifecycle
hooks.

Quick start:
  presubmit            # Run the checks in the current directory
  presubmit list       # See which checks would run
"#,
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Working directory the checks run in.
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the on-upload presubmit checks.
    #[command(visible_alias = "u")]
    Upload {
        /// Print reports as JSON on stdout.
        #[arg(long)]
        json: bool,
    },

    /// Run the on-commit presubmit checks.
    #[command(visible_alias = "c")]
    Commit {
        /// Print reports as JSON on stdout.
        #[arg(long)]
        json: bool,
    },

    /// List the registered checks in run order.
    #[command(visible_alias = "l")]
    List,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Runs the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.verbose, cli.quiet);

    // Set up color
    setup_color(cli.color);

    // If no subcommand, run the default stage (same checks either way)
    match cli.command {
        Some(Commands::Upload { json }) => commands::upload(cli.cwd.as_deref(), json),
        Some(Commands::Commit { json }) => commands::commit(cli.cwd.as_deref(), json),
        Some(Commands::List) => commands::list(),
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            Ok(ExitCode::SUCCESS)
        },
        None => commands::upload(cli.cwd.as_deref(), false),
    }
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        },
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        },
        ColorChoice::Auto => {
            // Let console crate auto-detect
        },
    }
}
