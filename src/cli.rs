//! CLI definitions and entry point

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::{self, FormatOptions};
use spotless_staged::core::models::PassMode;
use spotless_staged::output::{OutputMode, Reporter};

/// spotless-staged - Format staged files with Spotless before committing
#[derive(Parser, Debug)]
#[command(
    name = "spotless-staged",
    version,
    about = "Format staged files with Spotless before committing",
    long_about = "Run spotless:apply on staged files from a git pre-commit hook.\n\n\
                  Files whose staged changes are only end-of-line whitespace are skipped.\n\
                  The rest are passed to the Maven wrapper in a single invocation.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// How files are passed to Spotless: paths, patterns
    #[arg(long)]
    pub mode: Option<PassMode>,

    /// Show what would run without invoking the wrapper
    #[arg(long)]
    pub dry_run: bool,

    /// Staged files to format, relative to the repository root
    pub files: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install a pre-commit hook that runs spotless-staged
    InstallHook {
        /// Rewrite the hook section if it is already installed
        #[arg(short, long)]
        force: bool,

        /// Staged files matching this pathspec glob are formatted
        #[arg(long, default_value = "*.java")]
        glob: String,
    },
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let reporter = Reporter::new(output_mode);

    let result = match cli.command {
        Some(Command::InstallHook { force, glob }) => {
            commands::install_hook(force, &glob, output_mode)
        },
        None => commands::format(
            &cli.files,
            FormatOptions {
                mode: cli.mode,
                dry_run: cli.dry_run,
            },
            reporter,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            reporter.error(&err);
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        },
    }
}
