//! Command-line interface for Sizer
//!
//! This module provides the main CLI structure and command handling for
//! Sizer. It uses clap for argument parsing; the bare invocation (the way a
//! workflow step calls the binary) runs the labeling pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// Sizer - Pull request size labeling for GitHub Actions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Label the pull request for the current workflow event (the default)
    Run,
    /// Classify a change size locally without touching GitHub
    Classify {
        /// Explicit changed-line count to classify
        #[arg(short, long)]
        total: Option<u64>,

        /// Base reference to diff the working tree against
        #[arg(short, long, conflicts_with = "total", default_value = "HEAD")]
        base: String,
    },
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Validate configuration
    Validate,
    /// Show the effective merged configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Run) | None => {
                commands::run::execute(self.config.as_deref(), &output).await
            }
            Some(Commands::Classify { total, base }) => {
                commands::classify::execute(self.config.as_deref(), total, &base, &output)
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), &output)
            }
            Some(Commands::Version) => commands::version::execute(&output),
        }
    }
}
