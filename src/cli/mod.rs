//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "conjugo", version, about = "Validate and export French conjugation puzzle datasets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a config file (defaults to `CONJUGO_CONFIG`, then global + project config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a puzzle dataset and write a JSON report
    Validate(commands::validate::ValidateArgs),

    /// Export a puzzle dataset as verbs and puzzles CSV tables
    Export(commands::export::ExportArgs),

    /// List the validation rules
    Rules(commands::rules::RulesArgs),
}
