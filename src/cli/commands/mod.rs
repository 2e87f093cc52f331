//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

pub mod export;
pub mod rules;
pub mod validate;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Export(args) => export::run(ctx, args),
        Commands::Rules(args) => rules::run(ctx, args),
    }
}
