//! conjugo - French conjugation puzzle dataset tooling
//!
//! Validate puzzle datasets against the grammar rules and export them as
//! CSV tables for bulk import.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use conjugo::{ConjugoError, Result};
use conjugo::app::AppContext;
use conjugo::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // The robot summary already carries `passed: false`.
        Err(ConjugoError::ValidationFailed(_)) if cli.robot => ExitCode::FAILURE,
        Err(e) => {
            if cli.robot {
                // Robot mode: JSON error output to stdout
                let error_json = serde_json::json!({
                    "error": true,
                    "code": e.code(),
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    debug!(config = %ctx.config_path.display(), "loaded configuration");
    conjugo::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,conjugo=info",
        1 => "info,conjugo=debug",
        2 => "debug,conjugo=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
