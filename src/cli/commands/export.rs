//! conjugo export - Flatten a puzzle dataset into verbs and puzzles CSV tables

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::error;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::dataset::read_document;
use crate::error::Result;
use crate::export::{Tables, normalize_entries};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dataset JSON file (defaults to `export.input` from config)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Verbs table path (defaults to `verbs_<stem>.csv` next to the input)
    #[arg(long)]
    pub verbs_out: Option<PathBuf>,

    /// Puzzles table path (defaults to `puzzles_<stem>.csv` next to the input)
    #[arg(long)]
    pub puzzles_out: Option<PathBuf>,
}

#[derive(Serialize)]
struct ExportSummary {
    input: String,
    verbs_path: String,
    puzzles_path: String,
    verbs: usize,
    puzzles: usize,
    written: bool,
}

pub fn run(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let export = &ctx.config.export;
    let input = args.input.clone().unwrap_or_else(|| export.input.clone());
    let verbs_path = args
        .verbs_out
        .clone()
        .or_else(|| export.verbs_output.clone())
        .unwrap_or_else(|| sibling_table(&input, "verbs"));
    let puzzles_path = args
        .puzzles_out
        .clone()
        .or_else(|| export.puzzles_output.clone())
        .unwrap_or_else(|| sibling_table(&input, "puzzles"));

    let entries = normalize_entries(read_document(&input)?);
    let human = ctx.output_format == OutputFormat::Human;
    if human {
        println!("Processing {} verbs...", entries.len());
    }

    let tables = Tables::build(&entries)?;

    // Write failures are reported, not propagated.
    let written = match tables.write(&verbs_path, &puzzles_path) {
        Ok(()) => true,
        Err(err) => {
            error!(error = %err, "failed to write CSV tables");
            eprintln!("Error writing CSV files: {err}");
            false
        }
    };

    if human {
        let mut layout = HumanLayout::new();
        layout.title("Export");
        layout.kv("Input", &input.display().to_string());
        layout.kv("Verbs", &format!("{} ({} rows)", verbs_path.display(), tables.verbs.len()));
        layout.kv(
            "Puzzles",
            &format!("{} ({} rows)", puzzles_path.display(), tables.puzzles.len()),
        );
        if !written {
            layout.blank();
            layout.push_line("Tables were not fully written.");
        }
        emit_human(layout);
    } else {
        emit_json(&ExportSummary {
            input: input.display().to_string(),
            verbs_path: verbs_path.display().to_string(),
            puzzles_path: puzzles_path.display().to_string(),
            verbs: tables.verbs.len(),
            puzzles: tables.puzzles.len(),
            written,
        })?;
    }

    Ok(())
}

/// `<dir>/<prefix>_<stem>.csv` next to `input`.
fn sibling_table(input: &Path, prefix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}_{stem}.csv"))
}
