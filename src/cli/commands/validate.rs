//! conjugo validate - Check a puzzle dataset and write a JSON report

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, finding_line};
use crate::dataset::{Dataset, read_document};
use crate::error::{ConjugoError, Result};
use crate::lint::ValidationEngine;
use crate::report::{Report, ReportMeta, report_path_for};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Dataset JSON file to validate
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report path (defaults to `<stem>_report.json` next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Raise warnings to STRONG
    #[arg(long)]
    pub strict: bool,

    /// Skip specific rules (comma-separated IDs)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

#[derive(Serialize)]
struct ValidateSummary<'a> {
    input: String,
    report: String,
    passed: bool,
    meta: &'a ReportMeta,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let document = read_document(&args.input)?;
    let dataset = Dataset::from_value(document);

    let mut config = ctx.config.validate.rules.clone();
    if args.strict {
        config = config.strict();
    }
    for rule_id in &args.skip {
        config = config.disable_rule(rule_id);
    }

    let engine = ValidationEngine::with_builtin_rules(config);
    let result = engine.validate(&dataset);

    let mut report = Report::new(result, Utc::now());
    if let Some(name) = args.input.file_name() {
        report = report.with_source_file(name.to_string_lossy());
    }

    let report_path = args
        .output
        .clone()
        .unwrap_or_else(|| report_path_for(&args.input, &ctx.config.validate.report_suffix));
    report.write(&report_path)?;
    info!(
        path = %report_path.display(),
        errors = report.meta.error_count,
        fatal = report.meta.fatal_count,
        "wrote validation report"
    );

    if ctx.output_format == OutputFormat::Human {
        output_human(&args.input, &report_path, &report);
    } else {
        emit_json(&ValidateSummary {
            input: args.input.display().to_string(),
            report: report_path.display().to_string(),
            passed: !report.has_fatal(),
            meta: &report.meta,
        })?;
    }

    if report.has_fatal() {
        Err(ConjugoError::ValidationFailed(format!(
            "{} fatal finding(s) in {}",
            report.meta.fatal_count,
            args.input.display()
        )))
    } else {
        Ok(())
    }
}

fn output_human(input: &Path, report_path: &Path, report: &Report) {
    let meta = &report.meta;
    let mut layout = HumanLayout::new();
    layout.title("Validation");
    layout.kv("Input", &input.display().to_string());
    layout.kv("Report", &report_path.display().to_string());
    layout.kv("Verbs", &meta.total_verbs.to_string());
    layout.kv("Puzzles", &meta.total_puzzles.to_string());
    layout.blank();

    layout.section("Summary");
    layout.kv("Findings", &meta.error_count.to_string());
    layout.kv("FATAL", &meta.fatal_count.to_string());
    layout.kv("STRONG", &meta.strong_count.to_string());
    layout.kv("WARNING", &meta.warning_count.to_string());

    if !report.errors.is_empty() {
        layout.blank();
        layout.section("Findings");
        for finding in &report.errors {
            layout.bullet(&finding_line(finding));
        }
    }

    emit_human(layout);
}
