//! Validation report written next to the input file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConjugoError, Result};
use crate::lint::{Finding, Severity, ValidationResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub generated_at: DateTime<Utc>,
    pub error_count: usize,
    pub fatal_count: usize,
    pub strong_count: usize,
    pub warning_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub total_verbs: usize,
    pub total_puzzles: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    /// Findings, unchanged and in check order
    pub errors: Vec<Finding>,
}

impl Report {
    /// Wrap a validation result. `generated_at` is captured once by the
    /// caller so every timestamp in the report agrees.
    #[must_use]
    pub fn new(result: ValidationResult, generated_at: DateTime<Utc>) -> Self {
        let meta = ReportMeta {
            generated_at,
            error_count: result.total_count(),
            fatal_count: result.count(Severity::Fatal),
            strong_count: result.count(Severity::Strong),
            warning_count: result.count(Severity::Warning),
            source_file: None,
            total_verbs: result.verbs_checked,
            total_puzzles: result.puzzles_checked,
        };
        Self {
            meta,
            errors: result.findings,
        }
    }

    #[must_use]
    pub fn with_source_file(mut self, name: impl Into<String>) -> Self {
        self.meta.source_file = Some(name.into());
        self
    }

    #[must_use]
    pub const fn has_fatal(&self) -> bool {
        self.meta.fatal_count > 0
    }

    /// Pretty-printed JSON, non-ASCII kept literal.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let payload = self.to_json()?;
        std::fs::write(path, payload).map_err(|source| ConjugoError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `<dir>/<stem><suffix>.json` for an input `<dir>/<stem>.<ext>`.
#[must_use]
pub fn report_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}.json"))
}
