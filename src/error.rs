//! Error types for conjugo.
//!
//! Rule violations found in a dataset are never errors: they are collected as
//! [`Finding`](crate::lint::Finding)s. The variants here abort a run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConjugoError {
    #[error("Input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Invalid JSON in {}: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConjugoError>;

impl ConjugoError {
    /// Short machine-readable code used by robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInputFile(_) => "missing_input_file",
            Self::MalformedJson { .. } => "malformed_json",
            Self::Write { .. } => "write_failure",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }
}
