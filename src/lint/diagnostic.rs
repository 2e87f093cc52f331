//! Finding types emitted by puzzle validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level for findings, ordered by increasing criticality.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Worth a look, does not break the puzzle
    Warning,
    /// Likely produces an incorrect puzzle
    Strong,
    /// The record cannot be used at all
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Strong => write!(f, "STRONG"),
            Self::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Puzzle identity attached to findings that need it for diagnosis.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infinitive: Option<String>,
    pub tense: Option<String>,
    pub person: Option<String>,
    pub pronoun: Option<String>,
    pub puzzle_index: usize,
}

/// A single validation finding.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub level: Severity,
    /// The rule ID that generated this finding
    pub rule: String,
    /// Location in the document, e.g. `verb[2].puzzles[5].pronoun`
    pub path: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<FindingContext>,
}

impl Finding {
    pub fn new(
        level: Severity,
        rule: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            path: path.into(),
            message: message.into(),
            context: None,
        }
    }

    pub fn fatal(rule: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, rule, path, message)
    }

    pub fn strong(rule: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Strong, rule, path, message)
    }

    pub fn warning(rule: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, rule, path, message)
    }

    #[must_use]
    pub fn with_context(mut self, context: FindingContext) -> Self {
        self.context = Some(context);
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.path, self.message)
    }
}
