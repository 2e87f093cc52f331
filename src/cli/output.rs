use console::style;
use serde::Serialize;

use crate::error::Result;
use crate::lint::{Finding, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 14,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).bold().to_string());
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        // Pad before styling so escape codes don't eat the width.
        let padded = format!("{key:width$}", width = self.key_width);
        self.lines.push(format!("{} {value}", style(padded).dim()));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

/// Severity label colored by level.
#[must_use]
pub fn severity_badge(level: Severity) -> String {
    let label = format!("[{level}]");
    match level {
        Severity::Fatal => style(label).red().bold().to_string(),
        Severity::Strong => style(label).yellow().bold().to_string(),
        Severity::Warning => style(label).cyan().to_string(),
    }
}

/// One finding as a human line: `[LEVEL] path: message`.
#[must_use]
pub fn finding_line(finding: &Finding) -> String {
    format!(
        "{} {}: {}",
        severity_badge(finding.level),
        style(&finding.path).dim(),
        finding.message
    )
}
