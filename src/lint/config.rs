//! Validation configuration.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::diagnostic::{FindingContext, Severity};
use crate::dataset::{Puzzle, VerbEntry};

/// Configuration for validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Rules to disable by ID
    #[serde(default)]
    pub disabled_rules: HashSet<String>,

    /// Opt-in rules to enable by ID
    #[serde(default)]
    pub enabled_rules: HashSet<String>,

    /// Severity overrides by rule ID
    #[serde(default)]
    pub severity_overrides: HashMap<String, Severity>,

    /// Raise warnings to STRONG
    #[serde(default)]
    pub strict: bool,

    /// Compound tenses must carry `auxEnding` as well as `auxStem`. Off by
    /// default: a null `auxEnding` marks an unsplit auxiliary.
    #[serde(default)]
    pub require_aux_ending: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            disabled_rules: HashSet::new(),
            enabled_rules: HashSet::new(),
            severity_overrides: HashMap::new(),
            strict: false,
            require_aux_ending: false,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable strict mode
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Require `auxEnding` as well as `auxStem` for compound tenses
    #[must_use]
    pub const fn require_aux_ending(mut self) -> Self {
        self.require_aux_ending = true;
        self
    }

    #[must_use]
    pub fn disable_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_id.into());
        self
    }

    #[must_use]
    pub fn enable_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.enabled_rules.insert(rule_id.into());
        self
    }

    #[must_use]
    pub fn override_severity(mut self, rule_id: impl Into<String>, severity: Severity) -> Self {
        self.severity_overrides.insert(rule_id.into(), severity);
        self
    }

    /// Whether a rule runs. Disabling wins over enabling.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str, enabled_by_default: bool) -> bool {
        if self.disabled_rules.contains(rule_id) {
            return false;
        }
        enabled_by_default || self.enabled_rules.contains(rule_id)
    }

    /// Get effective severity for a finding
    #[must_use]
    pub fn effective_severity(&self, rule_id: &str, default: Severity) -> Severity {
        let severity = self
            .severity_overrides
            .get(rule_id)
            .copied()
            .unwrap_or(default);

        if self.strict && severity == Severity::Warning {
            Severity::Strong
        } else {
            severity
        }
    }
}

/// Context provided to rules for one verb entry
pub struct EntryContext<'a> {
    pub entry: &'a VerbEntry,
    pub verb_index: usize,
    pub config: &'a ValidationConfig,
}

impl<'a> EntryContext<'a> {
    #[must_use]
    pub const fn new(entry: &'a VerbEntry, verb_index: usize, config: &'a ValidationConfig) -> Self {
        Self {
            entry,
            verb_index,
            config,
        }
    }

    /// Path of one field of the entry, e.g. `verb[2].infinitive`
    #[must_use]
    pub fn field_path(&self, field: &str) -> String {
        format!("verb[{}].{field}", self.verb_index)
    }
}

/// Context provided to rules for one puzzle
pub struct PuzzleContext<'a> {
    pub puzzle: &'a Puzzle,
    pub entry: &'a VerbEntry,
    pub verb_index: usize,
    pub puzzle_index: usize,
    pub config: &'a ValidationConfig,
}

impl<'a> PuzzleContext<'a> {
    #[must_use]
    pub const fn new(
        entry: &'a VerbEntry,
        verb_index: usize,
        puzzle: &'a Puzzle,
        puzzle_index: usize,
        config: &'a ValidationConfig,
    ) -> Self {
        Self {
            puzzle,
            entry,
            verb_index,
            puzzle_index,
            config,
        }
    }

    /// Path of the puzzle itself, e.g. `verb[0].puzzles[3]`
    #[must_use]
    pub fn path(&self) -> String {
        format!("verb[{}].puzzles[{}]", self.verb_index, self.puzzle_index)
    }

    /// Path of one field of the puzzle
    #[must_use]
    pub fn field_path(&self, field: &str) -> String {
        format!("{}.{field}", self.path())
    }

    #[must_use]
    pub fn finding_context(&self) -> FindingContext {
        FindingContext {
            infinitive: self.entry.infinitive.clone(),
            tense: self.puzzle.tense.clone(),
            person: self.puzzle.person.clone(),
            pronoun: self.puzzle.pronoun.clone(),
            puzzle_index: self.puzzle_index,
        }
    }
}
