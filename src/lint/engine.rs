//! Validation engine for running rules over a dataset.

use tracing::debug;

use crate::dataset::Dataset;

use super::config::{EntryContext, PuzzleContext, ValidationConfig};
use super::diagnostic::{Finding, Severity};
use super::rule::BoxedRule;
use super::rules::all_rules;

/// Result of validating a dataset
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Findings in the order the checks ran
    pub findings: Vec<Finding>,
    /// Number of verb entries seen
    pub verbs_checked: usize,
    /// Number of puzzles checked
    pub puzzles_checked: usize,
}

impl ValidationResult {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            findings: Vec::new(),
            verbs_checked: 0,
            puzzles_checked: 0,
        }
    }

    pub fn at_level(&self, level: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.level == level)
    }

    #[must_use]
    pub fn count(&self, level: Severity) -> usize {
        self.at_level(level).count()
    }

    #[must_use]
    pub fn fatal_count(&self) -> usize {
        self.count(Severity::Fatal)
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.findings.len()
    }

    /// No FATAL findings
    #[must_use]
    pub fn passed(&self) -> bool {
        self.fatal_count() == 0
    }
}

/// The validation engine that manages and runs rules
pub struct ValidationEngine {
    rules: Vec<BoxedRule>,
    config: ValidationConfig,
}

impl ValidationEngine {
    /// Create an engine with no rules registered
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    /// Create an engine with every built-in rule
    #[must_use]
    pub fn with_builtin_rules(config: ValidationConfig) -> Self {
        let mut engine = Self::new(config);
        for rule in all_rules() {
            engine.register(rule);
        }
        engine
    }

    /// Built-in rules and default config
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::with_builtin_rules(ValidationConfig::default())
    }

    pub fn register(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with_rule(mut self, rule: BoxedRule) -> Self {
        self.register(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate every puzzle of every entry, in document order.
    ///
    /// A `verb` that is not an array stops validation with a single FATAL
    /// finding. An entry whose `puzzles` is not an array gets one FATAL
    /// finding and the next entry is validated as usual.
    #[must_use]
    pub fn validate(&self, dataset: &Dataset) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(entries) = dataset.verb.as_deref() else {
            result
                .findings
                .push(Finding::fatal("dataset-shape", "verb", "Root must contain a verb array"));
            return result;
        };

        for (verb_index, entry) in entries.iter().enumerate() {
            result.verbs_checked += 1;
            self.check_entry(&EntryContext::new(entry, verb_index, &self.config), &mut result.findings);

            let Some(puzzles) = entry.puzzles.as_deref() else {
                result.findings.push(Finding::fatal(
                    "dataset-shape",
                    format!("verb[{verb_index}].puzzles"),
                    "Verb entry must contain a puzzles array",
                ));
                continue;
            };

            debug!(
                verb_index,
                infinitive = entry.infinitive.as_deref().unwrap_or_default(),
                puzzles = puzzles.len(),
                "validating verb entry"
            );

            for (puzzle_index, puzzle) in puzzles.iter().enumerate() {
                result.puzzles_checked += 1;
                let ctx = PuzzleContext::new(entry, verb_index, puzzle, puzzle_index, &self.config);
                self.check_puzzle(&ctx, &mut result.findings);
            }
        }

        result
    }

    fn enabled_rules(&self) -> impl Iterator<Item = &BoxedRule> {
        self.rules
            .iter()
            .filter(|rule| self.config.is_rule_enabled(rule.id(), rule.enabled_by_default()))
    }

    fn check_entry(&self, ctx: &EntryContext<'_>, findings: &mut Vec<Finding>) {
        for rule in self.enabled_rules() {
            self.collect(rule.check_entry(ctx), findings);
        }
    }

    fn check_puzzle(&self, ctx: &PuzzleContext<'_>, findings: &mut Vec<Finding>) {
        for rule in self.enabled_rules() {
            self.collect(rule.check(ctx), findings);
        }
    }

    fn collect(&self, found: Vec<Finding>, findings: &mut Vec<Finding>) {
        for mut finding in found {
            finding.level = self.config.effective_severity(&finding.rule, finding.level);
            findings.push(finding);
        }
    }

    /// List all registered rules
    #[must_use]
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id().to_string(),
                name: r.name().to_string(),
                description: r.description().to_string(),
                severity: self.config.effective_severity(r.id(), r.default_severity()),
                enabled: self.config.is_rule_enabled(r.id(), r.enabled_by_default()),
            })
            .collect()
    }
}

/// Information about a registered rule
#[derive(Debug, Clone, serde::Serialize)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Severity after overrides and strict mode
    pub severity: Severity,
    pub enabled: bool,
}
