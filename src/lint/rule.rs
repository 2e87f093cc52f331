//! Validation rule trait.

use super::config::{EntryContext, PuzzleContext};
use super::diagnostic::{Finding, Severity};

/// A validation rule over puzzles, or over the verb entry that owns them.
///
/// Rules are stateless. Everything a rule needs arrives through the
/// context, and a rule never stops other rules from running. Entry checks
/// run once per entry, before its puzzles.
pub trait PuzzleRule: Send + Sync {
    /// Unique identifier (e.g., "known-tense")
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// What this rule checks
    fn description(&self) -> &'static str;

    /// Severity of the rule's most critical finding
    fn default_severity(&self) -> Severity;

    /// Opt-in rules return false and run only when configured
    fn enabled_by_default(&self) -> bool {
        true
    }

    /// Check one puzzle
    fn check(&self, _ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        Vec::new()
    }

    /// Check the fields of a verb entry itself
    fn check_entry(&self, _ctx: &EntryContext<'_>) -> Vec<Finding> {
        Vec::new()
    }
}

/// A boxed rule for dynamic dispatch
pub type BoxedRule = Box<dyn PuzzleRule>;
