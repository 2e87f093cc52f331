//! The "je" → "j'" elision rule.

use crate::dataset::{grammar, non_empty};
use crate::lint::config::PuzzleContext;
use crate::lint::diagnostic::{Finding, Severity};
use crate::lint::rule::PuzzleRule;

/// Rule that checks "je" elides exactly before a vowel or mute h.
///
/// The stem checked is `auxStem` when non-empty, else `correctStem`. A puzzle
/// with neither is treated as needing elision.
pub struct ElisionRule;

impl PuzzleRule for ElisionRule {
    fn id(&self) -> &'static str {
        "je-elision"
    }

    fn name(&self) -> &'static str {
        "Je Elision"
    }

    fn description(&self) -> &'static str {
        "Je must elide to j' before a vowel or mute h, and only there"
    }

    fn default_severity(&self) -> Severity {
        Severity::Strong
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        let puzzle = ctx.puzzle;
        if puzzle.person.as_deref() != Some("je") {
            return vec![];
        }

        let stem = non_empty(puzzle.aux_stem.as_ref())
            .or_else(|| non_empty(puzzle.correct_stem.as_ref()))
            .unwrap_or_default();
        let should_elide = grammar::requires_elision(stem);
        let has_elided = grammar::is_elided(puzzle.pronoun.as_deref().unwrap_or_default());

        let message = match (should_elide, has_elided) {
            (true, false) => "Je must elide to j' before vowel or mute h",
            (false, true) => "J' used incorrectly before consonant",
            _ => return vec![],
        };
        vec![Finding::strong(self.id(), ctx.field_path("pronoun"), message)
            .with_context(ctx.finding_context())]
    }
}
