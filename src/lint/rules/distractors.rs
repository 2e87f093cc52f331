//! Distractor integrity rules.

use std::collections::HashSet;

use crate::dataset::{ListItem, Puzzle, non_empty, non_empty_list};
use crate::lint::config::PuzzleContext;
use crate::lint::diagnostic::{Finding, Severity};
use crate::lint::rule::PuzzleRule;

/// Correct-value field, its distractor list, and the list's document key.
type DistractorPair<'a> = (Option<&'a String>, Option<&'a Vec<ListItem>>, &'static str);

fn distractor_pairs(puzzle: &Puzzle) -> [DistractorPair<'_>; 4] {
    [
        (
            puzzle.correct_stem.as_ref(),
            puzzle.distractor_stems.as_ref(),
            "distractorStems",
        ),
        (
            puzzle.correct_ending.as_ref(),
            puzzle.distractor_endings.as_ref(),
            "distractorEndings",
        ),
        (
            puzzle.aux_stem.as_ref(),
            puzzle.distractor_aux_stems.as_ref(),
            "distractorAuxStems",
        ),
        (
            puzzle.aux_ending.as_ref(),
            puzzle.distractor_aux_endings.as_ref(),
            "distractorAuxEndings",
        ),
    ]
}

/// Rule that checks the correct answer is not offered as a distractor.
pub struct DistinctDistractorsRule;

impl PuzzleRule for DistinctDistractorsRule {
    fn id(&self) -> &'static str {
        "distinct-distractors"
    }

    fn name(&self) -> &'static str {
        "Distinct Distractors"
    }

    fn description(&self) -> &'static str {
        "Stem, ending, auxStem and auxEnding must not appear among their own distractors"
    }

    fn default_severity(&self) -> Severity {
        Severity::Strong
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        distractor_pairs(ctx.puzzle)
            .into_iter()
            .filter_map(|(correct, distractors, field)| {
                let correct = non_empty(correct)?;
                let distractors = non_empty_list(distractors)?;
                distractors
                    .iter()
                    .any(|item| item.as_text() == Some(correct))
                    .then(|| {
                        Finding::strong(
                            self.id(),
                            ctx.field_path(field),
                            format!("Correct value '{correct}' must not appear in distractors"),
                        )
                    })
            })
            .collect()
    }
}

/// Rule that flags repeated values inside one distractor list. Opt-in.
pub struct DuplicateDistractorsRule;

impl PuzzleRule for DuplicateDistractorsRule {
    fn id(&self) -> &'static str {
        "duplicate-distractors"
    }

    fn name(&self) -> &'static str {
        "Duplicate Distractors"
    }

    fn description(&self) -> &'static str {
        "A distractor list should not repeat the same value"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn enabled_by_default(&self) -> bool {
        false
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        distractor_pairs(ctx.puzzle)
            .into_iter()
            .filter_map(|(_, distractors, field)| {
                let distractors = non_empty_list(distractors)?;
                let mut seen = HashSet::new();
                let repeated: Vec<String> = distractors
                    .iter()
                    .map(ToString::to_string)
                    .filter(|value| !seen.insert(value.clone()))
                    .collect();
                (!repeated.is_empty()).then(|| {
                    Finding::warning(
                        self.id(),
                        ctx.field_path(field),
                        format!("Duplicate values in distractors: {}", repeated.join(", ")),
                    )
                })
            })
            .collect()
    }
}
