//! Structural rules for puzzles.
//!
//! These check that the fields a puzzle cannot be played without are present
//! and hold values from the known grammar tables.

use crate::dataset::grammar::{self, PERSONS, TenseKind};
use crate::dataset::non_empty;
use crate::lint::config::{EntryContext, PuzzleContext};
use crate::lint::diagnostic::{Finding, Severity};
use crate::lint::rule::PuzzleRule;

/// Rule that checks verb, tense, person and pronoun are present.
pub struct RequiredFieldsRule;

impl PuzzleRule for RequiredFieldsRule {
    fn id(&self) -> &'static str {
        "required-fields"
    }

    fn name(&self) -> &'static str {
        "Required Fields"
    }

    fn description(&self) -> &'static str {
        "Puzzles must have non-empty verb, tense, person and pronoun fields"
    }

    fn default_severity(&self) -> Severity {
        Severity::Fatal
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        let puzzle = ctx.puzzle;
        [
            ("verb", &puzzle.verb),
            ("tense", &puzzle.tense),
            ("person", &puzzle.person),
            ("pronoun", &puzzle.pronoun),
        ]
        .into_iter()
        .filter(|(_, value)| non_empty(value.as_ref()).is_none())
        .map(|(field, _)| {
            Finding::fatal(self.id(), ctx.field_path(field), "Required field is missing")
        })
        .collect()
    }
}

/// Rule that checks the person is one of the canonical nine.
///
/// A missing person is left to `required-fields`.
pub struct KnownPersonRule;

impl PuzzleRule for KnownPersonRule {
    fn id(&self) -> &'static str {
        "known-person"
    }

    fn name(&self) -> &'static str {
        "Known Person"
    }

    fn description(&self) -> &'static str {
        "Person must be one of je, tu, il, elle, on, nous, vous, ils, elles"
    }

    fn default_severity(&self) -> Severity {
        Severity::Fatal
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        match non_empty(ctx.puzzle.person.as_ref()) {
            Some(person) if !grammar::is_person(person) => vec![Finding::fatal(
                self.id(),
                ctx.field_path("person"),
                format!(
                    "Invalid person '{person}', must be one of {}",
                    PERSONS.join(", ")
                ),
            )],
            _ => vec![],
        }
    }
}

/// Rule that checks the tense is a known simple or compound tense.
///
/// A missing tense is left to `required-fields`.
pub struct KnownTenseRule;

impl PuzzleRule for KnownTenseRule {
    fn id(&self) -> &'static str {
        "known-tense"
    }

    fn name(&self) -> &'static str {
        "Known Tense"
    }

    fn description(&self) -> &'static str {
        "Tense must be one of the seven simple or five compound tenses"
    }

    fn default_severity(&self) -> Severity {
        Severity::Fatal
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        match non_empty(ctx.puzzle.tense.as_ref()) {
            Some(tense) if TenseKind::of(tense).is_none() => vec![Finding::fatal(
                self.id(),
                ctx.field_path("tense"),
                format!("Unknown tense '{tense}'"),
            )],
            _ => vec![],
        }
    }
}

/// Rule that checks auxiliary fields match the tense kind.
pub struct AuxiliaryShapeRule;

impl PuzzleRule for AuxiliaryShapeRule {
    fn id(&self) -> &'static str {
        "auxiliary-shape"
    }

    fn name(&self) -> &'static str {
        "Auxiliary Shape"
    }

    fn description(&self) -> &'static str {
        "Compound tenses need auxiliary fields, simple tenses must not carry them"
    }

    fn default_severity(&self) -> Severity {
        Severity::Fatal
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        let puzzle = ctx.puzzle;
        let Some(kind) = puzzle.tense.as_deref().and_then(TenseKind::of) else {
            return vec![];
        };

        match kind {
            TenseKind::Compound => {
                let mut missing = Vec::new();
                if non_empty(puzzle.aux_stem.as_ref()).is_none() {
                    missing.push("auxStem");
                }
                if ctx.config.require_aux_ending && non_empty(puzzle.aux_ending.as_ref()).is_none()
                {
                    missing.push("auxEnding");
                }
                if missing.is_empty() {
                    return vec![];
                }
                let message = if ctx.config.require_aux_ending {
                    format!(
                        "Compound tense requires auxStem and auxEnding (missing {})",
                        missing.join(", ")
                    )
                } else {
                    "Compound tense requires auxStem".to_string()
                };
                vec![Finding::fatal(self.id(), ctx.path(), message)]
            }
            TenseKind::Simple if puzzle.aux_stem.is_some() => vec![Finding::strong(
                self.id(),
                ctx.path(),
                "Simple tense must not include auxiliary fields",
            )],
            TenseKind::Simple => vec![],
        }
    }
}

/// Rule that checks subjunctive pronouns carry "Que"/"Qu'" framing.
pub struct SubjunctivePronounRule;

impl PuzzleRule for SubjunctivePronounRule {
    fn id(&self) -> &'static str {
        "subjunctive-pronoun"
    }

    fn name(&self) -> &'static str {
        "Subjunctive Pronoun"
    }

    fn description(&self) -> &'static str {
        "Subjunctive puzzles must frame the pronoun with 'Que ' or 'Qu''"
    }

    fn default_severity(&self) -> Severity {
        Severity::Fatal
    }

    fn check(&self, ctx: &PuzzleContext<'_>) -> Vec<Finding> {
        let puzzle = ctx.puzzle;
        let Some(tense) = non_empty(puzzle.tense.as_ref()) else {
            return vec![];
        };
        if !grammar::is_subjunctive(tense) {
            return vec![];
        }

        let pronoun = puzzle.pronoun.as_deref().unwrap_or_default();
        if grammar::has_subjunctive_framing(pronoun) {
            vec![]
        } else {
            vec![Finding::fatal(
                self.id(),
                ctx.field_path("pronoun"),
                "Subjonctif must start with 'Que' or 'Qu''",
            )]
        }
    }
}

/// Rule that checks each verb entry names its infinitive.
///
/// Opt-in: the exporter still writes a verb row without one.
pub struct EntryInfinitiveRule;

impl PuzzleRule for EntryInfinitiveRule {
    fn id(&self) -> &'static str {
        "entry-infinitive"
    }

    fn name(&self) -> &'static str {
        "Entry Infinitive"
    }

    fn description(&self) -> &'static str {
        "Verb entries must have a non-empty infinitive"
    }

    fn default_severity(&self) -> Severity {
        Severity::Fatal
    }

    fn enabled_by_default(&self) -> bool {
        false
    }

    fn check_entry(&self, ctx: &EntryContext<'_>) -> Vec<Finding> {
        if non_empty(ctx.entry.infinitive.as_ref()).is_some() {
            return vec![];
        }
        vec![Finding::fatal(self.id(), ctx.field_path("infinitive"), "Missing infinitive")]
    }
}
