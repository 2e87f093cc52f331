//! Built-in puzzle rules.
//!
//! - **Structural rules** (`structural`): required fields, person, tense,
//!   auxiliary shape, subjunctive framing, and the opt-in entry infinitive
//!   check
//! - **Elision** (`elision`): "je" / "j'" agreement with the stem
//! - **Distractors** (`distractors`): correct answers kept out of distractor
//!   lists, plus the opt-in duplicate check
//!
//! [`all_rules`] returns them in the order they run on every puzzle.

pub mod distractors;
pub mod elision;
pub mod structural;

use crate::lint::rule::BoxedRule;

pub use distractors::{DistinctDistractorsRule, DuplicateDistractorsRule};
pub use elision::ElisionRule;
pub use structural::{
    AuxiliaryShapeRule, EntryInfinitiveRule, KnownPersonRule, KnownTenseRule,
    RequiredFieldsRule, SubjunctivePronounRule,
};

/// Returns all built-in rules in evaluation order.
pub fn all_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(RequiredFieldsRule),
        Box::new(KnownPersonRule),
        Box::new(KnownTenseRule),
        Box::new(AuxiliaryShapeRule),
        Box::new(SubjunctivePronounRule),
        Box::new(ElisionRule),
        Box::new(DistinctDistractorsRule),
        Box::new(DuplicateDistractorsRule),
        Box::new(EntryInfinitiveRule),
    ]
}
