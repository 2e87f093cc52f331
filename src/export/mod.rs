//! Flatten a dataset into `verbs` and `puzzles` CSV tables.
//!
//! Every verb entry and puzzle gets a fresh random id, so two exports of the
//! same document differ in their id columns.

pub mod encode;

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::dataset::{ListItem, Puzzle, VerbEntry, non_empty};
use crate::error::{ConjugoError, Result};

use encode::{array_literal, csv_cell, csv_line};

pub const VERB_COLUMNS: [&str; 3] = ["id", "infinitive", "translations"];

pub const PUZZLE_COLUMNS: [&str; 16] = [
    "id",
    "verb_id",
    "tense",
    "person",
    "pronoun",
    "is_regular",
    "correct_stem",
    "correct_ending",
    "distractor_stems",
    "distractor_endings",
    "aux_stem",
    "aux_ending",
    "distractor_aux_stems",
    "distractor_aux_endings",
    "rule_summary",
    "explanation_translations",
];

/// Accept `{ "verb": [...] }`, a bare array of entries, or one entry.
#[must_use]
pub fn normalize_entries(root: Value) -> Vec<VerbEntry> {
    let root = match root {
        Value::Object(mut map) if map.contains_key("verb") => {
            map.remove("verb").unwrap_or(Value::Null)
        }
        other => other,
    };
    let items = match root {
        Value::Array(items) => items,
        single => vec![single],
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbRow {
    pub id: Uuid,
    pub infinitive: Option<String>,
    /// Compact JSON text of the translations object
    pub translations: String,
}

impl VerbRow {
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            csv_cell(Some(&self.id.to_string())),
            csv_cell(self.infinitive.as_deref()),
            csv_cell(Some(&self.translations)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRow {
    pub id: Uuid,
    pub verb_id: Uuid,
    pub tense: Option<String>,
    pub person: Option<String>,
    pub pronoun: Option<String>,
    pub is_regular: bool,
    pub correct_stem: Option<String>,
    pub correct_ending: Option<String>,
    /// Always an array literal, `{}` when the source list is absent
    pub distractor_stems: String,
    /// `None` (empty cell) when the source list is absent, unlike stems
    pub distractor_endings: Option<String>,
    pub aux_stem: Option<String>,
    pub aux_ending: Option<String>,
    pub distractor_aux_stems: Option<String>,
    pub distractor_aux_endings: Option<String>,
    pub rule_summary: Option<String>,
    /// Compact JSON text of the explanations object
    pub explanations: String,
}

impl PuzzleRow {
    fn from_puzzle(puzzle: &Puzzle, id: Uuid, verb_id: Uuid) -> Result<Self> {
        let optional_array = |items: Option<&Vec<ListItem>>| {
            items.map(|items| array_literal(Some(items.as_slice())))
        };
        let pronoun = non_empty(puzzle.pronoun.as_ref())
            .map(str::to_string)
            .or_else(|| puzzle.person.clone());

        Ok(Self {
            id,
            verb_id,
            tense: puzzle.tense.clone(),
            person: puzzle.person.clone(),
            pronoun,
            is_regular: puzzle.is_regular,
            correct_stem: puzzle.correct_stem.clone(),
            correct_ending: puzzle.correct_ending.clone(),
            distractor_stems: array_literal(puzzle.distractor_stems.as_deref()),
            distractor_endings: optional_array(puzzle.distractor_endings.as_ref()),
            aux_stem: puzzle.aux_stem.clone(),
            aux_ending: puzzle.aux_ending.clone(),
            distractor_aux_stems: optional_array(puzzle.distractor_aux_stems.as_ref()),
            distractor_aux_endings: optional_array(puzzle.distractor_aux_endings.as_ref()),
            rule_summary: puzzle.rule_summary.clone(),
            explanations: compact_json(puzzle.explanations.as_ref())?,
        })
    }

    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        vec![
            csv_cell(Some(&self.id.to_string())),
            csv_cell(Some(&self.verb_id.to_string())),
            csv_cell(self.tense.as_deref()),
            csv_cell(self.person.as_deref()),
            csv_cell(self.pronoun.as_deref()),
            if self.is_regular { "TRUE" } else { "FALSE" }.to_string(),
            csv_cell(self.correct_stem.as_deref()),
            csv_cell(self.correct_ending.as_deref()),
            csv_cell(Some(&self.distractor_stems)),
            csv_cell(self.distractor_endings.as_deref()),
            csv_cell(self.aux_stem.as_deref()),
            csv_cell(self.aux_ending.as_deref()),
            csv_cell(self.distractor_aux_stems.as_deref()),
            csv_cell(self.distractor_aux_endings.as_deref()),
            csv_cell(self.rule_summary.as_deref()),
            csv_cell(Some(&self.explanations)),
        ]
    }
}

fn compact_json(map: Option<&Map<String, Value>>) -> Result<String> {
    match map {
        Some(map) => Ok(serde_json::to_string(map)?),
        None => Ok("{}".to_string()),
    }
}

/// The two exported tables.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub verbs: Vec<VerbRow>,
    pub puzzles: Vec<PuzzleRow>,
}

impl Tables {
    /// Build tables with random v4 ids.
    pub fn build(entries: &[VerbEntry]) -> Result<Self> {
        Self::build_with(entries, Uuid::new_v4)
    }

    /// Build tables drawing ids from `next_id`, entry id before its puzzles.
    pub fn build_with(entries: &[VerbEntry], mut next_id: impl FnMut() -> Uuid) -> Result<Self> {
        let mut tables = Self::default();

        for entry in entries {
            let verb_id = next_id();
            tables.verbs.push(VerbRow {
                id: verb_id,
                infinitive: entry.infinitive.clone(),
                translations: compact_json(entry.translations.as_ref())?,
            });

            for puzzle in entry.puzzles() {
                let row = PuzzleRow::from_puzzle(puzzle, next_id(), verb_id)?;
                tables.puzzles.push(row);
            }
            debug!(
                infinitive = entry.infinitive.as_deref().unwrap_or_default(),
                puzzles = entry.puzzles().len(),
                "flattened verb entry"
            );
        }

        Ok(tables)
    }

    /// Header line followed by one line per verb, `\n`-joined.
    #[must_use]
    pub fn verbs_csv(&self) -> String {
        render(&VERB_COLUMNS, self.verbs.iter().map(VerbRow::cells))
    }

    /// Header line followed by one line per puzzle, `\n`-joined.
    #[must_use]
    pub fn puzzles_csv(&self) -> String {
        render(&PUZZLE_COLUMNS, self.puzzles.iter().map(PuzzleRow::cells))
    }

    /// Write both tables. Partial output is left in place on failure.
    pub fn write(&self, verbs_path: &Path, puzzles_path: &Path) -> Result<()> {
        write_file(verbs_path, &self.verbs_csv())?;
        write_file(puzzles_path, &self.puzzles_csv())?;
        info!(
            verbs = self.verbs.len(),
            puzzles = self.puzzles.len(),
            "wrote CSV tables"
        );
        Ok(())
    }
}

fn render(header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> String {
    let mut lines = vec![header.join(",")];
    lines.extend(rows.map(|cells| csv_line(&cells)));
    lines.join("\n")
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| ConjugoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
