//! Typed model of a puzzle dataset document.
//!
//! Every field is optional so that a malformed document still loads and the
//! validator can describe what is wrong with it. `null` and a missing key
//! both read as `None`; see [`lenient`] for how other shapes are mapped.

pub mod grammar;
pub mod lenient;

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ConjugoError, Result};

/// Root document: `{ "verb": [ ...entries ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// `None` when the key is missing or does not hold an array.
    #[serde(default, deserialize_with = "lenient::records")]
    pub verb: Option<Vec<VerbEntry>>,
}

impl Dataset {
    /// Interpret a parsed document. A root that is not an object yields a
    /// dataset without a `verb` array.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    #[must_use]
    pub fn entries(&self) -> &[VerbEntry] {
        self.verb.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn puzzle_count(&self) -> usize {
        self.entries().iter().map(|entry| entry.puzzles().len()).sum()
    }
}

/// One verb with its translations and puzzles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerbEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub infinitive: Option<String>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub translations: Option<Map<String, Value>>,

    /// `None` when the key is missing or does not hold an array.
    #[serde(default, deserialize_with = "lenient::records")]
    pub puzzles: Option<Vec<Puzzle>>,
}

impl VerbEntry {
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        self.puzzles.as_deref().unwrap_or_default()
    }
}

/// One conjugation exercise.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    #[serde(default, deserialize_with = "lenient::text")]
    pub verb: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tense: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub person: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pronoun: Option<String>,

    #[serde(default, rename = "is_regular", deserialize_with = "lenient::truthy")]
    pub is_regular: bool,

    #[serde(default, deserialize_with = "lenient::text")]
    pub correct_stem: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub correct_ending: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub distractor_stems: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub distractor_endings: Option<Vec<ListItem>>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub aux_stem: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub aux_ending: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub distractor_aux_stems: Option<Vec<ListItem>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub distractor_aux_endings: Option<Vec<ListItem>>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub rule_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub explanations: Option<Map<String, Value>>,
}

/// An element of a distractor list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Text(String),
    /// Non-string element, kept verbatim.
    Other(Value),
}

impl ListItem {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Other(_) => None,
        }
    }
}

impl From<Value> for ListItem {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// A text value that is present and non-empty.
#[must_use]
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// A list that is present and non-empty.
#[must_use]
pub fn non_empty_list(value: Option<&Vec<ListItem>>) -> Option<&[ListItem]> {
    value.map(Vec::as_slice).filter(|items| !items.is_empty())
}

/// Read and parse a JSON document from disk.
pub fn read_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ConjugoError::MissingInputFile(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| ConjugoError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}
