//! French grammar tables the rules check against.

/// Canonical grammatical persons.
pub const PERSONS: [&str; 9] = [
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles",
];

/// Tenses conjugated without an auxiliary.
pub const SIMPLE_TENSES: [&str; 7] = [
    "Présent",
    "Imparfait",
    "Futur Simple",
    "Conditionnel Présent",
    "Subjonctif Présent",
    "Subjonctif Imparfait",
    "Impératif",
];

/// Tenses built from an auxiliary plus a past participle.
pub const COMPOUND_TENSES: [&str; 5] = [
    "Passé Composé",
    "Plus-que-parfait",
    "Futur Antérieur",
    "Conditionnel Passé",
    "Subjonctif Passé",
];

/// Initial letters before which "je" elides to "j'" (vowels and mute h).
pub const ELISION_INITIALS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'h', 'é'];

/// Pronoun prefixes that count as an elided "je".
pub const ELIDED_PREFIXES: [&str; 3] = ["J'", "j'", "Que j'"];

/// Pronoun prefixes required by subjunctive framing.
pub const SUBJUNCTIVE_PREFIXES: [&str; 2] = ["Que ", "Qu'"];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TenseKind {
    Simple,
    Compound,
}

impl TenseKind {
    /// Classify a tense name. Unknown tenses are `None`.
    #[must_use]
    pub fn of(tense: &str) -> Option<Self> {
        if SIMPLE_TENSES.contains(&tense) {
            Some(Self::Simple)
        } else if COMPOUND_TENSES.contains(&tense) {
            Some(Self::Compound)
        } else {
            None
        }
    }
}

#[must_use]
pub fn is_person(person: &str) -> bool {
    PERSONS.contains(&person)
}

#[must_use]
pub fn is_subjunctive(tense: &str) -> bool {
    tense.starts_with("Subjonctif")
}

#[must_use]
pub fn has_subjunctive_framing(pronoun: &str) -> bool {
    SUBJUNCTIVE_PREFIXES
        .iter()
        .any(|prefix| pronoun.starts_with(prefix))
}

#[must_use]
pub fn is_elided(pronoun: &str) -> bool {
    ELIDED_PREFIXES.iter().any(|prefix| pronoun.starts_with(prefix))
}

/// Whether a stem starts with a sound that forces elision. An empty stem
/// counts as eliding.
#[must_use]
pub fn requires_elision(stem: &str) -> bool {
    stem.chars().next().is_none_or(|first| {
        let lowered = first.to_lowercase().next().unwrap_or(first);
        ELISION_INITIALS.contains(&lowered)
    })
}
