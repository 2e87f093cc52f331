use serde_json::{Value, json};

/// A well-formed simple-tense puzzle; `overrides` replaces or adds fields.
#[must_use]
pub fn puzzle(overrides: &Value) -> Value {
    let mut base = json!({
        "verb": "parler",
        "tense": "Présent",
        "person": "tu",
        "pronoun": "tu",
        "is_regular": true,
        "correctStem": "parl",
        "correctEnding": "es",
        "distractorStems": ["parle", "parlé"],
        "distractorEndings": ["e", "ez"]
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

/// One `parler` entry with a `je` puzzle whose `auxStem` is explicitly null.
#[must_use]
pub fn parler_document() -> Value {
    json!({"verb": [{"infinitive": "parler", "puzzles": [{
        "tense": "Présent",
        "person": "je",
        "pronoun": "je",
        "correctStem": "parl",
        "auxStem": null
    }]}]})
}
