use proptest::prelude::*;
use serde_json::json;

use conjugo::dataset::Dataset;
use conjugo::dataset::grammar::PERSONS;
use conjugo::lint::{Severity, ValidationEngine};
use conjugo::test_utils::{TestCase, run_table_tests};

const REQUIRED: [&str; 4] = ["verb", "tense", "person", "pronoun"];

proptest! {
    #[test]
    fn test_one_fatal_per_missing_required_field(mask in 0u8..16) {
        let mut puzzle = json!({
            "verb": "finir", "tense": "Présent", "person": "tu",
            "pronoun": "tu", "correctStem": "fini", "correctEnding": "s"
        });
        let removed: Vec<&str> = REQUIRED
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, field)| *field)
            .collect();
        for field in &removed {
            puzzle.as_object_mut().unwrap().remove(*field);
        }

        let dataset = Dataset::from_value(json!({"verb": [{"puzzles": [puzzle]}]}));
        let result = ValidationEngine::with_defaults().validate(&dataset);
        let fatal_paths: Vec<String> = result
            .at_level(Severity::Fatal)
            .map(|finding| finding.path.clone())
            .collect();

        let expected: Vec<String> = removed
            .iter()
            .map(|field| format!("verb[0].puzzles[0].{field}"))
            .collect();
        prop_assert_eq!(fatal_paths, expected);
    }

    #[test]
    fn test_unknown_person_is_one_fatal(person in "[a-z]{1,12}") {
        prop_assume!(!PERSONS.contains(&person.as_str()));
        let dataset = Dataset::from_value(json!({"verb": [{"puzzles": [{
            "verb": "finir", "tense": "Présent", "person": person,
            "pronoun": "tu", "correctStem": "fini"
        }]}]}));
        let result = ValidationEngine::with_defaults().validate(&dataset);
        prop_assert_eq!(result.fatal_count(), 1);
        prop_assert!(result.findings[0].message.contains(&person));
    }
}

#[test]
fn elision_table() -> Result<(), String> {
    let case = |name, pronoun, stem, expected: usize| TestCase {
        name,
        input: (pronoun, stem),
        expected,
        should_panic: false,
    };
    let cases = vec![
        case("je before consonant", "je", "parl", 0),
        case("je before vowel", "je", "aim", 1),
        case("je before mute h", "je", "habit", 1),
        case("je before accented e", "je", "écout", 1),
        case("j' before vowel", "j'", "aim", 0),
        case("J' before consonant", "J'", "parl", 1),
        case("que j' before consonant", "Que j'", "parl", 1),
    ];

    run_table_tests(cases, |(pronoun, stem): (&str, &str)| {
        let dataset = Dataset::from_value(json!({"verb": [{"puzzles": [{
            "verb": "x", "tense": "Présent", "person": "je",
            "pronoun": pronoun, "correctStem": stem
        }]}]}));
        ValidationEngine::with_defaults()
            .validate(&dataset)
            .count(Severity::Strong)
    })
}
