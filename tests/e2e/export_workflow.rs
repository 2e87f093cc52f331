//! E2E Scenario: Export Workflow
//!
//! - default table names next to the input
//! - row counts match verbs and puzzles
//! - bare entry and bare array inputs
//! - missing input exits 1
//! - unwritable output is reported but exits 0

use serde_json::json;

use super::fixture::E2EFixture;
use conjugo::test_utils::puzzle;

fn two_verb_document() -> serde_json::Value {
    json!({"verb": [
        {"infinitive": "parler", "translations": {"en": "to speak"}, "puzzles": [
            puzzle(&json!({})),
            puzzle(&json!({"person": "nous", "pronoun": "nous", "correctEnding": "ons"}))
        ]},
        {"infinitive": "lire", "translations": {"en": "to read, to study"}, "puzzles": [
            puzzle(&json!({"verb": "lire", "correctStem": "li", "correctEnding": "s"}))
        ]}
    ]})
}

#[test]
fn test_export_writes_default_tables() {
    let mut fixture = E2EFixture::new("export_defaults");
    fixture.create_dataset("data/verbs/mix.json", &two_verb_document());

    fixture.log_step("Export dataset");
    let output = fixture.run(&["export", "data/verbs/mix.json"]);
    fixture.assert_success(&output, "export");
    fixture.assert_output_contains(&output, "Processing 2 verbs...");

    let verbs = fixture.read(&fixture.path("data/verbs/verbs_mix.csv"));
    let puzzles = fixture.read(&fixture.path("data/verbs/puzzles_mix.csv"));

    let verb_lines: Vec<&str> = verbs.lines().collect();
    assert_eq!(verb_lines.len(), 3);
    assert_eq!(verb_lines[0], "id,infinitive,translations");
    assert!(verb_lines[2].ends_with(r#",lire,"{""en"":""to read, to study""}""#));
    assert!(!verbs.ends_with('\n'));

    let puzzle_lines: Vec<&str> = puzzles.lines().collect();
    assert_eq!(puzzle_lines.len(), 4);
    assert!(puzzle_lines[0].starts_with("id,verb_id,tense,person,pronoun,is_regular"));
    assert!(puzzle_lines[1].contains(",Présent,tu,tu,TRUE,parl,es,"));
}

#[test]
fn test_puzzle_rows_reference_their_verb() {
    let fixture = E2EFixture::new("export_verb_ids");
    fixture.create_dataset("mix.json", &two_verb_document());

    let output = fixture.run(&["export", "mix.json"]);
    fixture.assert_success(&output, "export");

    let verbs = fixture.read(&fixture.path("verbs_mix.csv"));
    let puzzles = fixture.read(&fixture.path("puzzles_mix.csv"));
    let verb_ids: Vec<&str> = verbs
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    let owners: Vec<&str> = puzzles
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(1).unwrap())
        .collect();

    assert_eq!(owners, vec![verb_ids[0], verb_ids[0], verb_ids[1]]);
    assert_ne!(verb_ids[0], verb_ids[1]);
}

#[test]
fn test_export_bare_entry_and_explicit_outputs() {
    let fixture = E2EFixture::new("export_bare_entry");
    fixture.create_dataset(
        "single.json",
        &json!({"infinitive": "aimer", "puzzles": [puzzle(&json!({"verb": "aimer"}))]}),
    );
    std::fs::create_dir_all(fixture.path("out")).unwrap();

    let output = fixture.run(&[
        "export",
        "single.json",
        "--verbs-out",
        "out/v.csv",
        "--puzzles-out",
        "out/p.csv",
    ]);
    fixture.assert_success(&output, "export bare entry");
    fixture.assert_output_contains(&output, "Processing 1 verbs...");
    assert_eq!(fixture.read(&fixture.path("out/v.csv")).lines().count(), 2);
    assert_eq!(fixture.read(&fixture.path("out/p.csv")).lines().count(), 2);
}

#[test]
fn test_export_default_input_from_config() {
    let fixture = E2EFixture::new("export_config_input");
    let config = fixture.create_file("conjugo.toml", "[export]\ninput = \"verbs/etre.json\"\n");
    fixture.create_dataset("verbs/etre.json", &json!([{"infinitive": "être", "puzzles": "none"}]));

    let config_arg = config.display().to_string();
    let output = fixture.run(&["--config", &config_arg, "export"]);
    fixture.assert_success(&output, "export from config");

    let verbs = fixture.read(&fixture.path("verbs/verbs_etre.csv"));
    assert!(verbs.lines().nth(1).unwrap().ends_with(",être,{}"));
    assert_eq!(fixture.read(&fixture.path("verbs/puzzles_etre.csv")).lines().count(), 1);
}

#[test]
fn test_export_missing_input() {
    let fixture = E2EFixture::new("export_missing");

    let output = fixture.run(&["export", "nowhere.json"]);
    fixture.assert_failure(&output, "export missing");
    assert!(output.stderr.contains("Input file not found: nowhere.json"));
}

#[test]
fn test_export_write_failure_is_reported_not_raised() {
    let fixture = E2EFixture::new("export_write_failure");
    fixture.create_dataset("mix.json", &two_verb_document());

    let output = fixture.run(&["export", "mix.json", "--verbs-out", "missing-dir/v.csv"]);
    fixture.assert_success(&output, "export write failure");
    assert!(output.stderr.contains("Error writing CSV files"));
    assert!(!fixture.path("puzzles_mix.csv").exists());
}

#[test]
fn test_export_robot_summary() {
    let fixture = E2EFixture::new("export_robot");
    fixture.create_dataset("mix.json", &two_verb_document());

    let output = fixture.run(&["--robot", "export", "mix.json"]);
    fixture.assert_success(&output, "export --robot");
    let summary = output.json();
    assert_eq!(summary["verbs"], 2);
    assert_eq!(summary["puzzles"], 3);
    assert_eq!(summary["written"], true);
}
