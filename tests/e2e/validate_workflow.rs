//! E2E Scenario: Validate Workflow
//!
//! - clean dataset exits 0 and writes `<stem>_report.json`
//! - FATAL findings exit 1 and still write the report
//! - STRONG-only findings exit 0
//! - missing input exits 1 without a report
//! - malformed JSON exits 1
//! - `--output`, `--robot`, `--strict` and project config

use serde_json::{Value, json};

use super::fixture::E2EFixture;
use conjugo::test_utils::{parler_document, puzzle};

fn load_report(fixture: &E2EFixture, relative: &str) -> Value {
    let raw = fixture.read(&fixture.path(relative));
    serde_json::from_str(&raw).expect("report is JSON")
}

#[test]
fn test_clean_dataset_passes() {
    let mut fixture = E2EFixture::new("validate_clean");
    fixture.create_dataset(
        "data/parler.json",
        &json!({"verb": [{"infinitive": "parler", "puzzles": [puzzle(&json!({}))]}]}),
    );

    fixture.log_step("Validate clean dataset");
    let output = fixture.run(&["validate", "data/parler.json"]);
    fixture.assert_success(&output, "validate clean");
    fixture.assert_output_contains(&output, "Validation");

    let report = load_report(&fixture, "data/parler_report.json");
    assert_eq!(report["meta"]["errorCount"], 0);
    assert_eq!(report["meta"]["fatalCount"], 0);
    assert_eq!(report["meta"]["sourceFile"], "parler.json");
    assert_eq!(report["meta"]["totalPuzzles"], 1);
    assert!(report["meta"]["generatedAt"].is_string());
    assert_eq!(report["errors"], json!([]));
}

#[test]
fn test_fatal_finding_exits_one_and_writes_report() {
    let mut fixture = E2EFixture::new("validate_fatal");
    fixture.create_dataset(
        "lire.json",
        &json!({"verb": [{"infinitive": "lire", "puzzles": [
            puzzle(&json!({"verb": "lire", "person": "vous-autres", "pronoun": "vous"}))
        ]}]}),
    );

    fixture.log_step("Validate dataset with unknown person");
    let output = fixture.run(&["validate", "lire.json"]);
    fixture.assert_failure(&output, "validate fatal");
    fixture.assert_output_contains(&output, "Invalid person 'vous-autres'");

    let report = load_report(&fixture, "lire_report.json");
    assert_eq!(report["meta"]["fatalCount"], 1);
    let errors = report["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["level"], "FATAL");
    assert_eq!(errors[0]["path"], "verb[0].puzzles[0].person");
}

#[test]
fn test_strong_only_exits_zero() {
    let mut fixture = E2EFixture::new("validate_strong");
    fixture.create_dataset(
        "aimer.json",
        &json!({"verb": [{"infinitive": "aimer", "puzzles": [
            puzzle(&json!({"verb": "aimer", "person": "je", "pronoun": "je", "correctStem": "aim"}))
        ]}]}),
    );

    let output = fixture.run(&["validate", "aimer.json"]);
    fixture.assert_success(&output, "validate strong only");

    let report = load_report(&fixture, "aimer_report.json");
    assert_eq!(report["meta"]["strongCount"], 1);
    assert_eq!(report["errors"][0]["rule"], "je-elision");
    assert_eq!(report["errors"][0]["path"], "verb[0].puzzles[0].pronoun");
    assert_eq!(report["errors"][0]["context"]["infinitive"], "aimer");
}

#[test]
fn test_strict_mode_flag_keeps_exit_zero_for_strong() {
    let fixture = E2EFixture::new("validate_strict");
    let config = fixture.create_file(
        "conjugo.toml",
        "[validate]\nenabled_rules = [\"duplicate-distractors\"]\n",
    );
    fixture.create_dataset(
        "lire.json",
        &json!({"verb": [{"infinitive": "lire", "puzzles": [
            puzzle(&json!({"distractorStems": ["lu", "lu"]}))
        ]}]}),
    );
    let config_arg = config.display().to_string();

    let output = fixture.run(&["--config", &config_arg, "validate", "lire.json"]);
    fixture.assert_success(&output, "validate duplicate warning");
    let report = load_report(&fixture, "lire_report.json");
    assert_eq!(report["meta"]["warningCount"], 1);
    assert_eq!(report["meta"]["strongCount"], 0);

    let output = fixture.run(&["--config", &config_arg, "validate", "lire.json", "--strict"]);
    fixture.assert_success(&output, "validate strict");
    let report = load_report(&fixture, "lire_report.json");
    assert_eq!(report["meta"]["errorCount"], 1);
    assert_eq!(report["meta"]["strongCount"], 1);
    assert_eq!(report["meta"]["warningCount"], 0);
    assert_eq!(report["errors"][0]["rule"], "duplicate-distractors");
    assert_eq!(report["errors"][0]["level"], "STRONG");
    assert_eq!(report["errors"][0]["path"], "verb[0].puzzles[0].distractorStems");
}

#[test]
fn test_unsplit_auxiliary_passes_by_default() {
    let fixture = E2EFixture::new("validate_unsplit_aux");
    fixture.create_dataset(
        "avoir.json",
        &json!({"verb": [{"infinitive": "parler", "puzzles": [puzzle(&json!({
            "tense": "Passé Composé",
            "auxStem": "as",
            "auxEnding": null,
            "correctStem": "parl",
            "correctEnding": "é",
            "distractorEndings": ["er", "ez"]
        }))]}]}),
    );

    let output = fixture.run(&["validate", "avoir.json"]);
    fixture.assert_success(&output, "validate unsplit auxiliary");
    let report = load_report(&fixture, "avoir_report.json");
    assert_eq!(report["meta"]["fatalCount"], 0);

    let config = fixture.create_file("strict-aux.toml", "[validate]\nrequire_aux_ending = true\n");
    let config_arg = config.display().to_string();
    let output = fixture.run(&["--config", &config_arg, "validate", "avoir.json"]);
    fixture.assert_failure(&output, "validate with auxEnding required");
    fixture.assert_output_contains(&output, "missing auxEnding");
}

#[test]
fn test_entry_infinitive_check_is_opt_in() {
    let fixture = E2EFixture::new("validate_infinitive");
    fixture.create_dataset("anon.json", &json!({"verb": [{"puzzles": [puzzle(&json!({}))]}]}));

    let output = fixture.run(&["validate", "anon.json"]);
    fixture.assert_success(&output, "validate without infinitive");

    let config = fixture.create_file(
        "conjugo.toml",
        "[validate]\nenabled_rules = [\"entry-infinitive\"]\n",
    );
    let config_arg = config.display().to_string();
    let output = fixture.run(&["--config", &config_arg, "validate", "anon.json"]);
    fixture.assert_failure(&output, "validate with entry-infinitive");
    let report = load_report(&fixture, "anon_report.json");
    assert_eq!(report["errors"][0]["path"], "verb[0].infinitive");
    assert_eq!(report["errors"][0]["message"], "Missing infinitive");
}

#[test]
fn test_missing_input_writes_no_report() {
    let fixture = E2EFixture::new("validate_missing");

    let output = fixture.run(&["validate", "absent.json"]);
    fixture.assert_failure(&output, "validate missing");
    assert!(output.stderr.contains("Input file not found: absent.json"));
    assert!(!fixture.path("absent_report.json").exists());
}

#[test]
fn test_malformed_json_fails() {
    let fixture = E2EFixture::new("validate_malformed");
    fixture.create_file("broken.json", "{\"verb\": [");

    let output = fixture.run(&["validate", "broken.json"]);
    fixture.assert_failure(&output, "validate malformed");
    assert!(output.stderr.contains("Invalid JSON in broken.json"));
    assert!(!fixture.path("broken_report.json").exists());
}

#[test]
fn test_parler_document_has_no_strong_finding() {
    let fixture = E2EFixture::new("validate_parler");
    fixture.create_dataset("parler.json", &parler_document());

    let output = fixture.run(&["validate", "parler.json"]);
    // the puzzle lacks `verb`, which is FATAL
    fixture.assert_failure(&output, "validate parler");

    let report = load_report(&fixture, "parler_report.json");
    assert_eq!(report["meta"]["strongCount"], 0);
    assert_eq!(report["meta"]["fatalCount"], 1);
    assert_eq!(report["errors"][0]["path"], "verb[0].puzzles[0].verb");
}

#[test]
fn test_root_without_verb_array() {
    let fixture = E2EFixture::new("validate_shape");
    fixture.create_dataset("odd.json", &json!({"verbs": []}));

    let output = fixture.run(&["validate", "odd.json"]);
    fixture.assert_failure(&output, "validate shape");
    let report = load_report(&fixture, "odd_report.json");
    assert_eq!(report["errors"][0]["rule"], "dataset-shape");
}

#[test]
fn test_explicit_output_path() {
    let fixture = E2EFixture::new("validate_output");
    fixture.create_dataset("parler.json", &json!({"verb": [{"puzzles": [puzzle(&json!({}))]}]}));
    std::fs::create_dir_all(fixture.path("reports")).unwrap();

    let output = fixture.run(&["validate", "parler.json", "--output", "reports/out.json"]);
    fixture.assert_success(&output, "validate --output");
    assert!(fixture.path("reports/out.json").exists());
    assert!(!fixture.path("parler_report.json").exists());
}

#[test]
fn test_robot_summary() {
    let fixture = E2EFixture::new("validate_robot");
    fixture.create_dataset("parler.json", &json!({"verb": [{"puzzles": [puzzle(&json!({}))]}]}));

    let output = fixture.run(&["--robot", "validate", "parler.json"]);
    fixture.assert_success(&output, "validate --robot");
    let summary = output.json();
    assert_eq!(summary["passed"], true);
    assert_eq!(summary["meta"]["totalVerbs"], 1);
    assert_eq!(summary["report"], "parler_report.json");
}

#[test]
fn test_robot_fatal_is_one_document() {
    let fixture = E2EFixture::new("validate_robot_fatal");
    fixture.create_dataset(
        "lire.json",
        &json!({"verb": [{"infinitive": "lire", "puzzles": [puzzle(&json!({"tense": "Futur"}))]}]}),
    );

    let output = fixture.run(&["--robot", "validate", "lire.json"]);
    fixture.assert_failure(&output, "validate --robot fatal");
    assert_eq!(output.exit_code, 1);
    let summary = output.json();
    assert_eq!(summary["passed"], false);
    assert_eq!(summary["meta"]["fatalCount"], 1);
    assert!(summary.get("error").is_none());
}

#[test]
fn test_robot_error_object() {
    let fixture = E2EFixture::new("validate_robot_error");

    let output = fixture.run(&["--robot", "validate", "absent.json"]);
    fixture.assert_failure(&output, "validate --robot missing");
    let error = output.json();
    assert_eq!(error["error"], true);
    assert_eq!(error["code"], "missing_input_file");
}

#[test]
fn test_project_config_sets_suffix_and_disables_rule() {
    let fixture = E2EFixture::new("validate_config");
    let config = fixture.create_file(
        "conjugo.toml",
        "[validate]\nreport_suffix = \".findings\"\ndisabled_rules = [\"je-elision\"]\n",
    );
    fixture.create_dataset(
        "aimer.json",
        &json!({"verb": [{"puzzles": [
            puzzle(&json!({"person": "je", "pronoun": "je", "correctStem": "aim"}))
        ]}]}),
    );

    let config_arg = config.display().to_string();
    let output = fixture.run(&["--config", &config_arg, "validate", "aimer.json"]);
    fixture.assert_success(&output, "validate with config");

    let report = load_report(&fixture, "aimer.findings.json");
    assert_eq!(report["meta"]["errorCount"], 0);
}
