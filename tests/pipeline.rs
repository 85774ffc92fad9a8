//! End-to-end checks through the per-document entry points.

use std::fs;
use tempfile::TempDir;
use templint::{
    Outcome, RuleCheck, TemplateError, ValidationConfig, check_template, validate_template,
};

const GOOD_RULE: &str = r#"
id: 3f8d6f4e-9f3b-4a2d-8c1e-5b7a9d2e4c6f
name: Sign-ins from unfamiliar locations
description: Detects interactive sign-ins from locations not seen recently.
severity: Medium
requiredDataConnectors:
  - connectorId: AzureActiveDirectory
    dataTypes:
      - SigninLogs
queryFrequency: PT1H
queryPeriod: P1D
triggerOperator: gt
triggerThreshold: 0
tactics:
  - InitialAccess
query: SigninLogs | where ResultType == 0
version: 1.0.0
"#;

fn corpus_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, contents) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents.as_bytes()).unwrap();
    }
    dir
}

fn config() -> ValidationConfig {
    ValidationConfig::new(
        ["AzureActiveDirectory".to_string()],
        ["INPROGRESS-123".to_string()],
    )
}

#[test]
fn good_rule_passes_both_categories() {
    let dir = corpus_with(&[("rules/rule-001.yaml", GOOD_RULE)]);
    let outcome = validate_template(dir.path(), "rule-001.yaml", &config()).unwrap();
    assert_eq!(outcome, Outcome::Validated);
}

#[test]
fn unknown_connector_fails_connector_category_only() {
    let bad = GOOD_RULE.replace("AzureActiveDirectory", "FooBar");
    let dir = corpus_with(&[("rules/rule-001.yaml", bad.as_str())]);

    // Structure is still fine.
    let outcome = check_template(dir.path(), "rule-001.yaml", &config(), RuleCheck::Structure);
    assert_eq!(outcome.unwrap(), Outcome::Validated);

    // Connector check names the offender.
    match check_template(dir.path(), "rule-001.yaml", &config(), RuleCheck::ConnectorIds) {
        Err(TemplateError::Connector(e)) => assert_eq!(e.connector_id, "FooBar"),
        other => panic!("expected connector failure, got {:?}", other),
    }
}

#[test]
fn missing_schedule_field_fails_structure_category() {
    let bad = GOOD_RULE.replace("queryFrequency: PT1H\n", "");
    let dir = corpus_with(&[("rules/rule-001.yaml", bad.as_str())]);

    match check_template(dir.path(), "rule-001.yaml", &config(), RuleCheck::Structure) {
        Err(TemplateError::Constraints(e)) => {
            assert!(e.violations.iter().any(|v| v.field == "queryFrequency"));
        }
        other => panic!("expected constraint failure, got {:?}", other),
    }
}

#[test]
fn exempt_path_passes_both_entry_points_even_when_malformed() {
    // Not even parseable YAML, but the path carries the exception token so
    // neither category inspects the content.
    let dir = corpus_with(&[("rules/INPROGRESS-123/rule-001.yaml", ":::: not yaml [")]);

    for check in [RuleCheck::Structure, RuleCheck::ConnectorIds] {
        let outcome = check_template(dir.path(), "rule-001.yaml", &config(), check).unwrap();
        assert_eq!(outcome, Outcome::Exempt);
    }
    assert_eq!(
        validate_template(dir.path(), "rule-001.yaml", &config()).unwrap(),
        Outcome::Exempt
    );
}

#[test]
fn exempt_token_in_content_suppresses_validation() {
    let bad = format!("{}\nmetadata:\n  note: INPROGRESS-123\n", GOOD_RULE.replace("severity: Medium", "severity: Nope"));
    let dir = corpus_with(&[("rules/rule-001.yaml", bad.as_str())]);

    let outcome = check_template(dir.path(), "rule-001.yaml", &config(), RuleCheck::Structure);
    assert_eq!(outcome.unwrap(), Outcome::Exempt);
}

#[test]
fn malformed_document_is_a_parse_error() {
    let dir = corpus_with(&[("rules/rule-001.yaml", "key: [unclosed")]);

    match check_template(dir.path(), "rule-001.yaml", &config(), RuleCheck::Structure) {
        Err(TemplateError::Parse(_)) => {}
        other => panic!("expected parse failure, got {:?}", other),
    }
}

#[test]
fn missing_document_is_a_load_error() {
    let dir = corpus_with(&[]);
    match validate_template(dir.path(), "rule-001.yaml", &config()) {
        Err(TemplateError::Load(_)) => {}
        other => panic!("expected load failure, got {:?}", other),
    }
}

#[test]
fn config_loads_from_flat_json_arrays() {
    let dir = TempDir::new().unwrap();
    let allow = dir.path().join("ValidConnectorIds.json");
    let exempt = dir.path().join("SkipValidationTemplateIds.json");
    fs::write(&allow, r#"["AzureActiveDirectory", "Office365"]"#).unwrap();
    fs::write(&exempt, r#"["INPROGRESS-123"]"#).unwrap();

    let config = ValidationConfig::from_files(&allow, &exempt).unwrap();
    assert!(config.is_valid_connector("Office365"));
    assert!(!config.is_valid_connector("FooBar"));
    assert_eq!(config.exempt_template_ids, vec!["INPROGRESS-123".to_string()]);
}

#[test]
fn config_rejects_non_array_files() {
    let dir = TempDir::new().unwrap();
    let allow = dir.path().join("ValidConnectorIds.json");
    let exempt = dir.path().join("SkipValidationTemplateIds.json");
    fs::write(&allow, r#"{"not": "an array"}"#).unwrap();
    fs::write(&exempt, r#"[]"#).unwrap();

    assert!(ValidationConfig::from_files(&allow, &exempt).is_err());
}

#[test]
fn config_is_shareable_across_threads() {
    let dir = corpus_with(&[
        ("a/rule-001.yaml", GOOD_RULE),
        ("b/rule-002.yaml", GOOD_RULE),
    ]);
    let config = config();
    let root = dir.path().to_path_buf();

    std::thread::scope(|s| {
        for name in ["rule-001.yaml", "rule-002.yaml"] {
            let config = &config;
            let root = root.as_path();
            s.spawn(move || {
                assert_eq!(
                    validate_template(root, name, config).unwrap(),
                    Outcome::Validated
                );
            });
        }
    });
}
