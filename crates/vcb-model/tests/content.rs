//! Integration tests for loading and validating the content document.

use std::io::Write;

use serde_json::{Value, json};
use vcb_model::{CaseStatus, ConfigurationError, SearchableRecord, embedded::CONTENT_JSON};

fn embedded_value() -> Value {
    serde_json::from_str(CONTENT_JSON).expect("embedded JSON parses")
}

fn load_value(value: &Value) -> Result<vcb_model::ContentDocument, ConfigurationError> {
    vcb_model::from_json_str(&value.to_string())
}

#[test]
fn embedded_document_validates() {
    let doc = vcb_model::content().expect("embedded content is valid");
    assert_eq!(doc.brand.company, "4StudentLives");
    assert!(!doc.legal.cases.is_empty());
    assert!(!doc.mandates.states.is_empty());
    assert!(!doc.competition.competitors.is_empty());
}

#[test]
fn content_returns_the_same_instance() {
    let first = vcb_model::content().unwrap();
    let second = vcb_model::content().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn embedded_case_matches_known_record() {
    let doc = vcb_model::content().unwrap();
    let case = doc
        .legal
        .cases
        .iter()
        .find(|case| case.id == "ca-doe-2023-001")
        .expect("Doe v. District present");
    assert_eq!(case.status, CaseStatus::Precedential);
    assert_eq!(case.tags, vec!["duty-of-care", "records", "privacy"]);
    assert!(case.search_text().contains("privacy"));
}

#[test]
fn virginia_is_the_first_mandate() {
    let doc = vcb_model::content().unwrap();
    let first = &doc.mandates.states[0];
    assert_eq!(first.state, "Virginia");
    assert_eq!(first.year, 2013);
}

#[test]
fn first_profitable_month_is_april_2027() {
    let doc = vcb_model::content().unwrap();
    let point = doc.financials.first_profitable_month().unwrap();
    assert_eq!(point.month, "Apr 27");
    assert_eq!(point.net_income, 6401);
}

#[test]
fn all_problems_are_reported_together() {
    let mut value = embedded_value();
    let cases = value["legal"]["cases"].as_array_mut().unwrap();
    let duplicate = cases[0].clone();
    cases.push(duplicate);
    cases[1]["title"] = json!("   ");
    value["appendix"][0]["url"] = json!("glossary.html");

    let err = load_value(&value).unwrap_err();
    let problems = err.problems();
    assert_eq!(problems.len(), 3, "{problems:?}");
    assert!(problems.iter().any(|p| p.message.contains("duplicate id")));
    assert!(problems.iter().any(|p| p.path == "legal.cases[1].title"));
    assert!(problems.iter().any(|p| p.path == "appendix[0].url"));
    assert!(err.user_message().contains("3 problem(s)"));
}

#[test]
fn empty_tab_collections_are_rejected() {
    let mut value = embedded_value();
    value["competition"]["competitors"] = json!([]);
    let err = load_value(&value).unwrap_err();
    assert!(
        err.problems()
            .iter()
            .any(|p| p.path == "competition.competitors")
    );
}

#[test]
fn funds_must_sum_to_one_hundred() {
    let mut value = embedded_value();
    value["funding"]["useOfFunds"][0]["percentage"] = json!(30);
    let err = load_value(&value).unwrap_err();
    assert_eq!(err.problems().len(), 1);
    assert_eq!(err.problems()[0].path, "funding.useOfFunds");
}

#[test]
fn out_of_order_series_is_rejected() {
    let mut value = embedded_value();
    value["crisis"]["suicideRates"][3]["year"] = json!(2011);
    let err = load_value(&value).unwrap_err();
    assert_eq!(err.problems()[0].path, "crisis.suicideRates[3]");
}

#[test]
fn shape_mismatch_is_a_parse_error() {
    let mut value = embedded_value();
    value["legal"]["cases"][0]["status"] = json!("overruled");
    let err = load_value(&value).unwrap_err();
    assert!(matches!(err, ConfigurationError::Parse { .. }));
}

#[test]
fn unknown_fields_are_rejected() {
    let mut value = embedded_value();
    value["brand"]["slogan"] = json!("extra");
    assert!(matches!(
        load_value(&value),
        Err(ConfigurationError::Parse { .. })
    ));
}

#[test]
fn load_from_path_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONTENT_JSON.as_bytes()).unwrap();
    let doc = vcb_model::load_from_path(file.path()).unwrap();
    assert_eq!(doc.funding.stage, "Seed");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = vcb_model::load_from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigurationError::Io { .. }));
}
