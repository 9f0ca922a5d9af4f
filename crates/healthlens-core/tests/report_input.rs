use healthlens_core::error::CoreError;
use healthlens_core::models::report::{ReportInput, Section};
use serde_json::json;

#[test]
fn missing_sections_default_to_empty() {
    let input = ReportInput::from_value(json!({ "summary": ["Mild headache"] })).unwrap();

    assert_eq!(input.summary, vec!["Mild headache".to_string()]);
    assert!(input.considerations.is_empty());
    assert!(input.recommendations.is_empty());
    assert!(!input.is_empty());
}

#[test]
fn empty_object_is_an_empty_report() {
    let input = ReportInput::from_value(json!({})).unwrap();
    assert!(input.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let input = ReportInput::from_value(json!({
        "summary": [],
        "disclaimer": "ignored",
        "recommendations": ["Rest"],
    }))
    .unwrap();

    assert_eq!(input.recommendations, vec!["Rest".to_string()]);
}

#[test]
fn nested_object_entry_is_rejected() {
    let err = ReportInput::from_value(json!({
        "summary": ["ok"],
        "recommendations": ["Rest", { "nested": true }],
    }))
    .unwrap_err();

    assert!(matches!(err, CoreError::InvalidReport(_)));
}

#[test]
fn numbers_and_null_are_not_stringified() {
    assert!(ReportInput::from_value(json!({ "summary": [1, 2] })).is_err());
    assert!(ReportInput::from_value(json!({ "considerations": null })).is_err());
    assert!(ReportInput::from_value(json!({ "recommendations": "Rest" })).is_err());
}

#[test]
fn non_object_body_is_rejected() {
    let err = ReportInput::from_value(json!([["a"], [], []])).unwrap_err();
    assert!(err.to_string().contains("an array"));

    assert!(ReportInput::from_value(serde_json::Value::Null).is_err());
}

#[test]
fn entries_follow_section_order() {
    let input = ReportInput {
        summary: vec!["s".into()],
        considerations: vec!["c".into()],
        recommendations: vec!["r".into()],
    };

    let firsts: Vec<&str> = Section::ALL
        .iter()
        .map(|s| input.entries(*s)[0].as_str())
        .collect();
    assert_eq!(firsts, vec!["s", "c", "r"]);
    assert_eq!(Section::Considerations.key(), "considerations");
}
