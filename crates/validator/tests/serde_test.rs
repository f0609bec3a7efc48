//! Serialization of validation failures.

#![cfg(feature = "serde")]

use fieldrule::{FieldError, RuleError, ValidationErrors};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn rule_error_serializes_as_code() {
    assert_eq!(
        serde_json::to_value(RuleError::MinFailed).unwrap(),
        json!("min")
    );
    assert_eq!(
        serde_json::to_value(RuleError::UnsupportedType).unwrap(),
        json!("unsupported_type")
    );
}

#[test]
fn field_error_carries_code_and_message() {
    let error = FieldError::new("age", RuleError::MinFailed);
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "field": "age",
            "code": "min",
            "message": "minimum validation failed",
        })
    );
}

#[test]
fn aggregate_serializes_in_order() {
    let errors: ValidationErrors = [
        FieldError::new("name", RuleError::Syntax),
        FieldError::new("tags", RuleError::NotEmptyFailed),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!([
            { "field": "name", "code": "syntax", "message": "invalid rule syntax" },
            { "field": "tags", "code": "not_empty", "message": "not empty validation failed" },
        ])
    );
}
