//! Property-based tests for fieldrule.

use fieldrule::prelude::*;
use proptest::prelude::*;

/// A one-field record with a rule string chosen at runtime.
struct Single<'a> {
    rules: &'a str,
    value: FieldValue<'a>,
}

impl Record for Single<'_> {
    fn layout(&self) -> Layout<'_> {
        Layout::Struct(vec![Field::new(
            "value",
            Visibility::Public,
            Some(self.rules),
            self.value.clone(),
        )])
    }
}

fn check(rules: &str, value: FieldValue<'_>) -> Vec<RuleError> {
    let record = Single { rules, value };
    match record.validate() {
        Ok(()) => Vec::new(),
        Err(Error::Invalid(errors)) => errors.iter().map(|e| e.error).collect(),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// INTEGER BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn min_fails_iff_below(value in any::<i64>(), lo in any::<i64>()) {
        let errors = check(&format!("min:{lo}"), FieldValue::Integer(value.into()));
        if value < lo {
            prop_assert_eq!(errors, vec![RuleError::MinFailed]);
        } else {
            prop_assert!(errors.is_empty());
        }
    }

    #[test]
    fn max_fails_iff_above(value in any::<i64>(), hi in any::<i64>()) {
        let errors = check(&format!("max:{hi}"), FieldValue::Integer(value.into()));
        if value > hi {
            prop_assert_eq!(errors, vec![RuleError::MaxFailed]);
        } else {
            prop_assert!(errors.is_empty());
        }
    }

    #[test]
    fn unsigned_values_never_wrap(value in any::<u64>(), hi in 0_i64..1000) {
        let errors = check(&format!("max:{hi}"), value.as_field_value());
        prop_assert_eq!(errors.is_empty(), value <= hi.unsigned_abs());
    }
}

// ============================================================================
// STRING RULES
// ============================================================================

proptest! {
    #[test]
    fn len_matches_byte_length(s in ".{0,12}", n in 0_usize..40) {
        let errors = check(&format!("len:{n}"), FieldValue::Text(&s));
        prop_assert_eq!(errors.is_empty(), s.len() == n);
    }

    #[test]
    fn min_and_max_bound_byte_length(s in ".{0,12}", lo in 0_usize..20, hi in 0_usize..20) {
        let errors = check(&format!("min:{lo};max:{hi}"), FieldValue::Text(&s));
        prop_assert_eq!(errors.contains(&RuleError::MinFailed), s.len() < lo);
        prop_assert_eq!(errors.contains(&RuleError::MaxFailed), s.len() > hi);
    }

    #[test]
    fn empty_whitelist_always_fails(s in ".*", n in any::<i64>()) {
        prop_assert_eq!(
            check("in:", FieldValue::Text(&s)),
            vec![RuleError::InFailed]
        );
        prop_assert_eq!(
            check("in:", FieldValue::Integer(n.into())),
            vec![RuleError::InFailed]
        );
    }

    #[test]
    fn whitelist_is_exact_match(s in "[abcd ]{0,2}") {
        let errors = check("in:a,b,c", FieldValue::Text(&s));
        let listed = matches!(s.as_str(), "a" | "b" | "c");
        prop_assert_eq!(errors.is_empty(), listed);
    }

    #[test]
    fn not_empty_fails_iff_blank(s in "[ \t\na]{0,4}") {
        let errors = check("not_empty", FieldValue::Text(&s));
        prop_assert_eq!(errors.is_empty(), !s.trim().is_empty());
    }
}

// ============================================================================
// SEQUENCES
// ============================================================================

proptest! {
    #[test]
    fn integer_sequence_checks_every_element(
        items in prop::collection::vec(-5_i64..15, 0..8),
    ) {
        let errors = check("min:0;max:10", items.as_field_value());

        prop_assert_eq!(
            errors.contains(&RuleError::MinFailed),
            items.iter().any(|n| *n < 0)
        );
        prop_assert_eq!(
            errors.contains(&RuleError::MaxFailed),
            items.iter().any(|n| *n > 10)
        );
    }

    #[test]
    fn text_sequence_reports_at_most_once_per_rule(
        items in prop::collection::vec("[a ]{0,3}", 0..6),
    ) {
        let errors = check("not_empty;max:2", items.as_field_value());
        prop_assert!(errors.len() <= 2);
        prop_assert_eq!(
            errors.contains(&RuleError::NotEmptyFailed),
            items.iter().any(|s| s.trim().is_empty())
        );
        prop_assert_eq!(
            errors.contains(&RuleError::MaxFailed),
            items.iter().any(|s| s.len() > 2)
        );
    }
}

// ============================================================================
// DETERMINISM
// ============================================================================

proptest! {
    #[test]
    fn validation_is_idempotent(rules in "[a-z_:;,0-9]{0,16}", s in ".{0,8}") {
        let first = check(&rules, FieldValue::Text(&s));
        let second = check(&rules, FieldValue::Text(&s));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_rule_strings_never_panic(rules in ".{0,24}", n in any::<i32>()) {
        let errors = check(&rules, FieldValue::Integer(n.into()));
        prop_assert!(errors.len() <= rules.split(';').count());
    }

    #[test]
    fn unruled_fields_always_pass(s in ".*") {
        let free = Field::new("free", Visibility::Restricted, None, FieldValue::Text(&s));
        let record = Table(vec![free]);
        prop_assert!(record.validate().is_ok());
    }
}

struct Table<'a>(Vec<Field<'a>>);

impl Record for Table<'_> {
    fn layout(&self) -> Layout<'_> {
        Layout::Struct(self.0.clone())
    }
}
