//! Field dispatcher
//!
//! Walks a record's descriptor table and checks every field that carries a
//! rule string. Per field, in order:
//!
//! 1. no rule string → skipped
//! 2. not `pub` → [`RuleError::Access`]
//! 3. element kind unsupported → [`RuleError::UnsupportedType`]
//! 4. rule string parsed and the whole chain built; the first failure is the
//!    field's only error and nothing runs against the value
//! 5. every validator runs; each one that fails adds one error
//!
//! Definition errors never stop the run; the next field is still checked.
//! Chains are rebuilt on every call.

use tracing::{debug, trace};

use crate::foundation::{Error, RuleError, ValidationErrors};
use crate::record::{Field, FieldValue, Layout, Record, Visibility};
use crate::rules::{Chain, ElementKind, build, parse};

/// Validates every rule-carrying field of `record`.
///
/// Returns [`Error::NotARecord`] without checking anything when the input has
/// no named fields, and [`Error::Invalid`] when at least one field failed.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "derive")] {
/// use fieldrule::Record;
///
/// #[derive(Record)]
/// struct Person {
///     #[validate("min:18;max:65")]
///     pub age: i64,
/// }
///
/// let error = fieldrule::validate(&Person { age: 17 }).unwrap_err();
/// assert_eq!(error.to_string(), "minimum validation failed");
/// assert!(fieldrule::validate(&Person { age: 30 }).is_ok());
/// assert_eq!(fieldrule::validate(&42).unwrap_err(), fieldrule::Error::NotARecord);
/// # }
/// ```
pub fn validate<R: Record + ?Sized>(record: &R) -> Result<(), Error> {
    let fields = match record.layout() {
        Layout::Struct(fields) => fields,
        Layout::Opaque => {
            debug!("input has no named fields");
            return Err(Error::NotARecord);
        }
    };

    let span = tracing::debug_span!("validate", fields = fields.len());
    let _enter = span.enter();

    let mut errors = ValidationErrors::new();
    for field in fields {
        check_field(field, &mut errors);
    }

    debug!(failures = errors.len(), "validation finished");
    errors.into_result().map_err(Error::from)
}

fn check_field(field: Field<'_>, errors: &mut ValidationErrors) {
    let Some(rules) = field.rules else {
        return;
    };
    trace!(field = %field.name, rules, "checking field");

    match run_rules(field.visibility, rules, &field.value) {
        Ok(failures) => {
            for error in failures {
                errors.add(field.name.clone(), error);
            }
        }
        Err(error) => {
            debug!(field = %field.name, rules, %error, "rule definition rejected");
            errors.add(field.name, error);
        }
    }
}

/// Returns the value failures, or the definition error that stopped the field.
fn run_rules(
    visibility: Visibility,
    rules: &str,
    value: &FieldValue<'_>,
) -> Result<Vec<RuleError>, RuleError> {
    if !visibility.is_public() {
        return Err(RuleError::Access);
    }
    let kind = value.element_kind();
    if kind == ElementKind::Unsupported {
        return Err(RuleError::UnsupportedType);
    }

    let descriptors = parse(rules)?;
    let chain = Chain::build(&descriptors, |descriptor| build(descriptor, kind))?;
    Ok(chain.check(value))
}

// ============================================================================
// TESTS
// ============================================================================
