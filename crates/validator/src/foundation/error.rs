//! Error types for rule definition and value failures
//!
//! Every failure the engine can report is a unit variant of [`RuleError`],
//! matched by kind rather than by message. Failures are collected per field
//! into [`ValidationErrors`]; the only error that bypasses the aggregate is
//! [`Error::NotARecord`].

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// RULE ERROR
// ============================================================================

/// A single failure attributed to one field.
///
/// The display strings are stable and form part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The rule string is malformed, names an unknown rule, or carries an
    /// argument the rule cannot interpret.
    #[error("invalid rule syntax")]
    Syntax,

    /// A rule string is attached to a field that is not publicly visible.
    #[error("validation rule on an inaccessible field is not allowed")]
    Access,

    /// The field's type, or the rule applied to it, is outside the legal
    /// combination table.
    #[error("unsupported type")]
    UnsupportedType,

    /// `min` rejected the value.
    #[error("minimum validation failed")]
    MinFailed,

    /// `max` rejected the value.
    #[error("maximum validation failed")]
    MaxFailed,

    /// `len` rejected the value.
    #[error("len validation failed")]
    LenFailed,

    /// `in` rejected the value.
    #[error("in validation failed")]
    InFailed,

    /// `not_empty` rejected the value.
    #[error("not empty validation failed")]
    NotEmptyFailed,
}

/// Which side of the contract a [`RuleError`] blames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTier {
    /// The rule string or field declaration is invalid.
    Definition,
    /// The value did not satisfy a valid rule.
    Value,
}

impl RuleError {
    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Access => "access",
            Self::UnsupportedType => "unsupported_type",
            Self::MinFailed => "min",
            Self::MaxFailed => "max",
            Self::LenFailed => "len",
            Self::InFailed => "in",
            Self::NotEmptyFailed => "not_empty",
        }
    }

    /// Returns the tier this error belongs to.
    #[must_use]
    pub const fn tier(self) -> ErrorTier {
        match self {
            Self::Syntax | Self::Access | Self::UnsupportedType => ErrorTier::Definition,
            Self::MinFailed
            | Self::MaxFailed
            | Self::LenFailed
            | Self::InFailed
            | Self::NotEmptyFailed => ErrorTier::Value,
        }
    }

    /// Returns true for errors caused by the rule string or declaration.
    #[must_use]
    pub const fn is_definition_error(self) -> bool {
        matches!(self.tier(), ErrorTier::Definition)
    }
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A [`RuleError`] paired with the name of the field that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Declared field name.
    pub field: Cow<'static, str>,
    /// What went wrong.
    pub error: RuleError,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<Cow<'static, str>>, error: RuleError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered collection of every field failure from one validation run.
///
/// Entries keep the order they were produced in: field-declaration order,
/// then rule order within a field.
///
/// # Rendering
///
/// A collection holding exactly one failure renders as that failure's bare
/// message, without the field name. Two or more failures render one
/// `field: message` line each. The asymmetry is kept for compatibility with
/// existing consumers that match on the single-failure text; do not build on
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records a failure for `field`.
    pub fn add(&mut self, field: impl Into<Cow<'static, str>>, error: RuleError) {
        self.errors.push(FieldError::new(field, error));
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all failures in accumulation order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Iterates over the failures in accumulation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Returns the failures recorded for one field, in rule order.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = RuleError> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.error)
    }

    /// Returns true if any field failed with `kind`.
    #[must_use]
    pub fn contains(&self, kind: RuleError) -> bool {
        self.errors.iter().any(|e| e.error == kind)
    }

    /// Returns the names of failed fields, deduplicated, in first-failure order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for error in &self.errors {
            let name: &str = &error.field;
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Converts to a `Result`: `Ok(())` when nothing failed.
    ///
    /// This is the only way the engine hands a collection back, so callers
    /// never observe an empty `Err`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [only] = self.errors.as_slice() {
            return write!(f, "{}", only.error);
        }

        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input has no named fields to validate. Nothing was checked.
    #[error("argument must be a structured record")]
    NotARecord,

    /// One or more fields failed.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// Returns the field failures, if this is not a structural error.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotARecord => None,
        }
    }
}

// ============================================================================
// SERDE
// ============================================================================

#[cfg(feature = "serde")]
mod serialize {
    use super::{FieldError, RuleError, ValidationErrors};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    impl Serialize for RuleError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.code())
        }
    }

    impl Serialize for FieldError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("FieldError", 3)?;
            state.serialize_field("field", &self.field)?;
            state.serialize_field("code", self.error.code())?;
            state.serialize_field("message", &self.error.to_string())?;
            state.end()
        }
    }

    impl Serialize for ValidationErrors {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.errors.serialize(serializer)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_are_stable() {
        assert_eq!(RuleError::Syntax.to_string(), "invalid rule syntax");
        assert_eq!(
            RuleError::Access.to_string(),
            "validation rule on an inaccessible field is not allowed"
        );
        assert_eq!(RuleError::UnsupportedType.to_string(), "unsupported type");
        assert_eq!(RuleError::LenFailed.to_string(), "len validation failed");
        assert_eq!(
            Error::NotARecord.to_string(),
            "argument must be a structured record"
        );
    }

    #[test]
    fn test_tiers() {
        assert!(RuleError::Syntax.is_definition_error());
        assert!(RuleError::Access.is_definition_error());
        assert!(RuleError::UnsupportedType.is_definition_error());
        assert_eq!(RuleError::InFailed.tier(), ErrorTier::Value);
        assert_eq!(RuleError::NotEmptyFailed.tier(), ErrorTier::Value);
    }

    #[test]
    fn test_empty_collection_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_single_failure_renders_bare_message() {
        let mut errors = ValidationErrors::new();
        errors.add("name", RuleError::LenFailed);
        assert_eq!(errors.to_string(), "len validation failed");
    }

    #[test]
    fn test_multiple_failures_render_one_line_each() {
        let mut errors = ValidationErrors::new();
        errors.add("name", RuleError::LenFailed);
        errors.add("age", RuleError::MinFailed);
        errors.add("age", RuleError::InFailed);

        assert_eq!(
            errors.to_string(),
            "name: len validation failed\n\
             age: minimum validation failed\n\
             age: in validation failed"
        );
    }

    #[test]
    fn test_lookup_helpers() {
        let mut errors = ValidationErrors::new();
        errors.add("age", RuleError::MinFailed);
        errors.add("name", RuleError::Syntax);
        errors.add("age", RuleError::InFailed);

        assert_eq!(
            errors.errors_for("age").collect::<Vec<_>>(),
            vec![RuleError::MinFailed, RuleError::InFailed]
        );
        assert_eq!(errors.fields(), vec!["age", "name"]);
        assert!(errors.contains(RuleError::Syntax));
        assert!(!errors.contains(RuleError::MaxFailed));
    }

    #[test]
    fn test_invalid_is_transparent() {
        let mut errors = ValidationErrors::new();
        errors.add("tags", RuleError::NotEmptyFailed);
        let error = Error::from(errors);
        assert_eq!(error.to_string(), "not empty validation failed");
        assert_eq!(
            error.validation_errors().map(ValidationErrors::len),
            Some(1)
        );
    }

    #[test]
    fn test_zero_alloc_static_field_names() {
        let error = FieldError::new("name", RuleError::MinFailed);
        assert!(matches!(error.field, Cow::Borrowed(_)));
    }
}
