//! Whitelist membership validator

use crate::foundation::{RuleError, Validate};

/// Validates that a value is one of a fixed set of items.
///
/// An empty whitelist rejects every value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OneOf<T> {
    /// Accepted values, in declaration order.
    pub items: Vec<T>,
}

impl<T> OneOf<T> {
    /// Creates a membership validator over `items`.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl Validate for OneOf<String> {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), RuleError> {
        if self.items.iter().any(|item| item == input) {
            Ok(())
        } else {
            Err(RuleError::InFailed)
        }
    }
}

impl Validate for OneOf<i128> {
    type Input = i128;

    fn validate(&self, input: &i128) -> Result<(), RuleError> {
        if self.items.contains(input) {
            Ok(())
        } else {
            Err(RuleError::InFailed)
        }
    }
}

/// Creates a membership validator.
#[must_use]
pub fn one_of<T>(items: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf::new(items.into_iter().collect())
}
