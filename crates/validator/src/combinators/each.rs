//! EACH combinator - validates each element of a sequence

use std::borrow::Borrow;

use crate::foundation::{RuleError, Validate};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies a scalar validator to every element of a sequence.
///
/// Elements are checked in order and the first failure is returned as-is;
/// later elements are not inspected. An empty sequence always passes.
///
/// # Examples
///
/// ```rust
/// use fieldrule::combinators::each;
/// use fieldrule::foundation::RuleError;
/// use fieldrule::validators::not_blank;
///
/// let validator = each(not_blank());
/// assert!(validator.validate_all(["a", "b"]).is_ok());
/// assert_eq!(
///     validator.validate_all(["a", " "]),
///     Err(RuleError::NotEmptyFailed)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Wraps a scalar validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Each<V> {
    /// Validates every item yielded by `items`, stopping at the first failure.
    pub fn validate_all<I>(&self, items: I) -> Result<(), RuleError>
    where
        I: IntoIterator,
        I::Item: Borrow<V::Input>,
    {
        items
            .into_iter()
            .try_for_each(|item| self.inner.validate(item.borrow()))
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        self.validate_all(input)
    }
}

/// Wraps a scalar validator so it applies element-wise.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
