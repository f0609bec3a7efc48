//! Core traits for the validation system
//!
//! This module defines the fundamental trait every built validator implements.

use crate::foundation::RuleError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait all validators implement.
///
/// Generic over the input type so that each validator only ever sees values
/// of the element kind it was built for. Validators are immutable after
/// construction.
///
/// # Examples
///
/// ```rust
/// use fieldrule::foundation::{RuleError, Validate};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i128;
///
///     fn validate(&self, input: &i128) -> Result<(), RuleError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(RuleError::InFailed)
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), RuleError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), RuleError> {
        (**self).validate(input)
    }
}
