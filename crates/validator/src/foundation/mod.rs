//! Foundation types: the [`Validate`] trait and the error model.
//!
//! Everything else in the crate builds on these two pieces.

mod error;
mod traits;

pub use error::{Error, ErrorTier, FieldError, RuleError, ValidationErrors};
pub use traits::Validate;
