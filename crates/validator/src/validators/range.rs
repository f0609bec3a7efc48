//! Integer bound validators
//!
//! All integer field values are widened to `i128` before they reach a
//! validator, so one pair of types covers every supported integer width.

use crate::foundation::RuleError;

crate::validator! {
    /// Validates that a value is at least `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min { min: i128 } for i128;
    rule(self, input) { *input >= self.min }
    error { RuleError::MinFailed }
    fn min(min: i128);
}

crate::validator! {
    /// Validates that a value does not exceed `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max { max: i128 } for i128;
    rule(self, input) { *input <= self.max }
    error { RuleError::MaxFailed }
    fn max(max: i128);
}
