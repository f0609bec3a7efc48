//! String length validators
//!
//! Length is always measured in bytes (`str::len`), never in chars, so
//! `"é"` has length 2. Bounds are signed: a negative `min` always passes,
//! a negative `max` or `len` never does.

use crate::foundation::RuleError;

#[inline]
fn byte_len(input: &str) -> i128 {
    input.len() as i128
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string is at least `min` bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: i128 } for str;
    rule(self, input) { byte_len(input) >= self.min }
    error { RuleError::MinFailed }
    fn min_length(min: i128);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string is at most `max` bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: i128 } for str;
    rule(self, input) { byte_len(input) <= self.max }
    error { RuleError::MaxFailed }
    fn max_length(max: i128);
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string is exactly `length` bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: i128 } for str;
    rule(self, input) { byte_len(input) == self.length }
    error { RuleError::LenFailed }
    fn exact_length(length: i128);
}

// ============================================================================
// TESTS
// ============================================================================
