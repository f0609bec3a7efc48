//! String content validators

use crate::foundation::RuleError;

crate::validator! {
    /// Validates that a string still has content after trimming whitespace.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error { RuleError::NotEmptyFailed }
    fn not_blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_not_blank() {
        assert!(not_blank().validate("a").is_ok());
        assert!(not_blank().validate("  a ").is_ok());
        assert_eq!(not_blank().validate(""), Err(RuleError::NotEmptyFailed));
        assert_eq!(
            not_blank().validate(" \t\n"),
            Err(RuleError::NotEmptyFailed)
        );
    }
}
