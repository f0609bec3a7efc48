//! Rule string grammar
//!
//! ```text
//! rule_string := rule (";" rule)*
//! rule        := name (":" argument)?
//! ```
//!
//! Splitting is purely syntactic. Names are not checked against the set of
//! known rules and arguments are not interpreted; both are the factory's job.
//! Nothing is trimmed, so `"min:1; max:2"` yields a rule named `" max"`.

use std::fmt;

use crate::foundation::RuleError;

/// Separator between rules.
pub const RULE_SEPARATOR: char = ';';

/// Separator between a rule name and its argument.
pub const ARGUMENT_SEPARATOR: char = ':';

/// One rule occurrence inside a rule string, e.g. `min:3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleDescriptor<'a> {
    /// Rule keyword, as written.
    pub name: &'a str,
    /// Everything after the first `:`; `None` when no `:` was written.
    pub args: Option<&'a str>,
}

impl<'a> RuleDescriptor<'a> {
    /// Creates a descriptor.
    pub const fn new(name: &'a str, args: Option<&'a str>) -> Self {
        Self { name, args }
    }
}

impl fmt::Display for RuleDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.args {
            Some(args) => write!(f, "{}{ARGUMENT_SEPARATOR}{args}", self.name),
            None => f.write_str(self.name),
        }
    }
}

/// Splits a rule string into descriptors, in the order they were written.
///
/// Fails only when a rule segment has no name: an empty string, `;;`, a
/// trailing `;`, or a segment starting with `:`.
///
/// # Examples
///
/// ```rust
/// use fieldrule::rules::{RuleDescriptor, parse};
///
/// let rules = parse("min:3;in:a,b;not_empty").unwrap();
/// assert_eq!(
///     rules,
///     vec![
///         RuleDescriptor::new("min", Some("3")),
///         RuleDescriptor::new("in", Some("a,b")),
///         RuleDescriptor::new("not_empty", None),
///     ]
/// );
/// ```
pub fn parse(rule_string: &str) -> Result<Vec<RuleDescriptor<'_>>, RuleError> {
    rule_string.split(RULE_SEPARATOR).map(parse_rule).collect()
}

fn parse_rule(rule: &str) -> Result<RuleDescriptor<'_>, RuleError> {
    let (name, args) = match rule.split_once(ARGUMENT_SEPARATOR) {
        Some((name, args)) => (name, Some(args)),
        None => (rule, None),
    };

    if name.is_empty() {
        return Err(RuleError::Syntax);
    }

    Ok(RuleDescriptor { name, args })
}

// ============================================================================
// TESTS
// ============================================================================
