//! Rule factory: descriptor + element kind → concrete validator
//!
//! The legal (rule, kind) combinations are encoded in the output types.
//! [`TextRule`] has a variant for every rule, [`IntegerRule`] only for
//! `min`, `max` and `in`, so a validator for an illegal pair cannot exist.
//!
//! For every descriptor the checks run in a fixed order:
//!
//! 1. unknown keyword → [`RuleError::Syntax`]
//! 2. malformed or missing argument → [`RuleError::Syntax`]
//! 3. pair outside the table → [`RuleError::UnsupportedType`]

use std::fmt;
use std::str::FromStr;

use super::grammar::RuleDescriptor;
use crate::combinators::Each;
use crate::foundation::{RuleError, Validate};
use crate::record::FieldValue;
use crate::validators::{ExactLength, Max, MaxLength, Min, MinLength, NotBlank, OneOf};

/// Separator between whitelist items in an `in` argument.
pub const LIST_SEPARATOR: char = ',';

// ============================================================================
// ELEMENT KIND
// ============================================================================

/// Scalar category a validator operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// UTF-8 text; length rules count bytes.
    String,
    /// Signed or unsigned integer up to 64 bits.
    Integer,
    /// Anything else.
    Unsupported,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Unsupported => "unsupported",
        })
    }
}

// ============================================================================
// RULE NAMES
// ============================================================================

/// Recognized rule keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// `min:<int>`
    Min,
    /// `max:<int>`
    Max,
    /// `len:<int>`
    Len,
    /// `in:<item>,<item>,...`
    In,
    /// `not_empty`
    NotEmpty,
}

impl RuleName {
    /// The keyword as written in rule strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Len => "len",
            Self::In => "in",
            Self::NotEmpty => "not_empty",
        }
    }
}

impl FromStr for RuleName {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "len" => Ok(Self::Len),
            "in" => Ok(Self::In),
            "not_empty" => Ok(Self::NotEmpty),
            _ => Err(RuleError::Syntax),
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BUILT VALIDATORS
// ============================================================================

/// A validator over string elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextRule {
    /// `min`: byte-length lower bound.
    Min(MinLength),
    /// `max`: byte-length upper bound.
    Max(MaxLength),
    /// `len`: exact byte length.
    Len(ExactLength),
    /// `in`: string whitelist.
    In(OneOf<String>),
    /// `not_empty`: non-blank after trimming.
    NotEmpty(NotBlank),
}

impl Validate for TextRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), RuleError> {
        match self {
            Self::Min(v) => v.validate(input),
            Self::Max(v) => v.validate(input),
            Self::Len(v) => v.validate(input),
            Self::In(v) => v.validate(input),
            Self::NotEmpty(v) => v.validate(input),
        }
    }
}

/// A validator over integer elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerRule {
    /// `min`: numeric lower bound.
    Min(Min),
    /// `max`: numeric upper bound.
    Max(Max),
    /// `in`: integer whitelist.
    In(OneOf<i128>),
}

impl Validate for IntegerRule {
    type Input = i128;

    fn validate(&self, input: &i128) -> Result<(), RuleError> {
        match self {
            Self::Min(v) => v.validate(input),
            Self::Max(v) => v.validate(input),
            Self::In(v) => v.validate(input),
        }
    }
}

/// A validator for either element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// Operates on string elements.
    Text(TextRule),
    /// Operates on integer elements.
    Integer(IntegerRule),
}

impl Validator {
    /// The element kind this validator accepts.
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::String,
            Self::Integer(_) => ElementKind::Integer,
        }
    }

    /// Checks a field value: a scalar directly, a sequence element by element
    /// up to the first failure.
    ///
    /// A value of another element kind fails with [`RuleError::UnsupportedType`].
    pub fn check(&self, value: &FieldValue<'_>) -> Result<(), RuleError> {
        match (self, value) {
            (Self::Text(rule), FieldValue::Text(text)) => rule.validate(text),
            (Self::Text(rule), FieldValue::TextList(items)) => {
                Each::new(rule).validate_all(items.iter().copied())
            }
            (Self::Integer(rule), FieldValue::Integer(n)) => rule.validate(n),
            (Self::Integer(rule), FieldValue::IntegerList(items)) => {
                Each::new(rule).validate_all(items)
            }
            _ => Err(RuleError::UnsupportedType),
        }
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Builds the validator for `descriptor` applied to elements of `kind`.
pub fn build(descriptor: &RuleDescriptor<'_>, kind: ElementKind) -> Result<Validator, RuleError> {
    match kind {
        ElementKind::String => build_text(descriptor).map(Validator::Text),
        ElementKind::Integer => build_integer(descriptor).map(Validator::Integer),
        // Every rule is legal on strings, so this checks name and argument.
        ElementKind::Unsupported => build_text(descriptor).and(Err(RuleError::UnsupportedType)),
    }
}

/// Builds a validator for string elements.
pub fn build_text(descriptor: &RuleDescriptor<'_>) -> Result<TextRule, RuleError> {
    let rule = match descriptor.name.parse()? {
        RuleName::Min => TextRule::Min(MinLength::new(integer_arg(descriptor)?)),
        RuleName::Max => TextRule::Max(MaxLength::new(integer_arg(descriptor)?)),
        RuleName::Len => TextRule::Len(ExactLength::new(integer_arg(descriptor)?)),
        RuleName::In => TextRule::In(OneOf::new(
            list_arg(descriptor)?.map(str::to_owned).collect(),
        )),
        RuleName::NotEmpty => {
            no_arg(descriptor)?;
            TextRule::NotEmpty(NotBlank)
        }
    };
    Ok(rule)
}

/// Builds a validator for integer elements.
pub fn build_integer(descriptor: &RuleDescriptor<'_>) -> Result<IntegerRule, RuleError> {
    match descriptor.name.parse()? {
        RuleName::Min => Ok(IntegerRule::Min(Min::new(integer_arg(descriptor)?))),
        RuleName::Max => Ok(IntegerRule::Max(Max::new(integer_arg(descriptor)?))),
        RuleName::In => {
            let items = list_arg(descriptor)?
                .map(parse_integer)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(IntegerRule::In(OneOf::new(items)))
        }
        RuleName::Len => {
            integer_arg(descriptor)?;
            Err(RuleError::UnsupportedType)
        }
        RuleName::NotEmpty => {
            no_arg(descriptor)?;
            Err(RuleError::UnsupportedType)
        }
    }
}

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Integers are read with 64-bit signed range and widened afterwards.
fn parse_integer(raw: &str) -> Result<i128, RuleError> {
    raw.parse::<i64>()
        .map(i128::from)
        .map_err(|_| RuleError::Syntax)
}

fn integer_arg(descriptor: &RuleDescriptor<'_>) -> Result<i128, RuleError> {
    descriptor.args.ok_or(RuleError::Syntax).and_then(parse_integer)
}

/// `in:` yields no items at all, not one empty item.
fn list_arg<'a>(
    descriptor: &RuleDescriptor<'a>,
) -> Result<impl Iterator<Item = &'a str>, RuleError> {
    let args = descriptor.args.ok_or(RuleError::Syntax)?;
    Ok(args
        .split(LIST_SEPARATOR)
        .filter(move |_| !args.is_empty()))
}

fn no_arg(descriptor: &RuleDescriptor<'_>) -> Result<(), RuleError> {
    match descriptor.args {
        None => Ok(()),
        Some(_) => Err(RuleError::Syntax),
    }
}

// ============================================================================
// TESTS
// ============================================================================
