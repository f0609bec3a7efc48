//! Rule strings: grammar and validator construction.
//!
//! [`parse`] splits a rule string into [`RuleDescriptor`]s without looking at
//! what they mean. [`build`] (or the typed [`build_text`] / [`build_integer`])
//! turns one descriptor into a validator and is the single place that decides
//! whether a rule, its argument, and the target element kind fit together.
//! A [`Chain`] holds the validators built from one rule string.

pub mod chain;
pub mod factory;
pub mod grammar;

pub use chain::Chain;
pub use factory::{
    ElementKind, IntegerRule, RuleName, TextRule, Validator, build, build_integer, build_text,
};
pub use grammar::{RuleDescriptor, parse};
