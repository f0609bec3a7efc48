//! Validator chains
//!
//! A chain is the ordered list of validators built from one field's rule
//! string. Every validator in the chain runs; failures are not
//! short-circuited across rules.

use super::factory::Validator;
use super::grammar::RuleDescriptor;
use crate::foundation::RuleError;
use crate::record::FieldValue;

/// Validators built from one rule string, in written order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<V> {
    validators: Vec<V>,
}

impl<V> Chain<V> {
    /// Builds every descriptor with `factory`.
    ///
    /// All-or-nothing: the first construction failure is returned and no
    /// chain exists.
    pub fn build<'a, F>(descriptors: &[RuleDescriptor<'a>], factory: F) -> Result<Self, RuleError>
    where
        F: Fn(&RuleDescriptor<'a>) -> Result<V, RuleError>,
    {
        let validators = descriptors.iter().map(factory).collect::<Result<_, _>>()?;
        Ok(Self { validators })
    }

    /// The validators, in rule order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }

    /// Number of validators in the chain.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Chain<Validator> {
    /// Runs every validator against `value` and returns their failures in
    /// rule order.
    ///
    /// Each validator contributes at most one failure. For a sequence it is
    /// the one from the first element the validator rejects.
    pub fn check(&self, value: &FieldValue<'_>) -> Vec<RuleError> {
        self.validators
            .iter()
            .filter_map(|v| v.check(value).err())
            .collect()
    }
}
