//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldrule::prelude::*;
//! ```

pub use crate::foundation::{Error, ErrorTier, FieldError, RuleError, Validate, ValidationErrors};

pub use crate::record::{AsFieldValue, Field, FieldValue, Layout, Record, Visibility};

pub use crate::rules::{Chain, ElementKind, RuleDescriptor, parse};

pub use crate::combinators::{Each, each};

pub use crate::engine::validate;

#[cfg(feature = "derive")]
pub use fieldrule_macros::Record;
