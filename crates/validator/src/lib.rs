//! # fieldrule
//!
//! Declarative validation of a record's fields against per-field rule strings.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "derive")] {
//! use fieldrule::Record;
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[validate("min:3;max:20")]
//!     pub username: String,
//!
//!     #[validate("min:18")]
//!     pub age: u32,
//!
//!     #[validate("in:admin,editor,viewer")]
//!     pub roles: Vec<String>,
//!
//!     pub note: String,
//! }
//!
//! let signup = Signup {
//!     username: "al".into(),
//!     age: 17,
//!     roles: vec!["editor".into()],
//!     note: String::new(),
//! };
//!
//! let error = signup.validate().unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "username: minimum validation failed\nage: minimum validation failed"
//! );
//! # }
//! ```
//!
//! ## Rule strings
//!
//! `rule (";" rule)*` where `rule` is `name` or `name:argument`:
//!
//! | rule | string | integer |
//! |---|---|---|
//! | `min:N` | byte length ≥ N | value ≥ N |
//! | `max:N` | byte length ≤ N | value ≤ N |
//! | `len:N` | byte length = N | - |
//! | `in:a,b,...` | one of the items | one of the items |
//! | `not_empty` | non-blank after trim | - |
//!
//! Sequence fields (`Vec<T>`, `[T; N]`, `&[T]`, `VecDeque<T>`) apply each rule
//! to every element and report the first element that fails.
//!
//! ## Errors
//!
//! [`validate`] fails with [`Error::NotARecord`] for inputs without named
//! fields, otherwise with [`Error::Invalid`] holding every field failure in
//! declaration order. See [`RuleError`] for the individual kinds.
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Record)]`
//! - `serde`: `Serialize` for the error types

// Lets `#[derive(Record)]` expand to `::fieldrule::...` paths inside this crate's own tests.
extern crate self as fieldrule;

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod validators;

pub use engine::validate;
pub use foundation::{Error, ErrorTier, FieldError, RuleError, ValidationErrors};
pub use record::{AsFieldValue, Field, FieldValue, Layout, Record, Visibility};

#[cfg(feature = "derive")]
pub use fieldrule_macros::Record;
