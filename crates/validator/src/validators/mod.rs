//! Built-in scalar validators
//!
//! One validator per (rule, element kind) pair that the rule factory can
//! produce:
//!
//! | rule | string | integer |
//! |---|---|---|
//! | `min` | [`MinLength`] | [`Min`] |
//! | `max` | [`MaxLength`] | [`Max`] |
//! | `len` | [`ExactLength`] | - |
//! | `in` | [`OneOf<String>`] | [`OneOf<i128>`] |
//! | `not_empty` | [`NotBlank`] | - |

pub mod content;
pub mod length;
pub mod membership;
pub mod range;

pub use content::{NotBlank, not_blank};
pub use length::{ExactLength, MaxLength, MinLength, exact_length, max_length, min_length};
pub use membership::{OneOf, one_of};
pub use range::{Max, Min, max, min};
