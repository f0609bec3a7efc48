//! Procedural macros for fieldrule
//!
//! - **`#[derive(Record)]`** - generates the field descriptor table the
//!   validation engine walks.
//!
//! # Architecture
//!
//! - `record/` - Record derive implementation
//! - `types` - syntactic field type classification

use proc_macro::TokenStream;

mod record;
mod types;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `fieldrule::Record` for a struct.
///
/// Every named field carrying a `#[validate("...")]` attribute becomes one
/// entry of the descriptor table, in declaration order. Fields without the
/// attribute are left out and never checked.
///
/// # Attributes
///
/// - `#[validate("min:3;max:20")]` - rule string for the field
///
/// # Field types
///
/// The element kind is decided from the field's declared type:
///
/// - **String**: `String`, `&str`, `Box<str>`, `Rc<str>`, `Arc<str>`, `Cow<str>`
/// - **Integer**: `i8`..`i64`, `isize`, `u8`..`u64`, `usize`
/// - **Sequence**: `Vec<T>`, `VecDeque<T>`, `[T; N]`, `&[T]` of the above
///
/// Any other type (including aliases of the types above) is reported at
/// validation time as `RuleError::UnsupportedType`.
///
/// # Visibility
///
/// Only `pub` fields may carry rules. A rule on a private or restricted
/// (`pub(crate)`, `pub(super)`, ...) field is reported as `RuleError::Access`.
///
/// # Non-struct input
///
/// Enums, tuple structs and unit structs derive an opaque record, which
/// `fieldrule::validate` rejects with `Error::NotARecord`.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldrule::Record;
///
/// #[derive(Record)]
/// pub struct Profile {
///     #[validate("len:5")]
///     pub code: String,
///
///     #[validate("min:18;max:65")]
///     pub age: i64,
///
///     #[validate("not_empty")]
///     pub tags: Vec<String>,
/// }
///
/// profile.validate()?;
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
