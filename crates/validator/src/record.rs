//! Records and their field descriptor tables
//!
//! A [`Record`] describes itself as a [`Layout`]: either a flat list of named
//! [`Field`]s or [`Layout::Opaque`] for anything without named fields. Each
//! field carries its name, visibility, optional rule string, and its current
//! value as a [`FieldValue`].
//!
//! The table is normally generated by `#[derive(Record)]`, but can be written
//! by hand:
//!
//! ```rust
//! use fieldrule::record::{AsFieldValue, Field, Layout, Record, Visibility};
//!
//! struct Signup {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Record for Signup {
//!     fn layout(&self) -> Layout<'_> {
//!         Layout::Struct(vec![
//!             Field::new(
//!                 "name",
//!                 Visibility::Public,
//!                 Some("min:1;max:32"),
//!                 self.name.as_field_value(),
//!             ),
//!             Field::new(
//!                 "age",
//!                 Visibility::Public,
//!                 Some("min:18"),
//!                 self.age.as_field_value(),
//!             ),
//!         ])
//!     }
//! }
//!
//! let signup = Signup { name: "ann".into(), age: 17 };
//! assert_eq!(signup.validate().unwrap_err().to_string(), "minimum validation failed");
//! ```

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::Error;
use crate::rules::ElementKind;

// ============================================================================
// RECORD
// ============================================================================

/// A value whose named fields can be validated.
pub trait Record {
    /// Describes the fields of this value, in declaration order.
    fn layout(&self) -> Layout<'_>;

    /// Validates every rule-carrying field.
    ///
    /// Shorthand for [`crate::validate`].
    fn validate(&self) -> Result<(), Error> {
        crate::engine::validate(self)
    }
}

/// The shape a [`Record`] exposes to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout<'a> {
    /// A composite with named fields, in declaration order.
    Struct(Vec<Field<'a>>),
    /// Anything else: enums, tuple and unit structs, scalars, sequences.
    Opaque,
}

/// Whether a field can be read from outside its defining module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Declared `pub`.
    Public,
    /// Private or restricted (`pub(crate)`, `pub(super)`, `pub(in ..)`).
    Restricted,
}

impl Visibility {
    /// Returns true for [`Visibility::Public`].
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

/// One entry of a record's descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    /// Declared field name.
    pub name: Cow<'static, str>,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Attached rule string; fields without one are never checked.
    pub rules: Option<&'a str>,
    /// Current value.
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Creates a field descriptor.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        visibility: Visibility,
        rules: Option<&'a str>,
        value: FieldValue<'a>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            rules,
            value,
        }
    }
}

// ============================================================================
// FIELD VALUES
// ============================================================================

/// The value of one field, reduced to the shapes the engine understands.
///
/// Integers of every supported width are widened to `i128`. A sequence's
/// element kind is fixed by its variant, so an empty sequence still has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A string scalar.
    Text(&'a str),
    /// An integer scalar.
    Integer(i128),
    /// A homogeneous sequence of strings.
    TextList(Vec<&'a str>),
    /// A homogeneous sequence of integers.
    IntegerList(Vec<i128>),
    /// A value of any other type. Only its kind matters.
    Unsupported,
}

impl FieldValue<'_> {
    /// Returns the kind of the scalar, or of each element of a sequence.
    pub const fn element_kind(&self) -> ElementKind {
        match self {
            Self::Text(_) | Self::TextList(_) => ElementKind::String,
            Self::Integer(_) | Self::IntegerList(_) => ElementKind::Integer,
            Self::Unsupported => ElementKind::Unsupported,
        }
    }
}

/// Conversion of a Rust value into a [`FieldValue`].
pub trait AsFieldValue {
    /// Borrows `self` as a field value.
    fn as_field_value(&self) -> FieldValue<'_>;
}

/// Types that can appear as elements of a sequence field.
pub trait ListElement {
    /// Collects a sequence of `Self` into the matching list variant.
    fn collect_list<'a, I>(items: I) -> FieldValue<'a>
    where
        Self: 'a,
        I: Iterator<Item = &'a Self>;
}

// ── strings ─────────────────────────────────────────────────────────────────

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

macro_rules! text_field_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl AsFieldValue for $ty {
            fn as_field_value(&self) -> FieldValue<'_> {
                FieldValue::Text(self)
            }
        }

        impl ListElement for $ty {
            fn collect_list<'a, I>(items: I) -> FieldValue<'a>
            where
                Self: 'a,
                I: Iterator<Item = &'a Self>,
            {
                FieldValue::TextList(items.map(|s| &**s).collect())
            }
        }
    )+};
}

text_field_value!(String, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>, &str);

// ── integers ────────────────────────────────────────────────────────────────

macro_rules! integer_field_value {
    ($($ty:ty),+ $(,)?) => {$(
        impl AsFieldValue for $ty {
            fn as_field_value(&self) -> FieldValue<'_> {
                FieldValue::Integer(*self as i128)
            }
        }

        impl ListElement for $ty {
            fn collect_list<'a, I>(items: I) -> FieldValue<'a>
            where
                Self: 'a,
                I: Iterator<Item = &'a Self>,
            {
                FieldValue::IntegerList(items.map(|n| *n as i128).collect())
            }
        }
    )+};
}

integer_field_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ── sequences ───────────────────────────────────────────────────────────────

impl<T: ListElement> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::collect_list(self.iter())
    }
}

impl<T: ListElement, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::collect_list(self.iter())
    }
}

impl<T: ListElement> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::collect_list(self.iter())
    }
}

impl<T: ListElement> AsFieldValue for VecDeque<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::collect_list(self.iter())
    }
}

impl<T: ListElement> AsFieldValue for &[T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        T::collect_list(self.iter())
    }
}

// ============================================================================
// OPAQUE RECORDS
// ============================================================================

macro_rules! opaque_record {
    ($($ty:ty),+ $(,)?) => {$(
        impl Record for $ty {
            fn layout(&self) -> Layout<'_> {
                Layout::Opaque
            }
        }
    )+};
}

opaque_record!(
    str, String, bool, char, f32, f64, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
    u128, usize,
);

impl<T> Record for [T] {
    fn layout(&self) -> Layout<'_> {
        Layout::Opaque
    }
}

impl<T> Record for Vec<T> {
    fn layout(&self) -> Layout<'_> {
        Layout::Opaque
    }
}

impl<T> Record for Option<T> {
    fn layout(&self) -> Layout<'_> {
        Layout::Opaque
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn layout(&self) -> Layout<'_> {
        (**self).layout()
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn layout(&self) -> Layout<'_> {
        (**self).layout()
    }
}

// ============================================================================
// TESTS
// ============================================================================
