//! Macro for declaring scalar validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldrule::foundation::RuleError;
//!
//! // Unit validator (no fields)
//! fieldrule::validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error { RuleError::NotEmptyFailed }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! fieldrule::validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: i128 } for str;
//!     rule(self, input) { input.len() as i128 >= self.min }
//!     error { RuleError::MinFailed }
//!     fn min_length(min: i128);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and optional factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ─────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule { Ok(()) } else { Err($err) }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::RuleError> {
                if $rule { Ok(()) } else { Err($err) }
            }
        }
    };
}
