//! Syntactic field type classification
//!
//! Decides from a field's declared type whether the generated code can
//! convert it into a `FieldValue`. Only the written form of the type is
//! inspected, so aliases and user types are always `Unknown`.

use syn::{GenericArgument, PathArguments, PathSegment, Type, TypePath};

// ============================================================================
// TYPE CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeCategory {
    /// `String`, `&str`, `Box<str>`, `Rc<str>`, `Arc<str>`, `Cow<str>`
    Text,
    /// Primitive integers up to 64 bits
    Integer,
    /// `Vec`, `VecDeque`, array or shared slice of `Text` or `Integer`
    Sequence,
    Unknown,
}

/// Returns true if the field type converts into a `FieldValue`.
pub(crate) fn is_supported(ty: &Type) -> bool {
    detect_type(ty) != TypeCategory::Unknown
}

pub(crate) fn detect_type(ty: &Type) -> TypeCategory {
    match ty {
        Type::Group(group) => detect_type(&group.elem),
        Type::Paren(paren) => detect_type(&paren.elem),
        Type::Path(type_path) => detect_from_path(type_path),
        Type::Array(array) if is_element(&array.elem) => TypeCategory::Sequence,
        Type::Reference(reference) if reference.mutability.is_none() => {
            match strip(&reference.elem) {
                elem if is_str(elem) => TypeCategory::Text,
                Type::Slice(slice) if is_element(&slice.elem) => TypeCategory::Sequence,
                _ => TypeCategory::Unknown,
            }
        }
        _ => TypeCategory::Unknown,
    }
}

fn detect_from_path(type_path: &TypePath) -> TypeCategory {
    if type_path.qself.is_some() {
        return TypeCategory::Unknown;
    }
    let Some(segment) = type_path.path.segments.last() else {
        return TypeCategory::Unknown;
    };

    match segment.ident.to_string().as_str() {
        "String" if segment.arguments.is_none() => TypeCategory::Text,
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize"
            if segment.arguments.is_none() =>
        {
            TypeCategory::Integer
        }
        "Box" | "Rc" | "Arc" | "Cow" if wraps_str(segment) => TypeCategory::Text,
        "Vec" | "VecDeque" => match single_type_argument(segment) {
            Some(elem) if is_element(elem) => TypeCategory::Sequence,
            _ => TypeCategory::Unknown,
        },
        _ => TypeCategory::Unknown,
    }
}

fn is_element(ty: &Type) -> bool {
    matches!(detect_type(ty), TypeCategory::Text | TypeCategory::Integer)
}

fn strip(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => strip(&group.elem),
        Type::Paren(paren) => strip(&paren.elem),
        _ => ty,
    }
}

fn is_str(ty: &Type) -> bool {
    matches!(strip(ty), Type::Path(path) if path.qself.is_none() && path.path.is_ident("str"))
}

/// `Box<str>`, `Rc<str>`, `Arc<str>`, `Cow<'_, str>`
fn wraps_str(segment: &PathSegment) -> bool {
    single_type_argument(segment).is_some_and(is_str)
}

/// Returns the only type argument of a segment, ignoring lifetimes.
fn single_type_argument(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });

    match (types.next(), types.next()) {
        (Some(ty), None) => Some(ty),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn category(ty: Type) -> TypeCategory {
        detect_type(&ty)
    }

    #[test]
    fn test_text_types() {
        assert_eq!(category(parse_quote!(String)), TypeCategory::Text);
        assert_eq!(
            category(parse_quote!(std::string::String)),
            TypeCategory::Text
        );
        assert_eq!(category(parse_quote!(&'a str)), TypeCategory::Text);
        assert_eq!(category(parse_quote!(Box<str>)), TypeCategory::Text);
        assert_eq!(category(parse_quote!(std::rc::Rc<str>)), TypeCategory::Text);
        assert_eq!(category(parse_quote!(Arc<str>)), TypeCategory::Text);
        assert_eq!(category(parse_quote!(Cow<'a, str>)), TypeCategory::Text);
    }

    #[test]
    fn test_integer_types() {
        for ty in [
            parse_quote!(i8),
            parse_quote!(i16),
            parse_quote!(i32),
            parse_quote!(i64),
            parse_quote!(isize),
            parse_quote!(u8),
            parse_quote!(u16),
            parse_quote!(u32),
            parse_quote!(u64),
            parse_quote!(usize),
        ] {
            assert_eq!(category(ty), TypeCategory::Integer);
        }
    }

    #[test]
    fn test_sequence_types() {
        assert_eq!(category(parse_quote!(Vec<String>)), TypeCategory::Sequence);
        assert_eq!(category(parse_quote!(Vec<&'a str>)), TypeCategory::Sequence);
        assert_eq!(category(parse_quote!(VecDeque<u8>)), TypeCategory::Sequence);
        assert_eq!(category(parse_quote!([i64; 4])), TypeCategory::Sequence);
        assert_eq!(category(parse_quote!(&'a [u32])), TypeCategory::Sequence);
        assert_eq!(category(parse_quote!(&'a [String])), TypeCategory::Sequence);
    }

    #[test]
    fn test_unknown_types() {
        for ty in [
            parse_quote!(f64),
            parse_quote!(bool),
            parse_quote!(i128),
            parse_quote!(u128),
            parse_quote!(char),
            parse_quote!(Option<String>),
            parse_quote!(Vec<Vec<String>>),
            parse_quote!(Vec<f32>),
            parse_quote!(&'a mut str),
            parse_quote!(&'a mut [u8]),
            parse_quote!(Box<String>),
            parse_quote!(HashMap<String, String>),
            parse_quote!(UserId),
            parse_quote!(String<u8>),
        ] {
            assert_eq!(category(ty), TypeCategory::Unknown);
        }
    }
}
