//! Code generation for the Record derive

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Fields, FieldsNamed, Visibility};

use super::attrs;
use crate::types;

/// Generates the `Record` impl for the given input.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let layout = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => struct_layout(fields)?,
        // Tuple structs, unit structs, enums and unions have no named
        // fields to walk.
        _ => quote! { ::fieldrule::record::Layout::Opaque },
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldrule::record::Record for #name #ty_generics #where_clause {
            fn layout(&self) -> ::fieldrule::record::Layout<'_> {
                #layout
            }
        }
    })
}

fn struct_layout(fields: &FieldsNamed) -> syn::Result<TokenStream2> {
    let mut entries = Vec::new();

    for field in &fields.named {
        let Some(rules) = attrs::rule_string(&field.attrs)? else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let field_name = ident.unraw().to_string();

        let visibility = if matches!(field.vis, Visibility::Public(_)) {
            quote! { ::fieldrule::record::Visibility::Public }
        } else {
            quote! { ::fieldrule::record::Visibility::Restricted }
        };

        let value = if types::is_supported(&field.ty) {
            quote! { ::fieldrule::record::AsFieldValue::as_field_value(&self.#ident) }
        } else {
            quote! { ::fieldrule::record::FieldValue::Unsupported }
        };

        entries.push(quote! {
            ::fieldrule::record::Field::new(
                #field_name,
                #visibility,
                ::core::option::Option::Some(#rules),
                #value,
            )
        });
    }

    Ok(quote! {
        ::fieldrule::record::Layout::Struct(::std::vec![#(#entries),*])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        generate_record(&input).unwrap().to_string()
    }

    #[test]
    fn test_named_struct_lists_ruled_fields() {
        let output = expand(parse_quote! {
            pub struct Signup {
                #[validate("min:3")]
                pub name: String,
                pub note: String,
                #[validate("min:18")]
                age: u8,
            }
        });

        assert!(output.contains("\"name\""));
        assert!(output.contains("\"age\""));
        assert!(!output.contains("\"note\""));
        assert!(output.contains("Visibility :: Public"));
        assert!(output.contains("Visibility :: Restricted"));
    }

    #[test]
    fn test_unsupported_field_skips_conversion() {
        let output = expand(parse_quote! {
            pub struct Reading {
                #[validate("min:1")]
                pub value: f64,
            }
        });

        assert!(output.contains("FieldValue :: Unsupported"));
        assert!(!output.contains("as_field_value"));
    }

    #[test]
    fn test_raw_identifier_is_unraw() {
        let output = expand(parse_quote! {
            pub struct Item {
                #[validate("not_empty")]
                pub r#type: String,
            }
        });

        assert!(output.contains("\"type\""));
        assert!(output.contains("self . r#type"));
    }

    #[test]
    fn test_non_struct_inputs_are_opaque() {
        let inputs: Vec<DeriveInput> = vec![
            parse_quote! { pub struct Pair(pub String, pub i32); },
            parse_quote! { pub struct Marker; },
            parse_quote! { pub enum Choice { A, B } },
        ];

        for input in inputs {
            assert!(expand(input).contains("Layout :: Opaque"));
        }
    }

    #[test]
    fn test_generics_preserved() {
        let output = expand(parse_quote! {
            pub struct Form<'a> {
                #[validate("min:1")]
                pub name: &'a str,
            }
        });

        assert!(output.contains("impl < 'a >"));
        assert!(output.contains("Form < 'a >"));
    }

    #[test]
    fn test_bad_attribute_is_an_error() {
        let input: DeriveInput = parse_quote! {
            pub struct Signup {
                #[validate(min = 3)]
                pub name: String,
            }
        };

        assert!(generate_record(&input).is_err());
    }
}
