//! Parsing of #[validate("...")] attributes

use syn::{Attribute, LitStr, Meta};

const ATTR: &str = "validate";

/// Returns the rule string attached to a field, if any.
///
/// # Errors
///
/// - the attribute is not of the form `#[validate("...")]`
/// - the field carries more than one `#[validate]` attribute
pub(super) fn rule_string(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }

        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[validate] attribute.\n\
                 \n\
                 Join the rules into one string: #[validate(\"min:1;max:10\")]",
            ));
        }

        found = Some(parse_rules(attr)?);
    }

    Ok(found)
}

fn parse_rules(attr: &Attribute) -> syn::Result<LitStr> {
    match &attr.meta {
        Meta::List(_) => attr.parse_args::<LitStr>().map_err(|err| {
            syn::Error::new(
                err.span(),
                "expected a rule string literal: #[validate(\"min:1;max:10\")]",
            )
        }),
        Meta::Path(_) | Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected a rule string: #[validate(\"min:1;max:10\")]",
        )),
    }
}
