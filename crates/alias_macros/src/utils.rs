//! Shared utilities for the derive implementation.

use syn::punctuated::Punctuated;
use syn::{Attribute, DeriveInput, Ident, LitStr, Meta, Token};

/// Reject types with generic parameters.
pub fn reject_generics(input: &DeriveInput, macro_name: &str) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &input.generics,
            format!("{macro_name} derive does not support generic types"),
        ))
    }
}

/// Parse the optional `#[alias("...")]` attribute, rejecting duplicates.
pub fn parse_alias_attribute(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut alias: Option<LitStr> = None;
    for attr in attrs {
        if !attr.path().is_ident("alias") {
            continue;
        }
        let lit: LitStr = attr.parse_args()?;
        if alias.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[alias] attribute; a variant has at most one alias",
            ));
        }
        alias = Some(lit);
    }
    Ok(alias)
}

/// Check for a bare `#[default]` attribute.
pub fn has_default_attribute(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|attr| matches!(&attr.meta, Meta::Path(path) if path.is_ident("default")))
}

/// The integer type named in `#[repr(...)]`, if any.
///
/// Non-integer hints such as `C` or `align(8)` are skipped.
pub fn parse_repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    const INTEGER_REPRS: &[&str] = &[
        "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
    ];

    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        let hints = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for hint in hints {
            if let Meta::Path(path) = hint {
                if let Some(ident) = path.get_ident() {
                    if INTEGER_REPRS.contains(&ident.to_string().as_str()) {
                        return Ok(Some(ident.clone()));
                    }
                }
            }
        }
    }
    Ok(None)
}
