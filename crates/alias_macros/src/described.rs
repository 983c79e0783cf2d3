//! Described derive macro implementation.
//!
//! Generates `alias_registry::Described` implementations from type
//! definitions. Generated code uses absolute `::alias_registry` paths.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Variant};

use crate::utils::{has_default_attribute, parse_alias_attribute, parse_repr, reject_generics};

const MACRO_NAME: &str = "Described";

/// Main entry point for the Described derive macro.
pub fn derive_described(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Expand a parsed type definition into its `Described` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    reject_generics(input, MACRO_NAME)?;

    match &input.data {
        Data::Enum(data) => expand_enum(input, data),
        Data::Struct(_) => Ok(expand_struct(&input.ident)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            format!("{MACRO_NAME} derive does not support unions"),
        )),
    }
}

/// A variant after attribute parsing.
struct VariantInfo<'a> {
    ident: &'a Ident,
    alias: Option<LitStr>,
    is_default: bool,
}

fn parse_variant(variant: &Variant) -> syn::Result<VariantInfo<'_>> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            variant,
            format!("{MACRO_NAME} derive only supports fieldless variants"),
        ));
    }

    Ok(VariantInfo {
        ident: &variant.ident,
        alias: parse_alias_attribute(&variant.attrs)?,
        is_default: has_default_attribute(&variant.attrs),
    })
}

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            format!("{MACRO_NAME} derive requires at least one variant"),
        ));
    }

    let variants = data
        .variants
        .iter()
        .map(parse_variant)
        .collect::<syn::Result<Vec<_>>>()?;

    let explicit_default = match variants.iter().position(|v| v.is_default) {
        Some(index) => {
            let index = Literal::usize_unsuffixed(index);
            quote! { ::core::option::Option::Some(#index) }
        }
        None => quote! { ::core::option::Option::None },
    };

    let members = variants.iter().map(|v| {
        let ident = v.ident;
        let member_name = ident.to_string();
        let alias = match &v.alias {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        };
        quote! {
            ::alias_registry::MemberShape::new(#member_name, #name::#ident as i64, #alias)
        }
    });

    let to_index = variants.iter().enumerate().map(|(i, v)| {
        let ident = v.ident;
        let index = Literal::usize_unsuffixed(i);
        quote! { #name::#ident => #index }
    });

    let from_index = variants.iter().enumerate().map(|(i, v)| {
        let ident = v.ident;
        let index = Literal::usize_unsuffixed(i);
        quote! { #index => ::core::option::Option::Some(#name::#ident) }
    });

    let type_name = type_name_tokens(name);
    let ordinal_check = ordinal_range_check(input, &variants)?;

    Ok(quote! {
        #ordinal_check

        #[automatically_derived]
        impl ::alias_registry::Described for #name {
            const SHAPE: ::alias_registry::Shape = ::alias_registry::Shape::new(
                #type_name,
                ::alias_registry::ShapeKind::Enum(::alias_registry::EnumShape::new(
                    &[#(#members),*],
                    #explicit_default,
                )),
            );

            #[inline]
            fn variant_index(&self) -> ::core::option::Option<usize> {
                ::core::option::Option::Some(match self {
                    #(#to_index,)*
                })
            }

            #[inline]
            fn from_variant_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #(#from_index,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Compile-time guard for discriminants that may not fit the `i64` ordinal.
///
/// Only emitted for `u64`, `u128`, `usize` and `i128` reprs; every other
/// integer repr converts losslessly.
fn ordinal_range_check(
    input: &DeriveInput,
    variants: &[VariantInfo<'_>],
) -> syn::Result<TokenStream2> {
    let Some(repr) = parse_repr(&input.attrs)? else {
        return Ok(TokenStream2::new());
    };
    let name = &input.ident;

    let checks: Vec<TokenStream2> = match repr.to_string().as_str() {
        "u64" | "u128" | "usize" => variants
            .iter()
            .map(|v| {
                let ident = v.ident;
                let message = format!("{name}::{ident} discriminant exceeds i64::MAX");
                quote! {
                    ::core::assert!((#name::#ident as u128) <= (i64::MAX as u128), #message);
                }
            })
            .collect(),
        "i128" => variants
            .iter()
            .map(|v| {
                let ident = v.ident;
                let message = format!("{name}::{ident} discriminant is outside the i64 range");
                quote! {
                    ::core::assert!(
                        (#name::#ident as i128) >= (i64::MIN as i128)
                            && (#name::#ident as i128) <= (i64::MAX as i128),
                        #message
                    );
                }
            })
            .collect(),
        _ => return Ok(TokenStream2::new()),
    };

    Ok(quote! {
        const _: () = {
            #(#checks)*
        };
    })
}

fn expand_struct(name: &Ident) -> TokenStream2 {
    let type_name = type_name_tokens(name);

    quote! {
        #[automatically_derived]
        impl ::alias_registry::Described for #name {
            const SHAPE: ::alias_registry::Shape = ::alias_registry::Shape::new(
                #type_name,
                ::alias_registry::ShapeKind::Struct,
            );

            #[inline]
            fn variant_index(&self) -> ::core::option::Option<usize> {
                ::core::option::Option::None
            }

            #[inline]
            fn from_variant_index(_index: usize) -> ::core::option::Option<Self> {
                ::core::option::Option::None
            }
        }
    }
}

/// `module::path::Name`, resolved where the derive is expanded.
fn type_name_tokens(name: &Ident) -> TokenStream2 {
    let name = name.to_string();
    quote! { ::core::concat!(::core::module_path!(), "::", #name) }
}

#[cfg(test)]
mod tests;
