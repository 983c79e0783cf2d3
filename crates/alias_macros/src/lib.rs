//! Procedural macros for the alias registry.
//!
//! This crate provides the `Described` derive, which turns an enum's variant
//! list and `#[alias]` attributes into a static member table at compile time.
//!
//! # Described Derive
//!
//! ```text
//! #[derive(Clone, Copy, Default, Described)]
//! pub enum Lang {
//!     #[default]
//!     #[alias("")]
//!     None,
//!     #[alias("uk")]
//!     Ukraine,
//!     #[alias("en")]
//!     English,
//!     Klingon,
//! }
//! ```
//!
//! This generates an `alias_registry::Described` implementation whose
//! `SHAPE` lists every variant with its name, discriminant and alias.

mod described;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for static type descriptions.
///
/// # Attributes
///
/// ## Variant-level
/// - `#[alias("text")]` - External alias of this variant. At most one.
/// - `#[default]` - (from `#[derive(Default)]`) Marks the sentinel variant
///   returned when alias resolution finds no match.
///
/// # Supported Types
/// - Enums with at least one variant and no variant fields.
/// - Structs, described as non-enum types.
///
/// Generic types and unions are rejected.
#[proc_macro_derive(Described, attributes(alias))]
pub fn derive_described(input: TokenStream) -> TokenStream {
    described::derive_described(input)
}
