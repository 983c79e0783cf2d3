//! Alias Registry - memoized enum ⇄ string alias translation
//!
//! Maps the members of a closed enum type to the external strings used for
//! them on the wire (JSON fields, API contracts) and back again:
//! - value → alias (`AliasRegistry::get_alias`)
//! - alias → value (`AliasRegistry::to_enum`, `AliasRegistry::resolve`)
//! - value → every alias of its type (`AliasRegistry::get_enum_aliases`)
//!
//! # Metadata
//!
//! Alias metadata is a static table produced at compile time by
//! `#[derive(Described)]`; nothing is discovered by runtime introspection.
//!
//! ```text
//! #[derive(Clone, Copy, Described)]
//! enum Lang {
//!     #[alias("")]
//!     None,
//!     #[alias("uk")]
//!     Ukraine,
//!     #[alias("en")]
//!     English,
//! }
//!
//! let registry = AliasRegistry::new();
//! assert_eq!(registry.to_enum::<Lang>("UK")?, Lang::Ukraine);
//! assert_eq!(registry.get_alias(&Lang::English)?, "en");
//! ```
//!
//! # Caching
//!
//! Each projection is scanned once per key and memoized for the registry's
//! lifetime. Registries are plain values: construct one and pass it (or a
//! [`SharedRegistry`]) to whoever needs it.

// Lets the derive's `::alias_registry::` paths resolve in unit tests
#[cfg(test)]
extern crate self as alias_registry;

mod cache;
mod discovery;
mod error;
mod ext;
mod key;
mod registry;
mod resolution;
mod shape;
mod tracing_setup;

pub use alias_macros::Described;
pub use error::UnsupportedTypeError;
pub use ext::{AliasExt, ToEnumExt};
pub use registry::{AliasRegistry, RegistryConfig, RegistryStats, SharedRegistry};
pub use resolution::Resolution;
pub use shape::{Described, EnumShape, MemberShape, Shape, ShapeKind};
pub use tracing_setup::{init_tracing, LOG_ENV};
