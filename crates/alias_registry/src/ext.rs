//! Method-call sugar over [`AliasRegistry`].
//!
//! ```text
//! let lang = "uk".to_enum_in::<Lang>(&registry)?;
//! assert_eq!(lang.alias_in(&registry)?, "uk");
//! ```

use std::sync::Arc;

use crate::error::UnsupportedTypeError;
use crate::registry::AliasRegistry;
use crate::shape::Described;

/// Alias lookups called on a described value.
pub trait AliasExt: Described {
    fn alias_in(&self, registry: &AliasRegistry) -> Result<&'static str, UnsupportedTypeError> {
        registry.get_alias(self)
    }

    fn enum_aliases_in(
        &self,
        registry: &AliasRegistry,
    ) -> Result<Arc<[&'static str]>, UnsupportedTypeError> {
        registry.get_enum_aliases(self)
    }
}

impl<T: Described> AliasExt for T {}

/// Alias → value lookup called on the request text.
pub trait ToEnumExt {
    fn to_enum_in<T: Described>(&self, registry: &AliasRegistry)
        -> Result<T, UnsupportedTypeError>;
}

impl ToEnumExt for str {
    fn to_enum_in<T: Described>(
        &self,
        registry: &AliasRegistry,
    ) -> Result<T, UnsupportedTypeError> {
        registry.to_enum(self)
    }
}
