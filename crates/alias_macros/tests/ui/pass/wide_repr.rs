//! `u64` repr whose discriminants fit the `i64` ordinal.

use alias_registry::{AliasRegistry, Described};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Described)]
#[repr(u64)]
pub enum Quota {
    #[alias("none")]
    Empty = 0,
    #[alias("max")]
    Full = 0x7fff_ffff_ffff_ffff,
}

fn main() {
    let registry = AliasRegistry::new();
    assert_eq!(registry.to_enum::<Quota>("MAX"), Ok(Quota::Full));
    assert_eq!(
        registry.to_enum::<Quota>("9223372036854775807"),
        Ok(Quota::Full)
    );
}
