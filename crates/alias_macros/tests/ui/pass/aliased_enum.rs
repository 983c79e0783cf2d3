//! Enum with aliases, an empty alias and an unaliased variant.

use alias_registry::{AliasRegistry, Described};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Described)]
pub enum Lang {
    #[alias("")]
    None,
    #[alias("uk")]
    Ukraine,
    #[alias("en")]
    English,
    Klingon,
}

fn main() {
    let registry = AliasRegistry::new();
    assert_eq!(registry.to_enum::<Lang>("UK"), Ok(Lang::Ukraine));
    assert_eq!(registry.get_alias(&Lang::Klingon), Ok(""));
    assert_eq!(
        registry.get_enum_aliases(&Lang::English).map(|list| list.to_vec()),
        Ok(vec!["uk", "en", "Klingon"])
    );
}
