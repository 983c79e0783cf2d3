//! `#[default]` sentinel with explicit discriminants and a repr.

use alias_registry::{AliasRegistry, Described, Resolution};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Described)]
#[repr(u8)]
pub enum Status {
    #[alias("active")]
    Active = 1,
    #[default]
    #[alias("unknown")]
    Unknown = 7,
    #[alias("retired")]
    Retired = 9,
}

#[derive(Described)]
pub struct Envelope {
    pub status: u8,
}

fn main() {
    let registry = AliasRegistry::new();
    assert_eq!(
        registry.resolve::<Status>("missing"),
        Ok(Resolution::Defaulted(Status::Unknown))
    );
    assert_eq!(registry.to_enum::<Status>("9"), Ok(Status::Retired));
    assert!(registry.to_enum::<Envelope>("anything").is_err());
}
