//! Error: aliases are string literals.
use alias_registry::Described;
#[derive(Described)]
pub enum Lang {
    #[alias(42)]
    Ukraine,
}
fn main() {}
