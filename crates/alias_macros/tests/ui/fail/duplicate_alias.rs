//! Error: at most one alias per variant.
use alias_registry::Described;
#[derive(Described)]
pub enum Lang {
    #[alias("uk")]
    #[alias("ua")]
    Ukraine,
}
fn main() {}
