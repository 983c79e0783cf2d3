//! Error: unions cannot be described.
use alias_registry::Described;
#[derive(Described)]
pub union Bits { a: u32, b: f32 }
fn main() {}
