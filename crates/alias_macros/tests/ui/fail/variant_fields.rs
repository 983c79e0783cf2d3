//! Error: variants must not carry data.
use alias_registry::Described;
#[derive(Described)]
pub enum Value {
    Text(String),
}
fn main() {}
