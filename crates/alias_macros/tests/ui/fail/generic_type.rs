//! Error: generic types have no single static shape.
use alias_registry::Described;
#[derive(Described)]
pub struct Tagged<T>(T);
fn main() {}
