//! Error: an enum needs a variant to act as the sentinel.
use alias_registry::Described;
#[derive(Described)]
pub enum Never {}
fn main() {}
