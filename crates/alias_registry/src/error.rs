use thiserror::Error;

use crate::shape::Shape;

/// A lookup was asked about a type that is not an enum.
///
/// This is a contract violation by the caller. It is reported on every call
/// and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{type_name} is not an enum")]
pub struct UnsupportedTypeError {
    pub type_name: &'static str,
}

impl UnsupportedTypeError {
    pub(crate) fn for_shape(shape: &Shape) -> Self {
        UnsupportedTypeError {
            type_name: shape.type_name,
        }
    }
}
