//! Static type descriptions consumed by the registry.
//!
//! A [`Shape`] is generated once per type by `#[derive(Described)]` and lives
//! in read-only memory. Only enum shapes carry members; every other kind is
//! rejected by the registry with [`UnsupportedTypeError`].
//!
//! [`UnsupportedTypeError`]: crate::UnsupportedTypeError

use std::fmt;

/// One declared member of an enum type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberShape {
    /// Variant name as written in source.
    pub name: &'static str,
    /// Discriminant value.
    pub ordinal: i64,
    /// External alias from `#[alias("...")]`, if declared.
    ///
    /// `Some("")` is a declared empty alias, which differs from `None`:
    /// it is skipped in alias lists instead of falling back to the name.
    pub alias: Option<&'static str>,
}

impl MemberShape {
    pub const fn new(name: &'static str, ordinal: i64, alias: Option<&'static str>) -> Self {
        MemberShape {
            name,
            ordinal,
            alias,
        }
    }
}

/// Member table of an enum type, in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumShape {
    pub members: &'static [MemberShape],
    /// Index of the variant marked `#[default]`, if any.
    pub explicit_default: Option<usize>,
}

impl EnumShape {
    pub const fn new(members: &'static [MemberShape], explicit_default: Option<usize>) -> Self {
        EnumShape {
            members,
            explicit_default,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Index of the sentinel ("no value") member.
    ///
    /// The `#[default]` variant wins; otherwise the variant with ordinal zero;
    /// otherwise the first declared variant. `None` only for an empty table.
    pub fn sentinel_index(&self) -> Option<usize> {
        if let Some(index) = self.explicit_default {
            if index < self.members.len() {
                return Some(index);
            }
        }
        self.members
            .iter()
            .position(|member| member.ordinal == 0)
            .or_else(|| (!self.is_empty()).then_some(0))
    }
}

/// What kind of type a [`Shape`] describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A closed set of fieldless variants.
    Enum(EnumShape),
    /// A struct; described so hosts can treat wire types uniformly.
    Struct,
    /// A primitive or library type.
    Scalar,
}

/// Static description of a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Fully-qualified type name, e.g. `my_app::lang::Lang`.
    pub type_name: &'static str,
    pub kind: ShapeKind,
}

impl Shape {
    pub const fn new(type_name: &'static str, kind: ShapeKind) -> Self {
        Shape { type_name, kind }
    }

    /// The member table, or `None` if this is not an enum.
    #[inline]
    pub fn as_enum(&self) -> Option<&EnumShape> {
        match &self.kind {
            ShapeKind::Enum(shape) => Some(shape),
            ShapeKind::Struct | ShapeKind::Scalar => None,
        }
    }

    #[inline]
    pub fn is_enum(&self) -> bool {
        self.as_enum().is_some()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

/// Types that carry a static [`Shape`].
///
/// Usually derived. Manual implementations must keep `variant_index` and
/// `from_variant_index` consistent with the member table in `SHAPE`.
pub trait Described: Sized + 'static {
    const SHAPE: Shape;

    /// Position of `self` in the member table; `None` for non-enum types.
    fn variant_index(&self) -> Option<usize>;

    /// The member at `index`; `None` if out of range or not an enum.
    fn from_variant_index(index: usize) -> Option<Self>;
}

macro_rules! impl_scalar_described {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Described for $ty {
                const SHAPE: Shape = Shape::new(stringify!($ty), ShapeKind::Scalar);

                #[inline]
                fn variant_index(&self) -> Option<usize> {
                    None
                }

                #[inline]
                fn from_variant_index(_index: usize) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

impl_scalar_described!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
);
