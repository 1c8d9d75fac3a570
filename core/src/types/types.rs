use core::fmt::Display;

/// The closed set of value types.
///
/// Types are plain tags: two types are equal iff they carry the same tag.
/// There is no registry to initialise; `Type::Bool` and `Type::Int` are the
/// canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Type {
    Bool = 0,
    Int = 1,
}

/// The canonical `Bool` type.
pub const fn bool_type() -> Type {
    Type::Bool
}

/// The canonical `Int` type.
pub const fn int_type() -> Type {
    Type::Int
}

/// Tag comparison.
pub const fn type_equals(a: Type, b: Type) -> bool {
    a as u8 == b as u8
}

impl Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Bool => write!(f, "Bool"),
            Type::Int => write!(f, "Int"),
        }
    }
}
