//! The eleven MessagePack value kinds.

use std::fmt;

/// Kind of a MessagePack object.
///
/// Declaration order is the family order used when comparing tags of
/// different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Type {
    Nil = 1,
    Bool,
    /// 32-bit IEEE 754 float.
    Float,
    /// 64-bit IEEE 754 float.
    Double,
    /// 64-bit signed integer.
    Int,
    /// 64-bit unsigned integer.
    Uint,
    Str,
    Bin,
    /// Typed extension object.
    Ext,
    Array,
    /// Ordered key/value pairs.
    Map,
}

impl Type {
    /// Short debug name of the type.
    pub fn name(self) -> &'static str {
        match self {
            Type::Nil => "nil",
            Type::Bool => "bool",
            Type::Float => "float",
            Type::Double => "double",
            Type::Int => "int",
            Type::Uint => "uint",
            Type::Str => "str",
            Type::Bin => "bin",
            Type::Ext => "ext",
            Type::Array => "array",
            Type::Map => "map",
        }
    }

    /// Whether a value of this type has a body after its header.
    #[inline]
    pub fn is_compound(self) -> bool {
        matches!(
            self,
            Type::Str | Type::Bin | Type::Ext | Type::Array | Type::Map
        )
    }

    /// Whether the body of this type is counted in bytes rather than elements.
    #[inline]
    pub fn is_byte_oriented(self) -> bool {
        matches!(self, Type::Str | Type::Bin | Type::Ext)
    }
}

/// Debug name of a type.
pub fn type_to_string(ty: Type) -> &'static str {
    ty.name()
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
