//! MessagePack object headers.
//!
//! A [`Tag`] carries the value of a scalar object, or the type and declared
//! size of a compound one. Compound bodies never live in a tag.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::Type;

/// One MessagePack object header.
///
/// Tags order and compare with a fixed but unversioned ordering:
///
/// - kinds compare in [`Type`] declaration order, except that a
///   non-negative `Int` is treated as the `Uint` of the same value;
/// - floats and doubles compare by raw bit pattern, so identical NaNs are
///   equal and `0.0 != -0.0`;
/// - the declared length or count of a compound tag is ignored, while an
///   extension's type byte is part of the key.
///
/// Do not persist anything that depends on this ordering.
#[derive(Debug, Clone, Copy, Default)]
pub enum Tag {
    #[default]
    Nil,
    Bool(bool),
    Float(f32),
    Double(f64),
    Int(i64),
    Uint(u64),
    /// String with its byte length.
    Str(u32),
    /// Binary blob with its byte length.
    Bin(u32),
    /// Extension object with its type byte and body length.
    Ext { exttype: i8, length: u32 },
    /// Array with its element count.
    Array(u32),
    /// Map with its key/value pair count.
    Map(u32),
}

impl Tag {
    pub fn nil() -> Self {
        Tag::Nil
    }

    pub fn bool(value: bool) -> Self {
        Tag::Bool(value)
    }

    pub fn true_() -> Self {
        Tag::Bool(true)
    }

    pub fn false_() -> Self {
        Tag::Bool(false)
    }

    pub fn int(value: i64) -> Self {
        Tag::Int(value)
    }

    pub fn uint(value: u64) -> Self {
        Tag::Uint(value)
    }

    pub fn float(value: f32) -> Self {
        Tag::Float(value)
    }

    pub fn double(value: f64) -> Self {
        Tag::Double(value)
    }

    pub fn array(count: u32) -> Self {
        Tag::Array(count)
    }

    pub fn map(count: u32) -> Self {
        Tag::Map(count)
    }

    pub fn str(length: u32) -> Self {
        Tag::Str(length)
    }

    pub fn bin(length: u32) -> Self {
        Tag::Bin(length)
    }

    pub fn ext(exttype: i8, length: u32) -> Self {
        Tag::Ext { exttype, length }
    }

    pub fn tag_type(&self) -> Type {
        match self {
            Tag::Nil => Type::Nil,
            Tag::Bool(_) => Type::Bool,
            Tag::Float(_) => Type::Float,
            Tag::Double(_) => Type::Double,
            Tag::Int(_) => Type::Int,
            Tag::Uint(_) => Type::Uint,
            Tag::Str(_) => Type::Str,
            Tag::Bin(_) => Type::Bin,
            Tag::Ext { .. } => Type::Ext,
            Tag::Array(_) => Type::Array,
            Tag::Map(_) => Type::Map,
        }
    }

    /// Extension type byte; zero for every other kind.
    pub fn ext_type(&self) -> i8 {
        match self {
            Tag::Ext { exttype, .. } => *exttype,
            _ => 0,
        }
    }

    pub fn is_compound(&self) -> bool {
        self.tag_type().is_compound()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Tag::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Tag::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Tag::Uint(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Tag::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Tag::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Byte length of a str, bin or ext tag.
    pub fn length(&self) -> Option<u32> {
        match self {
            Tag::Str(l) | Tag::Bin(l) | Tag::Ext { length: l, .. } => Some(*l),
            _ => None,
        }
    }

    /// Element count of an array tag, or pair count of a map tag.
    pub fn count(&self) -> Option<u32> {
        match self {
            Tag::Array(n) | Tag::Map(n) => Some(*n),
            _ => None,
        }
    }

    /// Comparison key: family, then the value bits within it.
    ///
    /// Non-negative ints fold into the uint family, so the key of `Int(5)`
    /// equals the key of `Uint(5)`. Int keys are biased so that their
    /// unsigned order matches signed order.
    fn key(&self) -> (Type, u64) {
        match *self {
            Tag::Nil => (Type::Nil, 0),
            Tag::Bool(b) => (Type::Bool, b as u64),
            Tag::Float(f) => (Type::Float, f.to_bits() as u64),
            Tag::Double(d) => (Type::Double, d.to_bits()),
            Tag::Int(i) if i >= 0 => (Type::Uint, i as u64),
            Tag::Int(i) => (Type::Int, (i as u64) ^ (1 << 63)),
            Tag::Uint(u) => (Type::Uint, u),
            Tag::Str(_) => (Type::Str, 0),
            Tag::Bin(_) => (Type::Bin, 0),
            Tag::Ext { exttype, .. } => (Type::Ext, (exttype as u8 ^ 0x80) as u64),
            Tag::Array(_) => (Type::Array, 0),
            Tag::Map(_) => (Type::Map, 0),
        }
    }
}

/// Total ordering of two tags; see [`Tag`] for the rules.
pub fn tag_cmp(left: &Tag, right: &Tag) -> Ordering {
    left.key().cmp(&right.key())
}

/// Whether two tags compare equal under [`tag_cmp`].
pub fn tag_equal(left: &Tag, right: &Tag) -> bool {
    tag_cmp(left, right) == Ordering::Equal
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        tag_equal(self, other)
    }
}

impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        tag_cmp(self, other)
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
