//! Field shapes and the static `Shape` introspection trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ModelType;
use crate::value::{ListValue, MapValue, ObjectValue, SetValue};

// ---------------------------------------------------------------------------
// Primitive
// ---------------------------------------------------------------------------

/// Scalar kinds a field may declare.
///
/// Only `String`, `Bool` and `Int64` have a schema counterpart. The others are
/// describable so that the mapper can reject them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    String,
    Bool,
    Int64,
    Int32,
    Float64,
}

impl Primitive {
    /// Lowercase name, matching the `elementtype:` spelling for strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int64 => "int64",
            Self::Int32 => "int32",
            Self::Float64 => "float64",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// Declared shape of one model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(Primitive),
    /// A `Vec<T>` field.
    Sequence(Box<FieldKind>),
    /// Untyped map; element type comes from the `elementtype` flag.
    Map,
    /// Untyped list; element type comes from the `elementtype` flag.
    List,
    /// Untyped object; resolved by name through the type registry.
    Object,
    /// Untyped set. Never supported, kept so it can be rejected legibly.
    Set,
    /// An inline model.
    Nested(ModelType),
    /// An `Option<T>` indirection around another shape.
    Optional(Box<FieldKind>),
}

impl FieldKind {
    pub const STRING: Self = Self::Primitive(Primitive::String);
    pub const BOOL: Self = Self::Primitive(Primitive::Bool);
    pub const INT64: Self = Self::Primitive(Primitive::Int64);

    #[must_use]
    pub fn sequence(element: Self) -> Self {
        Self::Sequence(Box::new(element))
    }

    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// The inline model behind this shape, looking through one `Optional`.
    #[must_use]
    pub fn as_nested(&self) -> Option<&ModelType> {
        match self {
            Self::Nested(model) => Some(model),
            Self::Optional(inner) => match inner.as_ref() {
                Self::Nested(model) => Some(model),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Sequence(element) => write!(f, "sequence<{element}>"),
            Self::Map => f.write_str("map"),
            Self::List => f.write_str("list"),
            Self::Object => f.write_str("object"),
            Self::Set => f.write_str("set"),
            Self::Nested(model) => write!(f, "model {}", model.name()),
            Self::Optional(inner) => write!(f, "optional<{inner}>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Maps a Rust field type to the `FieldKind` it declares.
///
/// Implemented here for the supported scalars, `Vec`, `Option` and the
/// untyped container markers. `model!` implements it for every declared model.
pub trait Shape {
    fn shape() -> FieldKind;
}

macro_rules! primitive_shape {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl Shape for $ty {
                fn shape() -> FieldKind {
                    FieldKind::Primitive(Primitive::$primitive)
                }
            }
        )*
    };
}

primitive_shape! {
    String => String,
    bool => Bool,
    i64 => Int64,
    i32 => Int32,
    f64 => Float64,
}

impl<T: Shape> Shape for Vec<T> {
    fn shape() -> FieldKind {
        FieldKind::sequence(T::shape())
    }
}

impl<T: Shape> Shape for Option<T> {
    fn shape() -> FieldKind {
        FieldKind::optional(T::shape())
    }
}

impl Shape for MapValue {
    fn shape() -> FieldKind {
        FieldKind::Map
    }
}

impl Shape for ListValue {
    fn shape() -> FieldKind {
        FieldKind::List
    }
}

impl Shape for ObjectValue {
    fn shape() -> FieldKind {
        FieldKind::Object
    }
}

impl Shape for SetValue {
    fn shape() -> FieldKind {
        FieldKind::Set
    }
}
