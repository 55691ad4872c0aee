//! # keel-core
//!
//! Shape description for declaratively annotated data models.
//!
//! This crate provides the types every other keel crate speaks:
//! - `FieldKind` and `Primitive`: the closed set of field shapes a model may declare
//! - `FieldDescriptor` and `ModelType`: a model's ordered fields and their raw tag annotations
//! - `Model` and `Shape`: static introspection from Rust types to model descriptions
//! - `model!`: declares a struct and derives its `Model` description in one place
//! - Untyped container markers (`MapValue`, `ListValue`, `ObjectValue`, `SetValue`)
//!   whose element shape is chosen by the `elementtype` tag flag
//!
//! The mapper never instantiates models. It reasons about the description only.

pub mod model;
pub mod shape;
pub mod value;

pub use model::{FieldDescriptor, Model, ModelType};
pub use shape::{FieldKind, Primitive, Shape};
pub use value::{ListValue, MapValue, ObjectValue, SetValue};
