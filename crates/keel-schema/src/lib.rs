//! # keel-schema
//!
//! Maps keel model descriptions to schema attribute trees.
//!
//! This crate provides:
//! - [`map_model`] / [`model_to_schema`]: the model mapper entry points
//! - The attribute synthesizer, which turns one field shape plus its parsed tag
//!   flags into one [`Attribute`]
//! - [`TypeRegistry`]: named model lookup for `elementtype:` references, with a
//!   sealed, read-only phase (and a process-wide instance in [`registry::global`])
//! - The output tree ([`Schema`], [`Attribute`], [`AttributeKind`], [`DefaultValue`])
//!
//! Every failure is a [`SchemaError`] naming the model path and field. Errors
//! are declaration defects, meant to abort the host at start-up.
//!
//! ```
//! use keel_core::{MapValue, Model};
//! use keel_schema::{AttributeKind, TypeRegistry, model_to_schema};
//!
//! keel_core::model! {
//!     pub struct Application {
//!         pub id: String = ",computed,state",
//!         pub name: String = ",required",
//!         pub attributes: MapValue = "additionalAttributes,elementtype:string,optional",
//!     }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.seal();
//!
//! let schema = model_to_schema::<Application>(&registry).unwrap();
//! assert!(schema.get("name").unwrap().required);
//! assert!(matches!(schema.get("additionalAttributes").unwrap().kind, AttributeKind::Map { .. }));
//! ```

pub mod attribute;
pub mod error;
pub mod mapper;
pub mod registry;
mod synth;

pub use attribute::{Attribute, AttributeKind, AttributeMap, DefaultValue, ListElement, Schema};
pub use error::{ErrorKind, RegistryError, SchemaError};
pub use mapper::{ModelCategory, map_model, model_to_schema, schema_for};
pub use registry::TypeRegistry;
