//! # keel
//!
//! Derives declarative-configuration schemas from annotated Rust models.
//!
//! Models are declared with [`model!`], each field carrying a compact tag
//! annotation (`",required"`, `"flowName,emptyIsNull,default:"`, ...). The
//! mapper turns a model into a [`Schema`] tree of typed attributes with
//! requiredness, defaults, sensitivity and nesting.
//!
//! Typical host start-up:
//!
//! 1. Register every model referenced by `elementtype:` in [`registry::global`]
//! 2. [`bootstrap`] with the loaded [`KeelConfig`] (installs tracing, seals the registry)
//! 3. Build a [`SchemaCatalog`] of every resource type
//!
//! Any error in these steps is a model declaration defect and should abort
//! the host.

pub mod catalog;
pub mod error;
pub mod telemetry;

pub use catalog::{CatalogBuilder, SchemaCatalog};
pub use error::KeelError;
pub use keel_config::KeelConfig;
pub use keel_core::{
    FieldDescriptor, FieldKind, ListValue, MapValue, Model, ModelType, ObjectValue, Primitive,
    SetValue, Shape, model,
};
pub use keel_schema::{
    Attribute, AttributeKind, AttributeMap, DefaultValue, ErrorKind, ListElement, ModelCategory,
    RegistryError, Schema, SchemaError, TypeRegistry, map_model, model_to_schema, registry,
    schema_for,
};
pub use keel_tags::{Flag, FlagKind, ParsedFlags, TagError, parse as parse_tag};

/// Install tracing and close the global registry as configured.
///
/// # Errors
///
/// Returns `KeelError::Tracing` if a subscriber cannot be installed, or a
/// registry error if the global registry lock is poisoned.
pub fn bootstrap(config: &KeelConfig) -> Result<(), KeelError> {
    telemetry::init_tracing(&config.logging)?;

    if config.registry.seal_on_bootstrap {
        registry::global::seal()?;
    }
    let sealed = registry::global::is_sealed()?;
    tracing::debug!(sealed, "keel bootstrap complete");
    Ok(())
}
