//! Model mapper: the entry point from model descriptions to schema trees.

use std::collections::HashMap;
use std::fmt;

use keel_core::{Model, ModelType};
use keel_tags::FlagKind;

use crate::attribute::{AttributeMap, Schema};
use crate::error::SchemaError;
use crate::registry::TypeRegistry;
use crate::synth::{self, FieldContext};

// ---------------------------------------------------------------------------
// ModelCategory
// ---------------------------------------------------------------------------

/// Where a model sits in the tree. Decides which flags its fields may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelCategory {
    /// The top-level model handed to [`map_model`].
    Resource,
    /// Any model reached through a nested field, inline or by name.
    Nested,
}

impl ModelCategory {
    /// Flags recognised on fields of models in this category.
    ///
    /// Every recognised flag, `state` included, at any depth.
    #[must_use]
    pub const fn allowed_flags(self) -> &'static [FlagKind] {
        match self {
            Self::Resource | Self::Nested => &FlagKind::ALL,
        }
    }

    #[must_use]
    pub fn allows(self, flag: FlagKind) -> bool {
        self.allowed_flags().contains(&flag)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Map a model's fields to schema attributes keyed by canonical name.
///
/// Depth-first and not memoised. Mapping the same model twice yields equal
/// trees. On error nothing is returned.
///
/// # Errors
///
/// Returns `RegistryError::NotSealed` (wrapped) if the registry is still open,
/// otherwise the first [`SchemaError`] found in declaration order.
pub fn map_model(model: &ModelType, registry: &TypeRegistry) -> Result<AttributeMap, SchemaError> {
    registry.ensure_sealed()?;
    Mapper { registry }.map(model.name(), model, ModelCategory::Resource)
}

/// Map a model and wrap the result with its name.
///
/// # Errors
///
/// Same as [`map_model`].
pub fn schema_for(model: &ModelType, registry: &TypeRegistry) -> Result<Schema, SchemaError> {
    Ok(Schema {
        model: model.name().to_string(),
        attributes: map_model(model, registry)?,
    })
}

/// Map the model described by `M`.
///
/// # Errors
///
/// Same as [`map_model`].
pub fn model_to_schema<M: Model>(registry: &TypeRegistry) -> Result<Schema, SchemaError> {
    schema_for(&M::model_type(), registry)
}

// ---------------------------------------------------------------------------
// Mapper
// ---------------------------------------------------------------------------

pub(crate) struct Mapper<'r> {
    pub(crate) registry: &'r TypeRegistry,
}

impl Mapper<'_> {
    /// `path` is the dotted model path used in diagnostics.
    pub(crate) fn map(
        &self,
        path: &str,
        model: &ModelType,
        category: ModelCategory,
    ) -> Result<AttributeMap, SchemaError> {
        let mut attributes = AttributeMap::new();
        let mut owners: HashMap<String, &str> = HashMap::new();

        for field in model.fields() {
            let flags = keel_tags::parse(field.tag()).map_err(|source| SchemaError::Grammar {
                model: path.to_string(),
                field: field.name().to_string(),
                source,
            })?;

            if let Some(flag) = flags.kinds().find(|kind| !category.allows(*kind)) {
                return Err(SchemaError::DisallowedFlag {
                    model: path.to_string(),
                    field: field.name().to_string(),
                    flag,
                    category,
                });
            }

            let name = flags.canonical_name(field.name()).to_string();
            if let Some(first) = owners.get(&name) {
                return Err(SchemaError::DuplicateName {
                    model: path.to_string(),
                    name,
                    first: (*first).to_string(),
                    second: field.name().to_string(),
                });
            }

            tracing::trace!(
                model = path,
                field = field.name(),
                kind = %field.kind(),
                "mapping field"
            );
            let ctx = FieldContext {
                path,
                field,
                flags: &flags,
            };
            let attribute = synth::synthesize(self, &ctx)?;

            owners.insert(name.clone(), field.name());
            attributes.insert(name, attribute);
        }

        tracing::debug!(model = path, %category, attributes = attributes.len(), "mapped model");
        Ok(attributes)
    }
}
