//! Build-once cache of mapped resource schemas.

use std::collections::BTreeMap;

use keel_core::{Model, ModelType};
use keel_schema::registry::global;
use keel_schema::{Schema, TypeRegistry, schema_for};

use crate::error::KeelError;

/// Mapped schemas keyed by resource type name (e.g. `st_subscription_mbft`).
///
/// Built once at start-up. Any mapping failure aborts the whole build.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: BTreeMap<String, Schema>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    #[must_use]
    pub fn get(&self, resource: &str) -> Option<&Schema> {
        self.schemas.get(resource)
    }

    /// Resource type names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Collects resource models before mapping them against a registry.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    resources: Vec<(String, ModelType)>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn resource<M: Model>(self, name: impl Into<String>) -> Self {
        self.model(name, M::model_type())
    }

    #[must_use]
    pub fn model(mut self, name: impl Into<String>, model: ModelType) -> Self {
        self.resources.push((name.into(), model));
        self
    }

    /// Map every resource against `registry`.
    ///
    /// # Errors
    ///
    /// Returns the first mapping error, or `KeelError::DuplicateResource` when
    /// two resources share a type name.
    pub fn build(self, registry: &TypeRegistry) -> Result<SchemaCatalog, KeelError> {
        let mut schemas = BTreeMap::new();
        for (name, model) in self.resources {
            if schemas.contains_key(&name) {
                return Err(KeelError::DuplicateResource(name));
            }
            let schema = schema_for(&model, registry)?;
            tracing::debug!(
                resource = %name,
                model = model.name(),
                attributes = schema.attributes.len(),
                "cached resource schema"
            );
            schemas.insert(name, schema);
        }
        Ok(SchemaCatalog { schemas })
    }

    /// Map every resource against the sealed global registry.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogBuilder::build`], plus registry lifecycle errors.
    pub fn build_global(self) -> Result<SchemaCatalog, KeelError> {
        let registry = global::read()?;
        self.build(&registry)
    }
}
