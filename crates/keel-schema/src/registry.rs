//! Type registry for named model references.
//!
//! Fields declared as untyped objects or lists name their element model with
//! `elementtype:<name>`. The `TypeRegistry` resolves those names. It has an
//! explicit two-phase lifecycle: models register while it is open, then it is
//! sealed and becomes read-only. The mapper refuses to run against an open
//! registry.

use std::collections::HashMap;

use keel_core::{Model, ModelType};

use crate::error::RegistryError;

/// Symbolic name to model type lookup table.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ModelType>,
    sealed: bool,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under a symbolic name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Sealed` once the registry is sealed, or
    /// `RegistryError::Duplicate` if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        model: ModelType,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.sealed {
            tracing::warn!(%name, "rejected registration on sealed type registry");
            return Err(RegistryError::Sealed(name));
        }
        if self.types.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        tracing::debug!(%name, model = model.name(), "registered model type");
        self.types.insert(name, model);
        Ok(())
    }

    /// Register `M` under a symbolic name.
    ///
    /// # Errors
    ///
    /// Same as [`TypeRegistry::register`].
    pub fn register_model<M: Model>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.register(name, M::model_type())
    }

    /// Close registration. Idempotent.
    pub fn seal(&mut self) {
        if !self.sealed {
            tracing::debug!(types = self.types.len(), "sealed type registry");
        }
        self.sealed = true;
    }

    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Get a model by symbolic name. Returns `None` if not registered.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&ModelType> {
        self.types.get(name)
    }

    /// List all registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub(crate) const fn ensure_sealed(&self) -> Result<(), RegistryError> {
        if self.sealed {
            Ok(())
        } else {
            Err(RegistryError::NotSealed)
        }
    }
}

/// Process-wide registry.
///
/// Hosts register every model during start-up, call [`seal`], and only then
/// map models through [`read`]. Registration and mapping must not interleave.
pub mod global {
    use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

    use keel_core::{Model, ModelType};

    use super::TypeRegistry;
    use crate::error::RegistryError;

    static REGISTRY: LazyLock<RwLock<TypeRegistry>> =
        LazyLock::new(|| RwLock::new(TypeRegistry::new()));

    fn write() -> Result<RwLockWriteGuard<'static, TypeRegistry>, RegistryError> {
        REGISTRY.write().map_err(|_| RegistryError::Poisoned)
    }

    /// Register a model in the global registry.
    ///
    /// # Errors
    ///
    /// Same as [`TypeRegistry::register`], plus `RegistryError::Poisoned`.
    pub fn register(name: impl Into<String>, model: ModelType) -> Result<(), RegistryError> {
        write()?.register(name, model)
    }

    /// Register `M` in the global registry.
    ///
    /// # Errors
    ///
    /// Same as [`register`].
    pub fn register_model<M: Model>(name: impl Into<String>) -> Result<(), RegistryError> {
        write()?.register_model::<M>(name)
    }

    /// Seal the global registry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Poisoned` if a writer panicked.
    pub fn seal() -> Result<(), RegistryError> {
        write()?.seal();
        Ok(())
    }

    /// Read access for mapping. Requires a sealed registry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotSealed` while registration is open.
    pub fn read() -> Result<RwLockReadGuard<'static, TypeRegistry>, RegistryError> {
        let guard = read_lock(&REGISTRY)?;
        guard.ensure_sealed()?;
        Ok(guard)
    }

    /// Whether [`seal`] has run.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Poisoned` if a writer panicked.
    pub fn is_sealed() -> Result<bool, RegistryError> {
        sealed_state(&REGISTRY)
    }

    fn read_lock(
        lock: &RwLock<TypeRegistry>,
    ) -> Result<RwLockReadGuard<'_, TypeRegistry>, RegistryError> {
        lock.read().map_err(|_| RegistryError::Poisoned)
    }

    fn sealed_state(lock: &RwLock<TypeRegistry>) -> Result<bool, RegistryError> {
        Ok(read_lock(lock)?.is_sealed())
    }

}
