//! Mapping and registry error types.

use keel_tags::{FlagKind, TagError};
use std::num::ParseIntError;
use thiserror::Error;

use crate::mapper::ModelCategory;

/// Errors from the type registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Registration attempted after the registry was sealed.
    #[error("type registry is sealed; cannot register '{0}'")]
    Sealed(String),

    /// Mapping attempted while registration is still open.
    #[error("type registry is not sealed; seal it before mapping models")]
    NotSealed,

    #[error("type '{0}' is already registered")]
    Duplicate(String),

    #[error("global type registry lock is poisoned")]
    Poisoned,
}

/// Coarse classification of a [`SchemaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Grammar,
    Shape,
    NumericConversion,
    DuplicateName,
    Registry,
}

/// A defect in a model declaration, found while mapping it.
///
/// `model` is the dotted path of the model being mapped (`Parent.field` for
/// nested models), `field` the declared name of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{model}.{field}: invalid annotation: {source}")]
    Grammar {
        model: String,
        field: String,
        #[source]
        source: TagError,
    },

    #[error("{model}.{field}: flag '{flag}' is not allowed on {category} models")]
    DisallowedFlag {
        model: String,
        field: String,
        flag: FlagKind,
        category: ModelCategory,
    },

    #[error("{model}.{field}: unsupported field shape {shape}")]
    UnsupportedShape {
        model: String,
        field: String,
        shape: String,
    },

    #[error("{model}.{field}: unsupported element type '{element_type}' for {shape}")]
    UnsupportedElementType {
        model: String,
        field: String,
        shape: String,
        element_type: String,
    },

    #[error("{model}.{field}: {shape} requires an elementtype flag")]
    MissingElementType {
        model: String,
        field: String,
        shape: String,
    },

    /// Named reference not found in the registry.
    #[error("{model}.{field}: element type '{element_type}' is not registered")]
    UnknownElementType {
        model: String,
        field: String,
        element_type: String,
    },

    #[error("{model}.{field}: unsupported default value '{value}' for {shape}")]
    InvalidDefault {
        model: String,
        field: String,
        shape: String,
        value: String,
    },

    #[error("{model}.{field}: default value '{value}' is not an int64: {source}")]
    InvalidNumericDefault {
        model: String,
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{model}.{field}: default value '{value}' is not one of {allowed:?}")]
    DefaultNotInEnum {
        model: String,
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("{model}: fields '{first}' and '{second}' both map to '{name}'")]
    DuplicateName {
        model: String,
        name: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl SchemaError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Grammar { .. } | Self::DisallowedFlag { .. } => ErrorKind::Grammar,
            Self::UnsupportedShape { .. }
            | Self::UnsupportedElementType { .. }
            | Self::MissingElementType { .. }
            | Self::UnknownElementType { .. }
            | Self::InvalidDefault { .. }
            | Self::DefaultNotInEnum { .. } => ErrorKind::Shape,
            Self::InvalidNumericDefault { .. } => ErrorKind::NumericConversion,
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::Registry(_) => ErrorKind::Registry,
        }
    }
}
