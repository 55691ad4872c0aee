//! Host-level error type. All crate errors converge here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeelError {
    #[error(transparent)]
    Config(#[from] keel_config::ConfigError),

    #[error(transparent)]
    Schema(#[from] keel_schema::SchemaError),

    #[error(transparent)]
    Registry(#[from] keel_schema::RegistryError),

    #[error("resource type '{0}' is already in the catalog")]
    DuplicateResource(String),

    #[error("failed to initialize tracing subscriber: {0}")]
    Tracing(String),
}
