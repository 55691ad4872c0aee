//! Grammar error types.

use thiserror::Error;

/// A malformed annotation. Raised by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    /// A token between two commas (or after a trailing comma) was blank.
    #[error("empty flag at position {position}")]
    EmptyToken { position: usize },

    #[error("flag '{flag}' requires a value ('{flag}:<value>')")]
    MissingValue { flag: &'static str },

    #[error("flag '{flag}' does not take a value (got '{value}')")]
    UnexpectedValue { flag: &'static str, value: String },

    #[error("malformed enum list '{raw}': {reason}")]
    MalformedEnum { raw: String, reason: &'static str },

    #[error("'{value}' is not a valid identifier for {role}")]
    InvalidIdentifier { role: &'static str, value: String },

    #[error("flag '{0}' appears more than once")]
    DuplicateFlag(&'static str),
}
