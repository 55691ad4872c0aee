//! Flag vocabulary.

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// FlagKind
// ---------------------------------------------------------------------------

/// Every flag name the grammar recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagKind {
    Required,
    Computed,
    Sensitive,
    Optional,
    State,
    NoRead,
    NoWrite,
    EmptyIsNull,
    Default,
    ElementType,
    Enum,
    Fold,
}

impl FlagKind {
    pub const ALL: [Self; 12] = [
        Self::Required,
        Self::Computed,
        Self::Sensitive,
        Self::Optional,
        Self::State,
        Self::NoRead,
        Self::NoWrite,
        Self::EmptyIsNull,
        Self::Default,
        Self::ElementType,
        Self::Enum,
        Self::Fold,
    ];

    /// Spelling used in annotations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Computed => "computed",
            Self::Sensitive => "sensitive",
            Self::Optional => "optional",
            Self::State => "state",
            Self::NoRead => "noread",
            Self::NoWrite => "nowrite",
            Self::EmptyIsNull => "emptyIsNull",
            Self::Default => "default",
            Self::ElementType => "elementtype",
            Self::Enum => "enum",
            Self::Fold => "fold",
        }
    }

    /// Whether the flag is written `key:value`.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(
            self,
            Self::Default | Self::ElementType | Self::Enum | Self::Fold
        )
    }

    /// Case-sensitive lookup by annotation spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Flag
// ---------------------------------------------------------------------------

/// One parsed flag token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "flag", content = "value")]
pub enum Flag {
    Required,
    Computed,
    Sensitive,
    Optional,
    State,
    NoRead,
    NoWrite,
    EmptyIsNull,
    /// Default literal. May be empty, which is not the same as absent.
    Default(String),
    ElementType(String),
    /// Allowed values in declaration order.
    Enum(Vec<String>),
    /// Discriminator field used to fold polymorphic list elements.
    Fold(String),
}

impl Flag {
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Required => FlagKind::Required,
            Self::Computed => FlagKind::Computed,
            Self::Sensitive => FlagKind::Sensitive,
            Self::Optional => FlagKind::Optional,
            Self::State => FlagKind::State,
            Self::NoRead => FlagKind::NoRead,
            Self::NoWrite => FlagKind::NoWrite,
            Self::EmptyIsNull => FlagKind::EmptyIsNull,
            Self::Default(_) => FlagKind::Default,
            Self::ElementType(_) => FlagKind::ElementType,
            Self::Enum(_) => FlagKind::Enum,
            Self::Fold(_) => FlagKind::Fold,
        }
    }

    /// Build the flag for a bare token. `None` for value-carrying kinds.
    pub(crate) const fn bare(kind: FlagKind) -> Option<Self> {
        match kind {
            FlagKind::Required => Some(Self::Required),
            FlagKind::Computed => Some(Self::Computed),
            FlagKind::Sensitive => Some(Self::Sensitive),
            FlagKind::Optional => Some(Self::Optional),
            FlagKind::State => Some(Self::State),
            FlagKind::NoRead => Some(Self::NoRead),
            FlagKind::NoWrite => Some(Self::NoWrite),
            FlagKind::EmptyIsNull => Some(Self::EmptyIsNull),
            FlagKind::Default | FlagKind::ElementType | FlagKind::Enum | FlagKind::Fold => None,
        }
    }
}
