//! Parsed annotation with derived field semantics.

use serde::Serialize;

use crate::flag::{Flag, FlagKind};

/// Result of parsing one annotation.
///
/// `optional` and `computed` are derived, not copied from the tokens:
///
/// - `optional = (!required && !computed) || optional flag || default present`
/// - `computed = computed flag || default present`
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedFlags {
    pub override_name: Option<String>,
    pub required: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub optional: bool,
    /// Plan-stability hint: keep the prior committed value when unknown.
    pub state: bool,
    pub no_read: bool,
    pub no_write: bool,
    pub empty_is_null: bool,
    pub element_type: Option<String>,
    pub default: Option<String>,
    pub enum_values: Option<Vec<String>>,
    pub fold: Option<String>,
    /// Flags in annotation order.
    pub flags: Vec<Flag>,
}

impl ParsedFlags {
    pub(crate) fn from_parts(override_name: Option<String>, flags: Vec<Flag>) -> Self {
        let mut parsed = Self {
            override_name,
            ..Self::default()
        };

        let mut explicit_optional = false;
        for flag in &flags {
            match flag {
                Flag::Required => parsed.required = true,
                Flag::Computed => parsed.computed = true,
                Flag::Sensitive => parsed.sensitive = true,
                Flag::Optional => explicit_optional = true,
                Flag::State => parsed.state = true,
                Flag::NoRead => parsed.no_read = true,
                Flag::NoWrite => parsed.no_write = true,
                Flag::EmptyIsNull => parsed.empty_is_null = true,
                Flag::Default(value) => parsed.default = Some(value.clone()),
                Flag::ElementType(name) => parsed.element_type = Some(name.clone()),
                Flag::Enum(values) => parsed.enum_values = Some(values.clone()),
                Flag::Fold(field) => parsed.fold = Some(field.clone()),
            }
        }

        let has_default = parsed.default.is_some();
        parsed.optional =
            (!parsed.required && !parsed.computed) || explicit_optional || has_default;
        parsed.computed = parsed.computed || has_default;
        parsed.flags = flags;
        parsed
    }

    /// Wire name of the field: the override when present, else `declared`.
    #[must_use]
    pub fn canonical_name<'a>(&'a self, declared: &'a str) -> &'a str {
        self.override_name.as_deref().unwrap_or(declared)
    }

    #[must_use]
    pub fn has(&self, kind: FlagKind) -> bool {
        self.flags.iter().any(|flag| flag.kind() == kind)
    }

    /// Flag kinds in annotation order.
    pub fn kinds(&self) -> impl Iterator<Item = FlagKind> + '_ {
        self.flags.iter().map(Flag::kind)
    }
}
