//! Model descriptions and the `model!` declaration macro.

use crate::shape::FieldKind;

/// One declared member of a model: its Rust name, shape and raw tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    tag: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            tag: tag.into(),
        }
    }

    /// Declared field name, used when the tag carries no override.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Raw metadata annotation, e.g. `"flowName,emptyIsNull,default:"`.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// A named, ordered sequence of field descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelType {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ModelType {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Append a field. Convenience for hand-built descriptions.
    #[must_use]
    pub fn with_field(mut self, name: &str, kind: FieldKind, tag: &str) -> Self {
        self.fields.push(FieldDescriptor::new(name, kind, tag));
        self
    }
}

/// A Rust type that describes itself as a model.
pub trait Model {
    /// Model name used in diagnostics.
    const NAME: &'static str;

    fn fields() -> Vec<FieldDescriptor>;

    #[must_use]
    fn model_type() -> ModelType {
        ModelType::new(Self::NAME, Self::fields())
    }
}

/// Declare a struct together with its `Model` and `Shape` implementations.
///
/// Each field may carry a tag annotation after `=`. Fields without one get an
/// empty annotation.
///
/// ```
/// use keel_core::{FieldKind, MapValue, Model};
///
/// keel_core::model! {
///     #[derive(Debug, Default)]
///     pub struct Application {
///         pub id: String = ",computed,state",
///         pub name: String = ",required",
///         pub notes: String,
///         pub business_units: Vec<String> = "businessUnits",
///         pub additional_attributes: MapValue =
///             "additionalAttributes,elementtype:string,optional",
///     }
/// }
///
/// let model = Application::model_type();
/// assert_eq!(model.name(), "Application");
/// assert_eq!(model.fields().len(), 5);
/// assert_eq!(model.field("notes").map(|f| f.tag()), Some(""));
/// assert_eq!(model.field("additional_attributes").map(|f| f.kind()), Some(&FieldKind::Map));
/// ```
#[macro_export]
macro_rules! model {
    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(= $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Model for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::FieldDescriptor::new(
                            stringify!($field),
                            <$ty as $crate::Shape>::shape(),
                            $crate::model!(@tag $($tag)?),
                        ),
                    )*
                ]
            }
        }

        impl $crate::Shape for $name {
            fn shape() -> $crate::FieldKind {
                $crate::FieldKind::Nested(<Self as $crate::Model>::model_type())
            }
        }
    };
}
