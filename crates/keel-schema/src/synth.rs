//! Attribute synthesizer: one field shape plus its flags to one schema node.

use std::fmt::Display;

use keel_core::{FieldDescriptor, FieldKind, ModelType, Primitive};
use keel_tags::ParsedFlags;

use crate::attribute::{Attribute, AttributeKind, AttributeMap, DefaultValue, ListElement};
use crate::error::SchemaError;
use crate::mapper::{Mapper, ModelCategory};

/// The field being synthesized and where it lives.
pub(crate) struct FieldContext<'a> {
    pub(crate) path: &'a str,
    pub(crate) field: &'a FieldDescriptor,
    pub(crate) flags: &'a ParsedFlags,
}

impl FieldContext<'_> {
    fn model(&self) -> String {
        self.path.to_string()
    }

    fn field_name(&self) -> String {
        self.field.name().to_string()
    }

    fn child_path(&self) -> String {
        format!("{}.{}", self.path, self.field.name())
    }

    fn unsupported_shape(&self) -> SchemaError {
        SchemaError::UnsupportedShape {
            model: self.model(),
            field: self.field_name(),
            shape: self.field.kind().to_string(),
        }
    }

    fn invalid_default(&self, shape: impl Display, value: &str) -> SchemaError {
        SchemaError::InvalidDefault {
            model: self.model(),
            field: self.field_name(),
            shape: shape.to_string(),
            value: value.to_string(),
        }
    }

    fn missing_element_type(&self) -> SchemaError {
        SchemaError::MissingElementType {
            model: self.model(),
            field: self.field_name(),
            shape: self.field.kind().to_string(),
        }
    }
}

/// Build the schema node for one field.
pub(crate) fn synthesize(
    mapper: &Mapper<'_>,
    ctx: &FieldContext<'_>,
) -> Result<Attribute, SchemaError> {
    let (kind, default) = shape_of(mapper, ctx)?;
    let flags = ctx.flags;
    let is_string = matches!(kind, AttributeKind::String);

    Ok(Attribute {
        kind,
        required: flags.required,
        optional: flags.optional,
        computed: flags.computed,
        sensitive: flags.sensitive,
        default,
        use_state_for_unknown: is_string && flags.state,
        allowed_values: if is_string {
            flags.enum_values.clone()
        } else {
            None
        },
    })
}

fn shape_of(
    mapper: &Mapper<'_>,
    ctx: &FieldContext<'_>,
) -> Result<(AttributeKind, Option<DefaultValue>), SchemaError> {
    match ctx.field.kind() {
        FieldKind::Primitive(Primitive::String) => {
            Ok((AttributeKind::String, string_default(ctx)?))
        }
        FieldKind::Primitive(Primitive::Bool) => Ok((AttributeKind::Bool, bool_default(ctx)?)),
        FieldKind::Primitive(Primitive::Int64) => Ok((AttributeKind::Int64, int64_default(ctx)?)),

        FieldKind::Sequence(element) => {
            let element = match element.as_ref() {
                FieldKind::Primitive(Primitive::String) => {
                    ListElement::Primitive(Primitive::String)
                }
                FieldKind::Nested(model) => ListElement::Object(nested(mapper, ctx, model)?),
                _ => return Err(ctx.unsupported_shape()),
            };
            Ok((AttributeKind::List { element }, null_default(ctx, "list")?))
        }

        FieldKind::Map => match ctx.flags.element_type.as_deref() {
            Some("string") => Ok((
                AttributeKind::Map {
                    element: Primitive::String,
                },
                null_default(ctx, "map")?,
            )),
            Some(other) => Err(SchemaError::UnsupportedElementType {
                model: ctx.model(),
                field: ctx.field_name(),
                shape: "map".to_string(),
                element_type: other.to_string(),
            }),
            None => Err(ctx.missing_element_type()),
        },

        FieldKind::List => {
            let element = match ctx.flags.element_type.as_deref() {
                Some("string") => ListElement::Primitive(Primitive::String),
                Some(name) => ListElement::Object(named(mapper, ctx, name)?),
                None => return Err(ctx.missing_element_type()),
            };
            Ok((AttributeKind::List { element }, null_default(ctx, "list")?))
        }

        FieldKind::Object => {
            let name = ctx
                .flags
                .element_type
                .as_deref()
                .ok_or_else(|| ctx.missing_element_type())?;
            let attributes = named(mapper, ctx, name)?;
            Ok((AttributeKind::Object { attributes }, null_default(ctx, "object")?))
        }

        kind @ (FieldKind::Nested(_) | FieldKind::Optional(_)) => {
            let model = kind.as_nested().ok_or_else(|| ctx.unsupported_shape())?;
            let attributes = nested(mapper, ctx, model)?;
            Ok((AttributeKind::Object { attributes }, null_default(ctx, "object")?))
        }

        FieldKind::Primitive(Primitive::Int32 | Primitive::Float64) | FieldKind::Set => {
            Err(ctx.unsupported_shape())
        }
    }
}

fn nested(
    mapper: &Mapper<'_>,
    ctx: &FieldContext<'_>,
    model: &ModelType,
) -> Result<AttributeMap, SchemaError> {
    mapper.map(&ctx.child_path(), model, ModelCategory::Nested)
}

/// Resolve a named reference through the registry and map it.
fn named(
    mapper: &Mapper<'_>,
    ctx: &FieldContext<'_>,
    name: &str,
) -> Result<AttributeMap, SchemaError> {
    let model = mapper
        .registry
        .lookup(name)
        .ok_or_else(|| SchemaError::UnknownElementType {
            model: ctx.model(),
            field: ctx.field_name(),
            element_type: name.to_string(),
        })?;
    nested(mapper, ctx, model)
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Empty default means null, not the zero-length string.
fn string_default(ctx: &FieldContext<'_>) -> Result<Option<DefaultValue>, SchemaError> {
    match ctx.flags.default.as_deref() {
        None => Ok(None),
        Some("") => Ok(Some(DefaultValue::Null)),
        Some(value) => {
            if let Some(allowed) = &ctx.flags.enum_values {
                if !allowed.iter().any(|v| v == value) {
                    return Err(SchemaError::DefaultNotInEnum {
                        model: ctx.model(),
                        field: ctx.field_name(),
                        value: value.to_string(),
                        allowed: allowed.clone(),
                    });
                }
            }
            Ok(Some(DefaultValue::String(value.to_string())))
        }
    }
}

fn bool_default(ctx: &FieldContext<'_>) -> Result<Option<DefaultValue>, SchemaError> {
    match ctx.flags.default.as_deref() {
        None => Ok(None),
        Some("" | "false") => Ok(Some(DefaultValue::Bool(false))),
        Some("true") => Ok(Some(DefaultValue::Bool(true))),
        Some(other) => Err(ctx.invalid_default(Primitive::Bool, other)),
    }
}

fn int64_default(ctx: &FieldContext<'_>) -> Result<Option<DefaultValue>, SchemaError> {
    match ctx.flags.default.as_deref() {
        None => Ok(None),
        Some("") => Ok(Some(DefaultValue::Int64(0))),
        Some(value) => value
            .parse::<i64>()
            .map(|parsed| Some(DefaultValue::Int64(parsed)))
            .map_err(|source| SchemaError::InvalidNumericDefault {
                model: ctx.model(),
                field: ctx.field_name(),
                value: value.to_string(),
                source,
            }),
    }
}

/// Collections and objects only accept an empty default, meaning null.
fn null_default(ctx: &FieldContext<'_>, shape: &str) -> Result<Option<DefaultValue>, SchemaError> {
    match ctx.flags.default.as_deref() {
        None => Ok(None),
        Some("") => Ok(Some(DefaultValue::Null)),
        Some(other) => Err(ctx.invalid_default(shape, other)),
    }
}
