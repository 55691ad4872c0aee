//! Output schema tree.

use std::collections::BTreeMap;

use keel_core::Primitive;
use serde::Serialize;

/// Attributes of one model, keyed by canonical name.
pub type AttributeMap = BTreeMap<String, Attribute>;

/// Static default attached to an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DefaultValue {
    String(String),
    Bool(bool),
    Int64(i64),
    /// Default to null: an empty `default:` on strings, lists, maps and objects.
    Null,
}

/// Element of a list attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListElement {
    Primitive(Primitive),
    Object(AttributeMap),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AttributeKind {
    String,
    Bool,
    Int64,
    List { element: ListElement },
    Map { element: Primitive },
    Object { attributes: AttributeMap },
}

/// One schema node.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub kind: AttributeKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Keep the prior committed value when the planned one is unknown.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_state_for_unknown: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl Attribute {
    /// Child attributes of a nested object or a list of objects.
    #[must_use]
    pub const fn children(&self) -> Option<&AttributeMap> {
        match &self.kind {
            AttributeKind::Object { attributes }
            | AttributeKind::List {
                element: ListElement::Object(attributes),
            } => Some(attributes),
            _ => None,
        }
    }

    /// Element primitive of a primitive list or map.
    #[must_use]
    pub const fn element_primitive(&self) -> Option<Primitive> {
        match &self.kind {
            AttributeKind::List {
                element: ListElement::Primitive(primitive),
            }
            | AttributeKind::Map { element: primitive } => Some(*primitive),
            _ => None,
        }
    }
}

/// Mapped schema of one top-level model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub model: String,
    pub attributes: AttributeMap,
}

impl Schema {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Compact JSON form, stable across runs for snapshot diffing.
    ///
    /// # Errors
    ///
    /// Returns the serializer error. Not expected for schema trees.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Pretty JSON form.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::to_json`].
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn leaf(kind: AttributeKind) -> Attribute {
        Attribute {
            kind,
            required: false,
            optional: true,
            computed: true,
            sensitive: false,
            default: Some(DefaultValue::Int64(0)),
            use_state_for_unknown: false,
            allowed_values: None,
        }
    }

    #[test]
    fn serializes_flat_with_kind_tag() {
        let value = serde_json::to_value(leaf(AttributeKind::Int64)).expect("serializes");
        assert_eq!(
            value,
            json!({
                "kind": "int64",
                "required": false,
                "optional": true,
                "computed": true,
                "sensitive": false,
                "default": 0
            })
        );
    }

    #[test]
    fn null_default_serializes_as_null() {
        let mut attribute = leaf(AttributeKind::Map {
            element: Primitive::String,
        });
        attribute.default = Some(DefaultValue::Null);
        let value = serde_json::to_value(attribute).expect("serializes");
        assert_eq!(value["default"], serde_json::Value::Null);
        assert_eq!(value["element"], json!("string"));
    }

    #[test]
    fn children_and_element_accessors() {
        let mut attributes = AttributeMap::new();
        attributes.insert("count".into(), leaf(AttributeKind::Int64));
        let list = leaf(AttributeKind::List {
            element: ListElement::Object(attributes.clone()),
        });
        assert_eq!(list.children(), Some(&attributes));
        assert_eq!(list.element_primitive(), None);

        let map = leaf(AttributeKind::Map {
            element: Primitive::String,
        });
        assert_eq!(map.children(), None);
        assert_eq!(map.element_primitive(), Some(Primitive::String));
    }
}
