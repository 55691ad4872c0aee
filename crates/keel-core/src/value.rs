//! Untyped container markers.
//!
//! These stand in for framework values whose element shape is not carried by
//! the Rust type. The `elementtype` tag flag decides what they contain.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Map of string keys to values of the tagged element type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapValue(pub BTreeMap<String, Value>);

/// List whose elements are strings or a registered model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListValue(pub Vec<Value>);

/// Object whose attributes come from a registered model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectValue(pub serde_json::Map<String, Value>);

/// Set of values. Declarable, but has no schema mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetValue(pub Vec<Value>);
