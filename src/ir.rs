// Output IR: the schema tree handed back to callers. Serializes straight to
// the JSON-Schema-ish document, so no serde_json::Value juggling here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
}

impl SchemaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Object  => "object",
            SchemaKind::Array   => "array",
            SchemaKind::String  => "string",
            SchemaKind::Integer => "integer",
            SchemaKind::Number  => "number",
            SchemaKind::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a generated schema.
///
/// Every attribute is optional; `kind` decides which of the others carry
/// meaning. A node without `kind` is the untyped passthrough produced for maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// element schema, arrays only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    /// declaration order (stable output)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// reserved refinement hint; nothing fills it yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(rename = "default", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    // Always integral, even when the field itself is floating point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

impl SchemaNode {
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self { kind: Some(kind), ..Self::default() }
    }

    pub fn array_of(items: SchemaNode) -> Self {
        Self {
            kind: Some(SchemaKind::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Leaf = no `items` and no `properties`.
    pub fn is_leaf(&self) -> bool {
        self.items.is_none() && self.properties.is_empty()
    }

    pub fn to_value(&self) -> Value {
        // Plain data with string keys; serializing into a Value cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
