use serde_json::Value;

use crate::desc::FieldDesc;
use crate::error::{Bound, SchemaError};
use crate::ir::{SchemaKind, SchemaNode};

/// Apply a record field's metadata to the node freshly built for its type.
///
/// Runs after the kind defaults are in place, so explicit bounds replace the
/// implicit `minimum = 0` of unsigned integers.
pub(super) fn refine(node: &mut SchemaNode, record: &str, field: &FieldDesc) -> Result<(), SchemaError> {
    let meta = &field.meta;

    if let Some(text) = &meta.description {
        node.description = Some(text.clone());
    }

    if let Some(tokens) = &meta.enumeration {
        // kept as text whatever the field's own type is
        node.enum_values = Some(tokens.iter().cloned().map(Value::String).collect());
    }

    if let Some(text) = &meta.minimum {
        node.minimum = Some(parse_bound(record, field, Bound::Minimum, text)?);
    }
    if let Some(text) = &meta.maximum {
        node.maximum = Some(parse_bound(record, field, Bound::Maximum, text)?);
    }

    if let Some(text) = &meta.example {
        node.example = Some(parse_example(node.kind, record, field, text)?);
    }

    Ok(())
}

fn parse_bound(record: &str, field: &FieldDesc, bound: Bound, text: &str) -> Result<i64, SchemaError> {
    text.parse::<i64>().map_err(|source| SchemaError::MalformedConstraint {
        record: record.to_owned(),
        field: field.ident.clone(),
        bound,
        text: text.to_owned(),
        source,
    })
}

fn parse_example(kind: Option<SchemaKind>, record: &str, field: &FieldDesc, text: &str) -> Result<Value, SchemaError> {
    if kind == Some(SchemaKind::String) {
        return Ok(Value::String(text.to_owned()));
    }
    serde_json::from_str::<Value>(text).map_err(|source| SchemaError::MalformedExample {
        record: record.to_owned(),
        field: field.ident.clone(),
        text: text.to_owned(),
        source,
    })
}
