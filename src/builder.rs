//! Schema builder: one recursive walk from a `TypeDesc` to a `SchemaNode`.
//!
//! - Pure: no shared state, no caching; concurrent calls need no coordination.
//! - Depth-first, declaration order; the first error aborts everything
//!   (no partial schema ever escapes).
//! - Optional wrappers are transparent. Whether a field is required comes
//!   from its metadata, never from its type.
//! - No cycle detection: a self-containing descriptor recurses without bound.
mod field;

use indexmap::IndexMap;

use crate::desc::{Describe, Primitive, RecordDesc, TypeDesc};
use crate::error::SchemaError;
use crate::ir::{SchemaKind, SchemaNode};

// ------------------------------- Front API -------------------------------- //

pub fn build(desc: &TypeDesc) -> Result<SchemaNode, SchemaError> {
    tracing::trace!(kind = desc.category(), "build");
    match desc {
        TypeDesc::Record(record) => build_record(record),
        TypeDesc::Sequence { element } => Ok(SchemaNode::array_of(build(element)?)),
        // key/value schemas are not modelled; callers get an untyped node
        TypeDesc::Mapping { .. } => Ok(SchemaNode::default()),
        TypeDesc::Optional { inner } => build(inner),
        TypeDesc::Primitive { name } => Ok(build_primitive(*name)),
        TypeDesc::Opaque { kind, name } => Err(SchemaError::UnsupportedType {
            kind: kind.clone(),
            type_name: name.clone(),
        }),
    }
}

/// `build(&T::describe())`.
pub fn schema_for<T: Describe + ?Sized>() -> Result<SchemaNode, SchemaError> {
    build(&T::describe())
}

// -------------------------------- Records --------------------------------- //

fn build_record(record: &RecordDesc) -> Result<SchemaNode, SchemaError> {
    let mut properties: IndexMap<String, SchemaNode> = IndexMap::new();
    let mut required: Vec<String> = Vec::new();

    for f in &record.fields {
        let name = f.resolved_name();

        let mut node = build(&f.ty)?;
        field::refine(&mut node, &record.name, f)?;

        // Two fields may resolve to one name: the later one wins, both for
        // the node (position kept) and for requiredness.
        if f.meta.omittable {
            required.retain(|r| r != name);
        } else if !required.iter().any(|r| r == name) {
            required.push(name.to_owned());
        }
        properties.insert(name.to_owned(), node);
    }

    Ok(SchemaNode {
        kind: Some(SchemaKind::Object),
        properties,
        required,
        ..SchemaNode::default()
    })
}

// ------------------------------- Primitives ------------------------------- //

fn build_primitive(p: Primitive) -> SchemaNode {
    use Primitive::*;
    match p {
        I8 | I16 | I32 | I64 | I128 | Isize => SchemaNode::of_kind(SchemaKind::Integer),
        // Unsigned values can't be negative.
        U8 | U16 | U32 | U64 | U128 | Usize => SchemaNode {
            minimum: Some(0),
            ..SchemaNode::of_kind(SchemaKind::Integer)
        },
        F32 | F64 => SchemaNode::of_kind(SchemaKind::Number),
        Bool => SchemaNode::of_kind(SchemaKind::Boolean),
        Char | String => SchemaNode::of_kind(SchemaKind::String),
    }
}

// ------------------------------- Tests ------------------------------------ //
