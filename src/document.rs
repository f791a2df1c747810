//! Descriptor documents: `TypeDesc` trees written as JSON.
//!
//! Lets tooling outside Rust (or a type registry dumped to disk) hand
//! descriptors to the builder. Shape errors carry the JSON path of the
//! offending node.
use serde_json::Value;

use crate::desc::TypeDesc;
use crate::error::DocumentError;

/// Parse a descriptor document, optionally selecting a sub-node first with a
/// JSON Pointer (e.g. `/definitions/User`).
pub fn descriptor_from_str(src: &str, pointer: Option<&str>) -> Result<TypeDesc, DocumentError> {
    let doc: Value = serde_json::from_str(src)?;
    descriptor_from_value(doc, pointer)
}

pub fn descriptor_from_value(mut doc: Value, pointer: Option<&str>) -> Result<TypeDesc, DocumentError> {
    if let Some(pointer) = pointer {
        doc = doc
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| DocumentError::PointerNotFound { pointer: pointer.to_owned() })?;
    }
    serde_path_to_error::deserialize::<_, TypeDesc>(doc).map_err(|err| {
        let path = err.path().to_string();
        DocumentError::Shape { path, source: err.into_inner() }
    })
}
