use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Minimum,
    Maximum,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Bound::Minimum => "minimum",
            Bound::Maximum => "maximum",
        })
    }
}

/// Failure of a schema build. The first one hit aborts the whole walk.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unsupported type {kind} from {type_name}")]
    UnsupportedType { kind: String, type_name: String },

    #[error("field `{record}.{field}`: {bound} `{text}` is not an integer")]
    MalformedConstraint {
        record: String,
        field: String,
        bound: Bound,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("field `{record}.{field}`: example `{text}` is not a valid literal")]
    MalformedExample {
        record: String,
        field: String,
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// Declared identifier of the offending field, if the error came from one.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::UnsupportedType { .. } => None,
            SchemaError::MalformedConstraint { field, .. }
            | SchemaError::MalformedExample { field, .. } => Some(field.as_str()),
        }
    }
}

/// Failure to turn a descriptor document into a `TypeDesc`.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("JSON pointer `{pointer}` selects nothing")]
    PointerNotFound { pointer: String },

    #[error("at JSON path {path} → {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
