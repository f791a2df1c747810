//! Generate JSON-Schema-like documents from Rust type declarations.
//!
//! ```ignore
//! use struct_schema::{schema_for, Describe};
//!
//! #[derive(Describe)]
//! struct Person {
//!     #[schema(description = "Full name", example = "Ada")]
//!     name: String,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     #[schema(minimum = 0, maximum = 150)]
//!     age: Option<u8>,
//! }
//!
//! let schema = schema_for::<Person>()?;
//! ```
//!
//! The pipeline is `TypeDesc` (desc) → `build` (builder) → `SchemaNode` (ir).
pub mod builder;
pub mod cli;
pub mod desc;
pub mod document;
pub mod error;
pub mod ir;

// generated code names `::struct_schema::...`, also from inside this crate
extern crate self as struct_schema;

pub use builder::{build, schema_for};
pub use desc::{Describe, FieldDesc, FieldMeta, Primitive, RecordDesc, TypeDesc};
pub use error::{Bound, DocumentError, SchemaError};
pub use ir::{SchemaKind, SchemaNode};
pub use struct_schema_derive::Describe;
