//! Type descriptors: the builder's view of a Rust (or foreign) type.
//!
//! A descriptor exposes only what the schema walk needs: the kind, the
//! ordered field list of records (with per-field metadata), and the contained
//! type of sequences, maps and optional wrappers. Descriptors come from
//! [`Describe`] impls, `#[derive(Describe)]`, hand construction, or a JSON
//! descriptor document (see [`crate::document`]).
pub mod describe;

use serde::{Deserialize, Serialize};

pub use describe::Describe;

// ------------------------------- Types ----------------------------------- //

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeDesc {
    Record(RecordDesc),
    Sequence { element: Box<TypeDesc> },
    Mapping { key: Box<TypeDesc>, value: Box<TypeDesc> },
    Optional { inner: Box<TypeDesc> },
    Primitive { name: Primitive },
    /// Anything without a mapping rule (functions, channels, `any`, unit...).
    Opaque { kind: String, name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    I8, I16, I32, I64, I128, Isize,
    U8, U16, U32, U64, U128, Usize,
    F32, F64,
    Bool,
    Char,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDesc {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDesc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDesc {
    /// declared identifier
    pub ident: String,
    pub ty: TypeDesc,
    #[serde(default)]
    pub meta: FieldMeta,
}

/// Structured per-field annotations.
///
/// Bounds and example stay textual: they are validated when the schema is
/// built, so a bad value fails the build rather than the declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// external (serialized) name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,
    /// may be left out when serialized → not required
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub omittable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

// ---------------------------- Constructors -------------------------------- //

impl TypeDesc {
    pub fn primitive(name: Primitive) -> Self {
        TypeDesc::Primitive { name }
    }

    pub fn sequence(element: TypeDesc) -> Self {
        TypeDesc::Sequence { element: Box::new(element) }
    }

    pub fn mapping(key: TypeDesc, value: TypeDesc) -> Self {
        TypeDesc::Mapping { key: Box::new(key), value: Box::new(value) }
    }

    pub fn optional(inner: TypeDesc) -> Self {
        TypeDesc::Optional { inner: Box::new(inner) }
    }

    pub fn opaque(kind: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDesc::Opaque { kind: kind.into(), name: name.into() }
    }

    /// Short category label, used in traces and diagnostics.
    pub fn category(&self) -> &str {
        match self {
            TypeDesc::Record(_)          => "record",
            TypeDesc::Sequence { .. }    => "sequence",
            TypeDesc::Mapping { .. }     => "mapping",
            TypeDesc::Optional { .. }    => "optional",
            TypeDesc::Primitive { name } => name.as_str(),
            TypeDesc::Opaque { kind, .. } => kind.as_str(),
        }
    }
}

impl From<RecordDesc> for TypeDesc {
    fn from(record: RecordDesc) -> Self {
        TypeDesc::Record(record)
    }
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::I128 => "i128",
            Primitive::Isize => "isize",
            Primitive::U8 => "u8",
            Primitive::U16 => "u16",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::U128 => "u128",
            Primitive::Usize => "usize",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::String => "string",
        }
    }
}

impl RecordDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    pub fn field(mut self, ident: impl Into<String>, ty: TypeDesc, meta: FieldMeta) -> Self {
        self.fields.push(FieldDesc { ident: ident.into(), ty, meta });
        self
    }
}

impl FieldDesc {
    /// Key under which the field appears in `properties`.
    pub fn resolved_name(&self) -> &str {
        self.meta.rename.as_deref().unwrap_or(&self.ident)
    }
}

impl FieldMeta {
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    pub fn omittable(mut self) -> Self {
        self.omittable = true;
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn enumeration<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enumeration = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Comma-delimited form (`"red,green,blue"`). Tokens are not trimmed.
    pub fn enumeration_list(self, list: &str) -> Self {
        self.enumeration(split_enumeration(list))
    }

    pub fn minimum(mut self, text: impl Into<String>) -> Self {
        self.minimum = Some(text.into());
        self
    }

    pub fn maximum(mut self, text: impl Into<String>) -> Self {
        self.maximum = Some(text.into());
        self
    }

    pub fn example(mut self, text: impl Into<String>) -> Self {
        self.example = Some(text.into());
        self
    }
}

pub fn split_enumeration(list: &str) -> Vec<String> {
    list.split(',').map(str::to_owned).collect()
}
