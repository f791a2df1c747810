//! `#[derive(Describe)]` for struct-schema.
//!
//! Field metadata comes from two attributes:
//!
//! - `#[serde(rename = "...")]` and `#[serde(skip_serializing_if = "...")]`:
//!   the external name and the "may be omitted" marker, read from the same
//!   annotation that drives serialization. `#[serde(skip)]` and
//!   `#[serde(skip_serializing)]` fields are left out of the record, and a
//!   container `#[serde(rename_all = "...")]` names the remaining fields
//!   that carry no rename of their own.
//! - `#[schema(...)]`: `rename`, `optional`, `description`, `enumeration`
//!   (comma-delimited), `minimum`, `maximum`, `example`.
//!
//! Any other key is ignored.
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod case;
mod describe;

#[proc_macro_derive(Describe, attributes(schema, serde))]
pub fn describe_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    describe::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
