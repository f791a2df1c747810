use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Lit, LitStr, Token, UnOp};

use crate::case::RenameRule;

/// Metadata collected from the struct's own attributes.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct ContainerAttrs {
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut rule: Option<LitStr> = None;
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            let mut staged = rule.clone();
            let parsed = attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident("rename_all") {
                    return skip_value(&meta);
                }
                if meta.input.peek(Token![=]) {
                    staged = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                // rename_all(serialize = "...", deserialize = "...")
                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("serialize") {
                        staged = Some(inner.value()?.parse()?);
                        Ok(())
                    } else {
                        skip_value(&inner)
                    }
                })
            });
            if parsed.is_ok() {
                rule = staged;
            }
        }

        let rename_all = match rule {
            Some(lit) => Some(
                RenameRule::from_name(&lit.value())
                    .ok_or_else(|| syn::Error::new_spanned(&lit, "unknown rename_all rule"))?,
            ),
            None => None,
        };
        Ok(ContainerAttrs { rename_all })
    }
}

/// Metadata collected from one field's attributes.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub omittable: bool,
    /// never serialized: `serde(skip)` or `serde(skip_serializing)`
    pub skip: bool,
    pub description: Option<String>,
    pub enumeration: Option<Vec<String>>,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub example: Option<String>,
}

impl FieldAttrs {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = FieldAttrs::default();
        let mut schema_rename = None;

        for attr in attrs {
            if attr.path().is_ident("serde") {
                // serde reports its own syntax errors; a list we cannot read
                // contributes nothing rather than its first few items
                let mut staged = out.clone();
                if attr.parse_nested_meta(|meta| staged.serde_item(meta)).is_ok() {
                    out = staged;
                }
            } else if attr.path().is_ident("schema") {
                attr.parse_nested_meta(|meta| out.schema_item(meta, &mut schema_rename))?;
            }
        }

        // the schema-specific name beats the serde one
        if schema_rename.is_some() {
            out.rename = schema_rename;
        }
        Ok(out)
    }

    fn serde_item(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if meta.input.peek(Token![=]) {
                self.rename = Some(meta.value()?.parse::<LitStr>()?.value());
            } else {
                // rename(serialize = "...", deserialize = "...")
                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("serialize") {
                        self.rename = Some(inner.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        skip_value(&inner)
                    }
                })?;
            }
            Ok(())
        } else if meta.path.is_ident("skip_serializing_if") {
            meta.value()?.parse::<LitStr>()?;
            self.omittable = true;
            Ok(())
        } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            self.skip = true;
            Ok(())
        } else {
            skip_value(&meta)
        }
    }

    fn schema_item(&mut self, meta: ParseNestedMeta, rename: &mut Option<String>) -> syn::Result<()> {
        let key = meta.path.get_ident().map(ToString::to_string).unwrap_or_default();
        match key.as_str() {
            "rename" => *rename = Some(meta.value()?.parse::<LitStr>()?.value()),
            "optional" => self.omittable = true,
            "description" => self.description = Some(meta.value()?.parse::<LitStr>()?.value()),
            "enumeration" => {
                let list = meta.value()?.parse::<LitStr>()?.value();
                self.enumeration = Some(list.split(',').map(str::to_owned).collect());
            }
            "minimum" => self.minimum = Some(literal_text(&meta.value()?.parse()?)?),
            "maximum" => self.maximum = Some(literal_text(&meta.value()?.parse()?)?),
            "example" => self.example = Some(literal_text(&meta.value()?.parse()?)?),
            _ => skip_value(&meta)?,
        }
        Ok(())
    }
}

fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Source text of a literal, as the builder will see it: strings verbatim,
/// numbers by their digits (suffix dropped), negatives with their sign.
fn literal_text(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(s) => Ok(s.value()),
            Lit::Int(i) => Ok(i.base10_digits().to_owned()),
            Lit::Float(f) => Ok(f.base10_digits().to_owned()),
            Lit::Bool(b) => Ok(b.value.to_string()),
            other => Err(syn::Error::new_spanned(other, "expected a string, number or bool literal")),
        },
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr, .. }) => {
            let inner = literal_text(expr)?;
            Ok(format!("-{inner}"))
        }
        other => Err(syn::Error::new_spanned(other, "expected a literal")),
    }
}
