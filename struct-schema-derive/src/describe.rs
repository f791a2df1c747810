use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_quote};

use crate::attrs::{ContainerAttrs, FieldAttrs};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Describe can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(struct_name, "Describe can only be derived for structs"));
        }
    };

    let container = ContainerAttrs::from_attrs(&input.attrs)?;

    let mut field_descs = Vec::new();
    for field in fields {
        let mut attrs = FieldAttrs::from_attrs(&field.attrs)?;
        // never serialized, so not part of the record at all
        if attrs.skip {
            continue;
        }
        // Named fields always carry an ident.
        let ident = field.ident.as_ref().map(unraw).unwrap_or_default();
        if attrs.rename.is_none() {
            attrs.rename = container.rename_all.map(|rule| rule.apply_to_field(&ident));
        }
        let ty = &field.ty;
        let meta = field_meta(&attrs);
        field_descs.push(quote! {
            ::struct_schema::FieldDesc {
                ident: ::std::string::String::from(#ident),
                ty: <#ty as ::struct_schema::Describe>::describe(),
                meta: #meta,
            }
        });
    }

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::struct_schema::Describe));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let name = unraw(struct_name);

    Ok(quote! {
        impl #impl_generics ::struct_schema::Describe for #struct_name #ty_generics #where_clause {
            fn describe() -> ::struct_schema::TypeDesc {
                ::struct_schema::TypeDesc::Record(::struct_schema::RecordDesc {
                    name: ::std::string::String::from(#name),
                    fields: ::std::vec![#(#field_descs),*],
                })
            }
        }
    })
}

fn field_meta(attrs: &FieldAttrs) -> TokenStream {
    let rename = opt_string(attrs.rename.as_deref());
    let omittable = attrs.omittable;
    let description = opt_string(attrs.description.as_deref());
    let minimum = opt_string(attrs.minimum.as_deref());
    let maximum = opt_string(attrs.maximum.as_deref());
    let example = opt_string(attrs.example.as_deref());
    let enumeration = match &attrs.enumeration {
        Some(tokens) => quote! {
            ::std::option::Option::Some(::std::vec![#(::std::string::String::from(#tokens)),*])
        },
        None => quote!(::std::option::Option::None),
    };

    quote! {
        ::struct_schema::FieldMeta {
            rename: #rename,
            omittable: #omittable,
            description: #description,
            enumeration: #enumeration,
            minimum: #minimum,
            maximum: #maximum,
            example: #example,
        }
    }
}

fn opt_string(value: Option<&str>) -> TokenStream {
    match value {
        Some(s) => quote!(::std::option::Option::Some(::std::string::String::from(#s))),
        None => quote!(::std::option::Option::None),
    }
}

// `r#type` is declared as `type`
fn unraw(ident: &syn::Ident) -> String {
    let s = ident.to_string();
    s.strip_prefix("r#").map(str::to_owned).unwrap_or(s)
}
