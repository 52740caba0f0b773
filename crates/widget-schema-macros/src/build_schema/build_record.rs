//! BuildSchema derive implementation for structs (records)

use darling::FromField;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt as _;
use syn::{DataStruct, Fields, Member};

use super::field_tags::{field_tags, is_untagged};
use crate::attrs::FieldAttrs;
use crate::context::MacroContext;
use crate::serde_attrs;

pub fn generate_record_schema(
    context: &MacroContext,
    input: &DataStruct,
) -> darling::Result<TokenStream> {
    match &input.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            generate_newtype_struct(context, &fields.unnamed[0])
        }
        Fields::Named(fields) => generate_fields(context, fields.named.iter()),
        Fields::Unnamed(fields) => generate_fields(context, fields.unnamed.iter()),
        Fields::Unit => generate_fields(context, std::iter::empty()),
    }
}

/// One described property of the record.
struct RecordField {
    name: String,
    member: Member,
    tags: TokenStream,
}

fn generate_fields<'a>(
    context: &MacroContext,
    fields: impl Iterator<Item = &'a syn::Field>,
) -> darling::Result<TokenStream> {
    let schema_crate = context.schema_crate();
    let mut errors = darling::Error::accumulator();
    let mut record_fields = Vec::new();

    for (idx, field) in fields.enumerate() {
        let Some(field) = errors.handle(record_field(context, idx, field)) else {
            continue;
        };
        record_fields.extend(field);
    }
    errors.finish()?;

    if record_fields.is_empty() {
        return Ok(context.impl_build_schema(quote! {
            #schema_crate::RecordBuilder::new(tags).finish()
        }));
    }

    let field_builds = record_fields.iter().map(
        |RecordField { name, member, tags }| {
            quote! {
                record.field(#name, &self.#member, &#tags);
            }
        },
    );

    Ok(context.impl_build_schema(quote! {
        let mut record = #schema_crate::RecordBuilder::new(tags);
        #(#field_builds)*
        record.finish()
    }))
}

/// `None` for skipped fields.
fn record_field(
    context: &MacroContext,
    idx: usize,
    field: &syn::Field,
) -> darling::Result<Option<RecordField>> {
    let attrs = FieldAttrs::from_field(field)?;
    if attrs.skip || serde_attrs::field_skipped(&field.attrs)? {
        return Ok(None);
    }

    let member = match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(idx.into()),
    };
    let name = match attrs.rename.clone() {
        Some(rename) => rename,
        None => match serde_attrs::field_rename(&field.attrs)? {
            Some(rename) => rename,
            None => match &field.ident {
                Some(ident) => context.apply_rename(&ident.unraw().to_string()),
                None => idx.to_string(),
            },
        },
    };
    let tags = field_tags(context.schema_crate(), &attrs);

    Ok(Some(RecordField { name, member, tags }))
}

fn generate_newtype_struct(
    context: &MacroContext,
    field: &syn::Field,
) -> darling::Result<TokenStream> {
    let schema_crate = context.schema_crate();
    let attrs = FieldAttrs::from_field(field)?;
    if attrs.skip || serde_attrs::field_skipped(&field.attrs)? {
        return Ok(context.impl_build_schema(quote! {
            #schema_crate::RecordBuilder::new(tags).finish()
        }));
    }
    if attrs.rename.is_some() {
        return Err(darling::Error::custom(
            "a newtype field has no name of its own; `rename` has no effect here",
        )
        .with_span(&field.ty));
    }

    // Newtype is transparent: it delegates to the inner value, the field's own
    // tags laid over the inherited ones
    if is_untagged(&attrs) {
        return Ok(context.impl_build_schema(quote! {
            #schema_crate::BuildSchema::build_schema(&self.0, tags)
        }));
    }
    let field_tags = field_tags(schema_crate, &attrs);
    Ok(context.impl_build_schema(quote! {
        #schema_crate::BuildSchema::build_schema(&self.0, &tags.overlay(&#field_tags))
    }))
}
