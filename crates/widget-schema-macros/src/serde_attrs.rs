//! Reads the `#[serde(...)]` attributes that decide a field's external name.
//!
//! Only `rename`, `rename_all`, `skip` and `skip_serializing` matter here;
//! every other serde argument is skipped over.

use darling::FromMeta;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

use crate::attrs::RenameAll;

fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_value(&nested))?;
    }
    Ok(())
}

/// `name = "..."` or `name(serialize = "...")`, the serialize side being the
/// one a form renderer sees.
fn serialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }
    let mut name = None;
    if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| {
            if nested.path.is_ident("serialize") {
                name = Some(nested.value()?.parse()?);
                Ok(())
            } else {
                skip_value(&nested)
            }
        })?;
    }
    Ok(name)
}

fn for_each_serde_meta(
    attrs: &[Attribute],
    mut f: impl FnMut(&ParseNestedMeta) -> syn::Result<bool>,
) -> syn::Result<()> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if f(&meta)? {
                Ok(())
            } else {
                skip_value(&meta)
            }
        })?;
    }
    Ok(())
}

pub fn field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;
    for_each_serde_meta(attrs, |meta| {
        if !meta.path.is_ident("rename") {
            return Ok(false);
        }
        if let Some(name) = serialize_name(meta)? {
            rename = Some(name.value());
        }
        Ok(true)
    })?;
    Ok(rename)
}

pub fn field_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skipped = false;
    for_each_serde_meta(attrs, |meta| {
        if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            skipped = true;
        }
        Ok(false)
    })?;
    Ok(skipped)
}

pub fn container_rename_all(attrs: &[Attribute]) -> syn::Result<Option<RenameAll>> {
    let mut rule = None;
    for_each_serde_meta(attrs, |meta| {
        if !meta.path.is_ident("rename_all") {
            return Ok(false);
        }
        if let Some(name) = serialize_name(meta)? {
            let parsed = RenameAll::from_string(&name.value())
                .map_err(|err| syn::Error::new(name.span(), err))?;
            rule = Some(parsed);
        }
        Ok(true)
    })?;
    Ok(rule)
}
