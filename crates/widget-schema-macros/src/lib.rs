use darling::FromDeriveInput;
use syn::parse_macro_input;

use crate::{attrs::ContainerAttrs, config::MacroConfig, context::MacroContext};

mod attrs;
mod build_schema;
pub(crate) mod config;
pub(crate) mod context;
mod serde_attrs;

/// Derives `widget_schema::BuildSchema` for a struct.
///
/// Field attributes, all under `#[schema(...)]`:
///
/// - `rename = "name"`: external name (default: `#[serde(rename)]`, then the
///   container rename rule, then the declared name)
/// - `label = "..."`, `vocabulary = "..."`
/// - `weight = 3` or `weight = "3"`
/// - `required`, `validate = "required,..."`
/// - `widget = "name,images,cols=5"` or
///   `widget(name = "...", images, cols = 5, url_prefix = "...", storage = "...",
///   vocabulary = "...", options(key = "value"))`
/// - `skip` (as do `#[serde(skip)]` and `#[serde(skip_serializing)]`)
///
/// Container attributes: `crate = path::to::widget_schema` and
/// `rename_all = "camelCase"` (falls back to `#[serde(rename_all)]`).
#[proc_macro_derive(BuildSchema, attributes(schema))]
pub fn build_schema_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match create_context(input) {
        Ok(context) => build_schema::derive(context).into(),
        Err(err) => err.write_errors().into(),
    }
}

fn create_context(input: syn::DeriveInput) -> darling::Result<MacroContext> {
    let attrs = ContainerAttrs::from_derive_input(&input)?;
    let serde_rename_all = serde_attrs::container_rename_all(&input.attrs)?;
    Ok(MacroContext::new(
        MacroConfig::from_attrs(attrs, serde_rename_all),
        input,
    ))
}
