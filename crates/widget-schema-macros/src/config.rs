use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::attrs::{ContainerAttrs, RenameAll};

pub struct MacroConfig {
    pub schema_crate: TokenStream,
    pub rename_all: Option<RenameAll>,
}

impl MacroConfig {
    /// `serde_rename_all` is the container's `#[serde(rename_all)]`, used when
    /// no `#[schema(rename_all)]` is given.
    pub fn from_attrs(attrs: ContainerAttrs, serde_rename_all: Option<RenameAll>) -> Self {
        let schema_crate = attrs
            .crate_path
            .map(|path| path.into_token_stream())
            .unwrap_or_else(|| quote! { ::widget_schema });
        Self {
            schema_crate,
            rename_all: attrs.rename_all.or(serde_rename_all),
        }
    }
}
