use darling::FromDeriveInput;
use syn::Path;

use super::RenameAll;

#[derive(Debug, Default, FromDeriveInput)]
#[darling(attributes(schema), default)]
pub struct ContainerAttrs {
    /// Path of the runtime crate, `::widget_schema` when unset.
    #[darling(rename = "crate")]
    pub crate_path: Option<Path>,
    /// Case rule for field names without an explicit rename.
    /// Takes precedence over `#[serde(rename_all)]`.
    pub rename_all: Option<RenameAll>,
}
