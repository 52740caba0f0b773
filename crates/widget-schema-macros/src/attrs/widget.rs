use darling::FromMeta;
use darling::ast::NestedMeta;
use syn::Meta;

/// `#[schema(widget = "...")]` or `#[schema(widget(...))]`
#[derive(Debug, Clone)]
pub enum WidgetAttr {
    /// Spec text in the `name,flag,key=value` grammar, parsed at build time.
    Spec(String),
    /// Settings written out as attribute arguments.
    Settings(WidgetSettingsAttr),
}

impl FromMeta for WidgetAttr {
    fn from_string(value: &str) -> darling::Result<Self> {
        Ok(WidgetAttr::Spec(value.to_string()))
    }

    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        WidgetSettingsAttr::from_list(items).map(WidgetAttr::Settings)
    }
}

#[derive(Debug, Clone, Default, FromMeta)]
#[darling(default)]
pub struct WidgetSettingsAttr {
    pub name: Option<String>,
    pub options: WidgetOptions,
    pub url_prefix: Option<String>,
    pub storage: Option<String>,
    pub images: bool,
    pub vocabulary: Option<String>,
    pub cols: Option<i64>,
}

/// `options(key = "value", ...)`, kept in written order.
#[derive(Debug, Clone, Default)]
pub struct WidgetOptions(pub Vec<(String, String)>);

impl FromMeta for WidgetOptions {
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut options = Vec::with_capacity(items.len());

        for item in items {
            let NestedMeta::Meta(Meta::NameValue(pair)) = item else {
                errors.push(darling::Error::custom("expected `key = \"value\"`").with_span(item));
                continue;
            };
            let Some(key) = pair.path.get_ident() else {
                errors.push(darling::Error::custom("option key must be an identifier").with_span(&pair.path));
                continue;
            };
            if let Some(value) = errors.handle(String::from_expr(&pair.value)) {
                options.push((key.to_string(), value));
            }
        }

        errors.finish_with(WidgetOptions(options))
    }
}
