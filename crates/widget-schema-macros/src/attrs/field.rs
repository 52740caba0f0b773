use darling::FromField;

use super::{Weight, WidgetAttr};

#[derive(Debug, Default, FromField)]
#[darling(default, attributes(schema))]
pub struct FieldAttrs {
    /// External name of the field (overrides `#[serde(rename)]` and rename_all)
    pub rename: Option<String>,
    pub label: Option<String>,
    pub vocabulary: Option<String>,
    /// `weight = 3` or `weight = "3"`; the string form falls back to 0 when it
    /// is not an integer.
    pub weight: Option<Weight>,
    pub required: bool,
    /// Comma separated validation tokens, only `required` is meaningful.
    pub validate: Option<String>,
    pub widget: Option<WidgetAttr>,
    /// Leave the field out of the schema.
    pub skip: bool,
}
