use std::fmt;

use convert_case::{Case, Casing as _};
use darling::FromMeta;

/// `rename_all` rules in serde's spelling.
static RULES: [(&str, Case<'static>); 8] = [
    ("lowercase", Case::Flat),
    ("UPPERCASE", Case::UpperFlat),
    ("PascalCase", Case::Pascal),
    ("camelCase", Case::Camel),
    ("snake_case", Case::Snake),
    ("SCREAMING_SNAKE_CASE", Case::UpperSnake),
    ("kebab-case", Case::Kebab),
    ("SCREAMING-KEBAB-CASE", Case::Cobol),
];

/// Case rule applied to declared field names.
#[derive(Clone, Copy)]
pub struct RenameAll(&'static (&'static str, Case<'static>));

impl RenameAll {
    pub fn spelling(self) -> &'static str {
        self.0.0
    }

    pub fn apply(self, name: &str) -> String {
        name.to_case(self.0.1)
    }
}

impl PartialEq for RenameAll {
    fn eq(&self, other: &Self) -> bool {
        self.spelling() == other.spelling()
    }
}

impl Eq for RenameAll {}

impl fmt::Debug for RenameAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RenameAll").field(&self.spelling()).finish()
    }
}

impl FromMeta for RenameAll {
    fn from_string(value: &str) -> darling::Result<Self> {
        RULES
            .iter()
            .find(|(spelling, _)| *spelling == value)
            .map(RenameAll)
            .ok_or_else(|| darling::Error::unknown_value(value))
    }
}
