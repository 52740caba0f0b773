use std::num::ParseIntError;

/// Recoverable problems found while reading field tags.
///
/// Schema building never surfaces these: the offending tag value is dropped
/// and the error is logged. Strict helpers such as [`crate::parse_weight`] and
/// [`crate::StructTag`]'s `FromStr` return them directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("invalid weight `{value}`: {source}")]
    InvalidWeight {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid cols `{value}`: {source}")]
    InvalidCols {
        value: String,
        source: ParseIntError,
    },

    #[error("unknown widget setting `{0}`")]
    UnknownWidgetKey(String),

    #[error("unknown widget flag `{0}`")]
    UnknownWidgetFlag(String),

    /// A widget token with more than one `=`.
    #[error("malformed widget token `{0}`")]
    MalformedWidgetToken(String),

    #[error("malformed struct tag at byte {offset}: {reason}")]
    MalformedStructTag { offset: usize, reason: &'static str },
}
