//! Conventional `key:"value"` field tag strings
//!
//! Lets schemas be described from tag text kept outside of Rust source, for
//! example a field registry loaded at startup:
//!
//! ```
//! use widget_schema::{FieldTags, StructTag};
//!
//! let tag: StructTag = r#"label:"Location label" json:"location" weight:"123""#
//!     .parse()
//!     .unwrap();
//! let tags = FieldTags::from_lookup(&tag);
//! assert_eq!(tags.label, "Location label");
//! assert_eq!(tags.weight, 123);
//! ```

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::TagError;
use crate::tags::TagLookup;

/// Parsed tag string. When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructTag {
    entries: IndexMap<String, String>,
}

impl StructTag {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TagLookup for StructTag {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl FromStr for StructTag {
    type Err = TagError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut entries = IndexMap::new();
        let mut parser = Parser { tag, pos: 0 };
        while let Some((key, value)) = parser.next_entry()? {
            entries.entry(key).or_insert(value);
        }
        Ok(Self { entries })
    }
}

struct Parser<'a> {
    tag: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.tag[self.pos..]
    }

    fn error(&self, reason: &'static str) -> TagError {
        TagError::MalformedStructTag {
            offset: self.pos,
            reason,
        }
    }

    fn next_entry(&mut self) -> Result<Option<(String, String)>, TagError> {
        let rest = self.rest();
        let padding = rest.len() - rest.trim_start_matches(' ').len();
        self.pos += padding;
        if self.rest().is_empty() {
            return Ok(None);
        }

        let key_len = self
            .rest()
            .find(|c: char| c == ':' || c == '"' || c == ' ' || c.is_control())
            .unwrap_or(self.rest().len());
        if key_len == 0 {
            return Err(self.error("expected key"));
        }
        let key = self.rest()[..key_len].to_string();
        self.pos += key_len;

        if !self.rest().starts_with(":\"") {
            return Err(self.error("expected `:\"` after key"));
        }
        self.pos += 2;

        let value = self.quoted_value()?;
        Ok(Some((key, value)))
    }

    /// Reads up to the closing quote, resolving backslash escapes.
    fn quoted_value(&mut self) -> Result<String, TagError> {
        let mut value = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos += offset + 1;
                    return Ok(value);
                }
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                c => value.push(c),
            }
        }
        Err(self.error("unterminated value"))
    }
}
