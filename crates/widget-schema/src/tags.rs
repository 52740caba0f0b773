//! Per-field tag context
//!
//! [`FieldTags`] is the metadata a field contributes to its own schema node:
//! label, vocabulary, weight, required-ness and widget settings. Derived impls
//! fill it from `#[schema(...)]` attributes; hand-written code can use the
//! `with_*` methods or read a [`TagLookup`] source.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::error::TagError;
use crate::schema::WidgetSettings;

/// Tag keys read by [`FieldTags::from_lookup`].
pub mod keys {
    pub const LABEL: &str = "label";
    pub const VOCABULARY: &str = "vocabulary";
    pub const WEIGHT: &str = "weight";
    pub const VALIDATE: &str = "validate";
    pub const WIDGET: &str = "widget";
    /// Carries the external field name as its first comma segment.
    pub const JSON: &str = "json";
}

/// `validate` token that marks a field as required.
pub const REQUIRED: &str = "required";

/// Metadata attached to one field.
///
/// The default value is the empty context, used for top-level values and for
/// sampled collection elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldTags {
    pub label: String,
    pub vocabulary: String,
    pub weight: i64,
    pub required: bool,
    pub widget: WidgetSettings,
}

impl FieldTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
        self.vocabulary = vocabulary.into();
        self
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the weight from its tag text. Text that is not an integer gives 0.
    pub fn with_weight_tag(mut self, weight: &str) -> Self {
        self.weight = if weight.is_empty() {
            0
        } else {
            parse_weight(weight).unwrap_or_else(|err| {
                tracing::debug!(%err, "ignoring weight tag");
                0
            })
        };
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Applies a comma separated `validate` token list.
    ///
    /// Only `required` has a meaning; other tokens are ignored.
    pub fn with_validate(mut self, validate: &str) -> Self {
        if validate.split(',').map(str::trim).any(|token| token == REQUIRED) {
            self.required = true;
        }
        self
    }

    pub fn with_widget(mut self, widget: WidgetSettings) -> Self {
        self.widget = widget;
        self
    }

    /// Parses a widget spec in the `name,flag,key=value` grammar.
    pub fn with_widget_spec(self, spec: &str) -> Self {
        self.with_widget(WidgetSettings::parse(spec))
    }

    /// Tags for a value standing in for the field that holds it, like the
    /// single field of a newtype. Whatever `inner` sets wins; `required` holds
    /// if either side sets it.
    pub fn overlay(&self, inner: &FieldTags) -> FieldTags {
        fn pick(outer: &str, inner: &str) -> String {
            let picked = if inner.is_empty() { outer } else { inner };
            picked.to_string()
        }
        FieldTags {
            label: pick(&self.label, &inner.label),
            vocabulary: pick(&self.vocabulary, &inner.vocabulary),
            weight: if inner.weight == 0 { self.weight } else { inner.weight },
            required: self.required || inner.required,
            widget: if inner.widget.is_empty() {
                self.widget.clone()
            } else {
                inner.widget.clone()
            },
        }
    }

    /// Reads every supported key from a tag source.
    pub fn from_lookup<L: TagLookup + ?Sized>(lookup: &L) -> Self {
        let mut tags = Self::new();
        if let Some(label) = lookup.get(keys::LABEL) {
            tags = tags.with_label(label);
        }
        if let Some(vocabulary) = lookup.get(keys::VOCABULARY) {
            tags = tags.with_vocabulary(vocabulary);
        }
        if let Some(weight) = lookup.get(keys::WEIGHT) {
            tags = tags.with_weight_tag(weight);
        }
        if let Some(validate) = lookup.get(keys::VALIDATE) {
            tags = tags.with_validate(validate);
        }
        if let Some(widget) = lookup.get(keys::WIDGET) {
            tags = tags.with_widget_spec(widget);
        }
        tags
    }

    /// Settings to attach to the node, or `None` when there are none.
    ///
    /// A vocabulary given inside the widget spec wins over the field's own
    /// `vocabulary`.
    pub fn widget_settings(&self) -> Option<WidgetSettings> {
        let mut settings = self.widget.clone();
        if settings.vocabulary.is_empty() {
            settings.vocabulary.clone_from(&self.vocabulary);
        }
        (!settings.is_empty()).then_some(settings)
    }
}

/// Parses a weight tag as a decimal integer.
pub fn parse_weight(weight: &str) -> Result<i64, TagError> {
    weight.parse().map_err(|source| TagError::InvalidWeight {
        value: weight.to_string(),
        source,
    })
}

/// External name of a field: the first comma segment of its `json` tag, or
/// the declared name when that segment is missing or empty.
pub fn external_name<L: TagLookup + ?Sized>(lookup: &L, declared: &str) -> String {
    lookup
        .get(keys::JSON)
        .and_then(|json| json.split(',').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(declared)
        .to_string()
}

/// Read-only `key -> value` access to a field's tags.
pub trait TagLookup {
    fn get(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> TagLookup for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl TagLookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl<S: BuildHasher> TagLookup for IndexMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        IndexMap::get(self, key).map(String::as_str)
    }
}

impl TagLookup for [(&str, &str)] {
    fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl<const N: usize> TagLookup for [(&str, &str); N] {
    fn get(&self, key: &str) -> Option<&str> {
        TagLookup::get(self.as_slice(), key)
    }
}

impl<L: TagLookup + ?Sized> TagLookup for &L {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}
