//! Widget schema data model
//!
//! A [`Schema`] tree is the wire format consumed by form renderers. Every field
//! holding its zero value is left out of the serialized form, so consumers must
//! read a missing key as `false`, `0` or empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tags::FieldTags;

/// `type` of record nodes.
pub const OBJECT: &str = "object";
/// `type` of sequence nodes.
pub const ARRAY: &str = "array";
/// `type` of map nodes.
pub const MAP: &str = "map";

/// One node of the schema tree.
///
/// A node is an object (`properties`), a container (`items`) or a primitive
/// leaf (neither). The constructors below are the only way the builder creates
/// nodes, which keeps the two shapes apart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(skip_serializing_if = "is_zero")]
    pub weight: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_settings: Option<WidgetSettings>,
}

/// Widget-level configuration attached to a node.
///
/// Purely descriptive: nothing here changes the shape of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, String>,

    #[serde(rename = "URLPrefix", skip_serializing_if = "String::is_empty")]
    pub url_prefix: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage: String,

    #[serde(skip_serializing_if = "is_false")]
    pub images: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub vocabulary: String,

    #[serde(skip_serializing_if = "is_zero")]
    pub cols: i64,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Schema {
    /// Leaf node for a primitive type.
    pub fn primitive(type_name: impl Into<String>, tags: &FieldTags) -> Self {
        Self::annotated(type_name.into(), tags)
    }

    /// Record node with no properties yet.
    pub fn object(tags: &FieldTags) -> Self {
        Self::annotated(OBJECT.to_string(), tags)
    }

    /// Sequence node describing its elements with `items`.
    ///
    /// `items` is `None` when the sampled element produced no schema itself.
    pub fn array(items: Option<Schema>, tags: &FieldTags) -> Self {
        Self {
            items: items.map(Box::new),
            ..Self::annotated(ARRAY.to_string(), tags)
        }
    }

    /// Map node describing its values with `items`.
    pub fn map(items: Option<Schema>, tags: &FieldTags) -> Self {
        Self {
            items: items.map(Box::new),
            ..Self::annotated(MAP.to_string(), tags)
        }
    }

    fn annotated(type_name: String, tags: &FieldTags) -> Self {
        Self {
            type_name,
            label: tags.label.clone(),
            properties: IndexMap::new(),
            items: None,
            required: tags.required,
            weight: tags.weight,
            widget_settings: tags.widget_settings(),
        }
    }

    pub fn is_object(&self) -> bool {
        self.type_name == OBJECT
    }

    pub fn is_array(&self) -> bool {
        self.type_name == ARRAY
    }

    pub fn is_map(&self) -> bool {
        self.type_name == MAP
    }

    /// Neither an object nor a container.
    pub fn is_primitive(&self) -> bool {
        !self.is_object() && !self.is_array() && !self.is_map()
    }

    /// Child node for `name`, if it was produced.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    /// Adds a child under `name`, replacing any previous child of that name.
    ///
    /// An absent child leaves no key behind.
    pub fn insert_property(&mut self, name: impl Into<String>, child: Option<Schema>) {
        let name = name.into();
        match child {
            Some(child) => {
                self.properties.insert(name, child);
            }
            None => {
                tracing::trace!(property = %name, "omitting absent property");
                self.properties.shift_remove(&name);
            }
        }
    }
}

impl WidgetSettings {
    /// Settings carrying only a widget name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// True when every setting holds its zero value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
