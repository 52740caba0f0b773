//! Schema building from Rust values
//!
//! This module provides the [`BuildSchema`] trait and its implementations for
//! primitives, indirections and std collections, plus [`RecordBuilder`] for
//! struct-like types.
//!
//! # Example
//!
//! ```
//! use widget_schema::BuildSchema;
//!
//! #[derive(BuildSchema)]
//! struct Place {
//!     #[schema(label = "Location label", weight = 123, required)]
//!     location: [f64; 2],
//! }
//!
//! let place = Place { location: [1.0, 2.0] };
//! let schema = widget_schema::build(&place).unwrap();
//! assert_eq!(schema.properties["location"].weight, 123);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::schema::Schema;
use crate::tags::FieldTags;

/// Types that can describe themselves as a widget schema node.
///
/// Usually derived with `#[derive(BuildSchema)]`. The value is inspected, not
/// only its type: empty collections and `None` have nothing to describe and
/// return `None`, which a parent record turns into a missing property.
pub trait BuildSchema {
    /// Builds the node for this value.
    ///
    /// `tags` is the context of the field holding the value. Implementations
    /// apply it to the node they return and build their own children with
    /// fresh contexts.
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema>;
}

/// Builds the schema of a top-level value.
pub fn build<T: BuildSchema + ?Sized>(value: &T) -> Option<Schema> {
    value.build_schema(&FieldTags::default())
}

/// Builds the schema of a top-level value in its JSON form.
///
/// A value with no schema gives `null`.
pub fn build_json<T: BuildSchema + ?Sized>(value: &T) -> serde_json::Result<serde_json::Value> {
    match build(value) {
        Some(schema) => serde_json::to_value(schema),
        None => Ok(serde_json::Value::Null),
    }
}

/// Collects the properties of a struct-like value.
///
/// ```
/// use widget_schema::{BuildSchema, FieldTags, RecordBuilder, Schema};
///
/// struct Contact {
///     email: String,
///     phones: Vec<String>,
/// }
///
/// impl BuildSchema for Contact {
///     fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
///         let mut record = RecordBuilder::new(tags);
///         record
///             .field("email", &self.email, &FieldTags::new().with_required(true))
///             .field("phones", &self.phones, &FieldTags::new().with_label("Phones"));
///         record.finish()
///     }
/// }
///
/// let contact = Contact { email: "a@b.c".into(), phones: vec![] };
/// let schema = widget_schema::build(&contact).unwrap();
/// assert!(schema.properties["email"].required);
/// assert!(!schema.properties.contains_key("phones"));
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    schema: Schema,
}

impl RecordBuilder {
    /// Starts an object node carrying the record's own field context.
    pub fn new(tags: &FieldTags) -> Self {
        Self {
            schema: Schema::object(tags),
        }
    }

    /// Describes one field. A field with no schema is left out.
    pub fn field<T: BuildSchema + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
        tags: &FieldTags,
    ) -> &mut Self {
        self.schema.insert_property(name, value.build_schema(tags));
        self
    }

    pub fn finish(self) -> Option<Schema> {
        Some(self.schema)
    }
}

/// Node for a sequence, described by its first element.
fn describe_sequence<'a, T, I>(mut elements: I, tags: &FieldTags) -> Option<Schema>
where
    T: BuildSchema + ?Sized + 'a,
    I: Iterator<Item = &'a T>,
{
    let Some(first) = elements.next() else {
        tracing::trace!("empty sequence has no element to describe");
        return None;
    };
    Some(Schema::array(first.build_schema(&FieldTags::default()), tags))
}

/// Node for a map, described by one of its values.
fn describe_map<'a, V, I>(mut values: I, tags: &FieldTags) -> Option<Schema>
where
    V: BuildSchema + ?Sized + 'a,
    I: Iterator<Item = &'a V>,
{
    let Some(sample) = values.next() else {
        tracing::trace!("empty map has no value to describe");
        return None;
    };
    Some(Schema::map(sample.build_schema(&FieldTags::default()), tags))
}

// ============================================================================
// Primitive Type Implementations
// ============================================================================

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BuildSchema for $ty {
                fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
                    Some(Schema::primitive(stringify!($ty), tags))
                }
            }
        )*
    };
}

impl_primitive!(
    bool, char, String, str, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

// ============================================================================
// Indirection
// ============================================================================

impl<T: BuildSchema> BuildSchema for Option<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        match self {
            Some(value) => value.build_schema(tags),
            None => {
                tracing::trace!("unset optional value has no schema");
                None
            }
        }
    }
}

impl<T: BuildSchema + ?Sized> BuildSchema for &T {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        (**self).build_schema(tags)
    }
}

impl<T: BuildSchema + ?Sized> BuildSchema for &mut T {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        (**self).build_schema(tags)
    }
}

impl<T: BuildSchema + ?Sized> BuildSchema for Box<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        (**self).build_schema(tags)
    }
}

impl<T: BuildSchema + ?Sized> BuildSchema for Rc<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        (**self).build_schema(tags)
    }
}

impl<T: BuildSchema + ?Sized> BuildSchema for Arc<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        (**self).build_schema(tags)
    }
}

impl<T: BuildSchema + ToOwned + ?Sized> BuildSchema for Cow<'_, T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        (**self).build_schema(tags)
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<K, V: BuildSchema, S> BuildSchema for HashMap<K, V, S> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_map(self.values(), tags)
    }
}

impl<K, V: BuildSchema> BuildSchema for BTreeMap<K, V> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_map(self.values(), tags)
    }
}

impl<K, V: BuildSchema, S> BuildSchema for IndexMap<K, V, S> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_map(self.values(), tags)
    }
}

// ============================================================================
// Sequences
// ============================================================================

impl<T: BuildSchema> BuildSchema for [T] {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}

impl<T: BuildSchema, const N: usize> BuildSchema for [T; N] {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}

impl<T: BuildSchema> BuildSchema for Vec<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}

impl<T: BuildSchema> BuildSchema for VecDeque<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}

impl<T: BuildSchema> BuildSchema for BTreeSet<T> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}

impl<T: BuildSchema, S> BuildSchema for HashSet<T, S> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}

impl<T: BuildSchema, S> BuildSchema for IndexSet<T, S> {
    fn build_schema(&self, tags: &FieldTags) -> Option<Schema> {
        describe_sequence(self.iter(), tags)
    }
}
