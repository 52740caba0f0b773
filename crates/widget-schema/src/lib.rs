//! Widget schemas for dynamic form rendering.
//!
//! [`build`] walks a value and describes it as a [`Schema`] tree: primitive
//! leaves typed by their Rust type name, `array` and `map` nodes described by a
//! sampled element, and `object` nodes for records. Each node carries the UI
//! metadata (label, weight, required-ness, widget settings) of the field that
//! held it.
//!
//! Records implement [`BuildSchema`] through `#[derive(BuildSchema)]`
//! (feature `derive`, on by default) or by hand with [`RecordBuilder`].
//!
//! ```
//! use std::collections::HashMap;
//! use widget_schema::BuildSchema;
//!
//! #[derive(BuildSchema)]
//! struct TestType {
//!     #[schema(rename = "location", label = "Location label", weight = 123, validate = "required")]
//!     location: [f64; 2],
//!     #[schema(rename = "exampleMap", label = "exampleMap label", widget = "custom-map-input,images,cols=5")]
//!     example_map: HashMap<String, f64>,
//! }
//!
//! let value = TestType {
//!     location: [1.0, 2.0],
//!     example_map: HashMap::from([("z".to_string(), 123.0)]),
//! };
//! let json = widget_schema::build_json(&value).unwrap();
//! assert_eq!(json["properties"]["location"]["items"]["type"], "f64");
//! assert_eq!(json["properties"]["exampleMap"]["widgetSettings"]["cols"], 5);
//! ```

mod build;
mod error;
mod schema;
mod struct_tag;
mod tags;
mod widget_spec;

pub use build::{BuildSchema, RecordBuilder, build, build_json};
pub use error::TagError;
pub use schema::{ARRAY, MAP, OBJECT, Schema, WidgetSettings};
pub use struct_tag::StructTag;
pub use tags::{FieldTags, REQUIRED, TagLookup, external_name, keys, parse_weight};

#[cfg(feature = "derive")]
pub use widget_schema_macros::BuildSchema;
