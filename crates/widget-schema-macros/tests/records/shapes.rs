use std::collections::BTreeMap;

use widget_schema::{BuildSchema, FieldTags};

#[derive(BuildSchema)]
struct Meters(f64);

#[derive(BuildSchema)]
struct Point(#[schema(label = "X")] i32, #[schema(rename = "y")] i32);

#[derive(BuildSchema)]
struct Marker;

#[derive(BuildSchema)]
struct Route {
    #[schema(label = "Length")]
    length: Meters,
    start: Point,
    marker: Marker,
}

#[test]
fn test_newtype_is_transparent() {
    let tags = FieldTags::new().with_label("Length").with_weight(2);
    assert_eq!(Meters(1.0).build_schema(&tags), 1.0_f64.build_schema(&tags));
}

#[test]
fn test_tuple_struct_uses_positions() {
    let schema = widget_schema::build(&Point(1, 2)).unwrap();
    assert!(schema.is_object());
    let keys: Vec<_> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["0", "y"]);
    assert_eq!(schema.properties["0"].label, "X");
}

#[test]
fn test_unit_struct_is_empty_object() {
    let schema = widget_schema::build(&Marker).unwrap();
    assert!(schema.is_object());
    assert!(schema.properties.is_empty());
}

#[test]
fn test_nested_shapes() {
    let route = Route {
        length: Meters(3.5),
        start: Point(0, 0),
        marker: Marker,
    };
    let schema = widget_schema::build(&route).unwrap();
    assert_eq!(schema.properties["length"].type_name, "f64");
    assert_eq!(schema.properties["length"].label, "Length");
    assert!(schema.properties["start"].is_object());
    assert!(schema.properties["marker"].is_object());
}

#[derive(BuildSchema)]
struct Labeled<T> {
    #[schema(label = "Value")]
    value: T,
    history: Vec<T>,
}

#[test]
fn test_generic_record() {
    let value = Labeled {
        value: 1_u64,
        history: vec![2],
    };
    let schema = widget_schema::build(&value).unwrap();
    assert_eq!(schema.properties["value"].type_name, "u64");
    assert_eq!(schema.properties["value"].label, "Value");
    assert_eq!(
        schema.properties["history"].items.as_deref().unwrap().type_name,
        "u64"
    );
}

#[derive(BuildSchema)]
struct Borrowed<'a> {
    name: &'a str,
    lookup: BTreeMap<&'a str, Box<Labeled<bool>>>,
}

#[test]
fn test_borrowed_fields_and_boxed_values() {
    let mut lookup = BTreeMap::new();
    lookup.insert(
        "a",
        Box::new(Labeled {
            value: true,
            history: vec![],
        }),
    );
    let schema = widget_schema::build(&Borrowed { name: "n", lookup }).unwrap();
    assert_eq!(schema.properties["name"].type_name, "str");
    let item = schema.properties["lookup"].items.as_deref().unwrap();
    assert!(item.is_object());
    assert!(!item.properties.contains_key("history"));
}
