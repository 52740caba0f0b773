use widget_schema::{BuildSchema, FieldTags, Schema};

#[derive(BuildSchema)]
struct User {
    name: String,
    age: u32,
    active: bool,
}

fn user() -> User {
    User {
        name: "Alice".to_string(),
        age: 30,
        active: true,
    }
}

#[test]
fn test_named_struct_is_object() {
    let schema = widget_schema::build(&user()).unwrap();
    assert!(schema.is_object());
    assert!(schema.items.is_none());
    assert_eq!(schema.properties.len(), 3);
    assert_eq!(schema.properties["name"].type_name, "String");
    assert_eq!(schema.properties["age"].type_name, "u32");
    assert_eq!(schema.properties["active"].type_name, "bool");
}

#[test]
fn test_properties_follow_declaration_order() {
    let schema = widget_schema::build(&user()).unwrap();
    let keys: Vec<_> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "age", "active"]);
}

#[test]
fn test_plain_fields_have_no_metadata() {
    let schema = widget_schema::build(&user()).unwrap();
    assert_eq!(
        schema.properties["age"],
        Schema::primitive("u32", &FieldTags::default())
    );
}

#[test]
fn test_record_carries_inherited_tags() {
    let tags = FieldTags::new().with_label("Owner").with_weight(4);
    let schema = user().build_schema(&tags).unwrap();
    assert_eq!(schema.label, "Owner");
    assert_eq!(schema.weight, 4);
    // Field contexts are derived per field, never inherited
    assert_eq!(schema.properties["name"].label, "");
    assert_eq!(schema.properties["name"].weight, 0);
}

#[test]
fn test_build_is_idempotent() {
    let value = user();
    assert_eq!(widget_schema::build(&value), widget_schema::build(&value));
}
