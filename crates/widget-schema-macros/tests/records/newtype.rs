use std::marker::PhantomData;

use widget_schema::{BuildSchema, FieldTags};

#[derive(BuildSchema)]
struct Id(#[schema(label = "Identifier", required)] u64);

#[derive(BuildSchema)]
struct Tag(#[schema(widget = "chip,cols=2")] String);

#[derive(BuildSchema)]
struct Hidden(#[schema(skip)] PhantomData<u8>);

#[derive(BuildSchema)]
struct Account {
    #[schema(weight = 5, label = "Account id")]
    id: Id,
    tag: Tag,
    hidden: Hidden,
}

#[test]
fn test_newtype_field_tags_apply() {
    let schema = widget_schema::build(&Id(1)).unwrap();
    assert_eq!(schema.type_name, "u64");
    assert_eq!(schema.label, "Identifier");
    assert!(schema.required);
}

#[test]
fn test_newtype_field_tags_win_over_inherited() {
    let inherited = FieldTags::new().with_label("Outer").with_weight(7);
    let schema = Id(1).build_schema(&inherited).unwrap();
    assert_eq!(schema.label, "Identifier");
    assert_eq!(schema.weight, 7);
    assert!(schema.required);
}

#[test]
fn test_newtype_inside_record() {
    let account = Account {
        id: Id(3),
        tag: Tag("vip".to_string()),
        hidden: Hidden(PhantomData),
    };
    let schema = widget_schema::build(&account).unwrap();

    let id = &schema.properties["id"];
    assert_eq!(id.label, "Identifier");
    assert_eq!(id.weight, 5);

    let tag = schema.properties["tag"].widget_settings.as_ref().unwrap();
    assert_eq!(tag.name, "chip");
    assert_eq!(tag.cols, 2);

    assert!(schema.properties["hidden"].is_object());
    assert!(schema.properties["hidden"].properties.is_empty());
}
