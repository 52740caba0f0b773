use serde::Serialize;
use widget_schema::BuildSchema;

#[derive(BuildSchema)]
#[schema(rename_all = "camelCase")]
struct CamelFields {
    user_name: String,
    #[schema(rename = "mail")]
    email_address: String,
}

#[test]
fn test_rename_all_and_explicit_rename() {
    let value = CamelFields {
        user_name: String::new(),
        email_address: String::new(),
    };
    let schema = widget_schema::build(&value).unwrap();
    let keys: Vec<_> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["userName", "mail"]);
}

#[derive(Serialize, BuildSchema)]
#[serde(rename_all = "kebab-case")]
struct SerdeNames {
    first_name: String,
    #[serde(rename = "surname")]
    last_name: String,
    #[serde(rename = "serde-name")]
    #[schema(rename = "schema-name")]
    both: String,
}

#[test]
fn test_serde_names_are_the_fallback() {
    let value = SerdeNames {
        first_name: String::new(),
        last_name: String::new(),
        both: String::new(),
    };
    let schema = widget_schema::build(&value).unwrap();
    let keys: Vec<_> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["first-name", "surname", "schema-name"]);
}

#[derive(Serialize, BuildSchema)]
#[serde(rename_all = "snake_case")]
#[schema(rename_all = "PascalCase")]
struct SchemaRuleWins {
    display_name: String,
}

#[test]
fn test_schema_rename_all_over_serde_rename_all() {
    let value = SchemaRuleWins {
        display_name: String::new(),
    };
    let schema = widget_schema::build(&value).unwrap();
    assert!(schema.properties.contains_key("DisplayName"));
}

#[derive(BuildSchema)]
struct RawIdent {
    r#type: String,
}

#[test]
fn test_raw_identifiers_lose_prefix() {
    let value = RawIdent { r#type: String::new() };
    let schema = widget_schema::build(&value).unwrap();
    assert!(schema.properties.contains_key("type"));
}

#[derive(Serialize, BuildSchema)]
struct Skipped {
    kept: bool,
    #[schema(skip)]
    internal: u8,
    #[serde(skip)]
    cache: Vec<u8>,
    #[serde(skip_serializing)]
    secret: String,
}

#[test]
fn test_skipped_fields_are_not_described() {
    let value = Skipped {
        kept: true,
        internal: 1,
        cache: vec![1],
        secret: "x".to_string(),
    };
    let schema = widget_schema::build(&value).unwrap();
    let keys: Vec<_> = schema.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["kept"]);
}
