use std::collections::HashMap;

use serde_json::json;
use widget_schema::BuildSchema;

#[derive(BuildSchema)]
struct TestType {
    #[schema(rename = "location", label = "Location label", weight = "123", validate = "required")]
    location: [f64; 2],
    #[schema(
        rename = "exampleMap",
        label = "exampleMap label",
        widget = "custom-map-input,images,sortable,URLPrefix=/asdasd/,cols=5"
    )]
    example_map: HashMap<String, f64>,
}

fn example() -> TestType {
    TestType {
        location: [1.0, 2.0],
        example_map: HashMap::from([("z".to_string(), 123.0)]),
    }
}

#[test]
fn test_location_is_required_weighted_array() {
    let schema = widget_schema::build(&example()).unwrap();
    let location = &schema.properties["location"];
    assert!(location.is_array());
    assert_eq!(location.label, "Location label");
    assert_eq!(location.weight, 123);
    assert!(location.required);
    assert_eq!(location.items.as_deref().unwrap().type_name, "f64");
}

#[test]
fn test_example_map_has_widget_settings() {
    let schema = widget_schema::build(&example()).unwrap();
    let map = &schema.properties["exampleMap"];
    assert!(map.is_map());
    assert_eq!(map.label, "exampleMap label");
    let settings = map.widget_settings.as_ref().unwrap();
    assert_eq!(settings.name, "custom-map-input");
    assert!(settings.images);
    assert_eq!(settings.cols, 5);
    assert_eq!(settings.url_prefix, "/asdasd/");
    assert!(settings.options.is_empty());
}

#[test]
fn test_wire_form() {
    assert_eq!(
        widget_schema::build_json(&example()).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "array",
                    "label": "Location label",
                    "items": { "type": "f64" },
                    "required": true,
                    "weight": 123
                },
                "exampleMap": {
                    "type": "map",
                    "label": "exampleMap label",
                    "items": { "type": "f64" },
                    "widgetSettings": {
                        "name": "custom-map-input",
                        "URLPrefix": "/asdasd/",
                        "images": true,
                        "cols": 5
                    }
                }
            }
        })
    );
}

#[test]
fn test_properties_serialize_in_declaration_order() {
    let text = serde_json::to_string(&widget_schema::build(&example()).unwrap()).unwrap();
    let location = text.find("\"location\"").unwrap();
    let example_map = text.find("\"exampleMap\"").unwrap();
    assert!(location < example_map);
}
