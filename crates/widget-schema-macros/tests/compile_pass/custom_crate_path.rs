mod reexport {
    pub use widget_schema as schema;
}

#[derive(widget_schema::BuildSchema)]
#[schema(crate = crate::reexport::schema)]
struct Settings {
    #[schema(label = "Theme", widget = "select")]
    theme: String,
}

fn main() {
    let settings = Settings {
        theme: "dark".to_string(),
    };
    let _ = widget_schema::build(&settings);
}
