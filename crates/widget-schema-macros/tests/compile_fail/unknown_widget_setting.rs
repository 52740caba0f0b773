#![allow(dead_code)]

#[derive(widget_schema::BuildSchema)]
struct Swatch {
    #[schema(widget(name = "picker", shade = "red"))]
    colour: String,
}

fn main() {}
