#![allow(dead_code)]

#[derive(widget_schema::BuildSchema)]
enum Choice {
    Left,
    Right,
}

fn main() {}
