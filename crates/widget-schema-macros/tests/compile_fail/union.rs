#![allow(dead_code)]

#[derive(widget_schema::BuildSchema)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
