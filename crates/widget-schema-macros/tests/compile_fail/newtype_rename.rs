#![allow(dead_code)]

#[derive(widget_schema::BuildSchema)]
struct Id(#[schema(rename = "id")] u64);

fn main() {}
