use std::fmt::Debug;

use widget_schema::BuildSchema;

#[derive(BuildSchema)]
struct Pair<A, B>
where
    A: Debug,
{
    first: A,
    second: Option<B>,
}

fn main() {
    let pair = Pair {
        first: 1_i8,
        second: Some("two".to_string()),
    };
    let _ = widget_schema::build(&pair);
}
