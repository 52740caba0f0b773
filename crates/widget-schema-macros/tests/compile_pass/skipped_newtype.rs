use std::marker::PhantomData;

use widget_schema::BuildSchema;

#[derive(BuildSchema)]
struct Unit;

#[derive(BuildSchema)]
struct Handle<T: 'static>(#[schema(skip)] PhantomData<T>);

fn main() {
    let handle: Handle<Unit> = Handle(PhantomData);
    let schema = widget_schema::build(&handle);
    assert!(schema.is_some_and(|schema| schema.is_object()));
}
