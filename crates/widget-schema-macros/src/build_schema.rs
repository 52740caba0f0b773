//! BuildSchema derive macro implementation

mod build_record;
mod field_tags;

use proc_macro2::TokenStream;
use syn::Data;

use crate::context::MacroContext;

pub fn derive(context: MacroContext) -> TokenStream {
    let result = match &context.input.data {
        Data::Struct(data) => build_record::generate_record_schema(&context, data),
        Data::Enum(_) => Err(darling::Error::custom("enums are not supported by BuildSchema")
            .with_span(context.ident())),
        Data::Union(_) => Err(darling::Error::custom("unions are not supported by BuildSchema")
            .with_span(context.ident())),
    };
    result.unwrap_or_else(|err| err.write_errors())
}
