//! `FieldTags` expressions for field attributes

use proc_macro2::TokenStream;
use quote::quote;

use crate::attrs::{FieldAttrs, Weight, WidgetAttr, WidgetSettingsAttr};

/// Builds the `FieldTags` value a field passes to its own schema.
pub fn field_tags(schema_crate: &TokenStream, attrs: &FieldAttrs) -> TokenStream {
    let mut calls = Vec::new();

    if let Some(label) = &attrs.label {
        calls.push(quote! { .with_label(#label) });
    }
    if let Some(vocabulary) = &attrs.vocabulary {
        calls.push(quote! { .with_vocabulary(#vocabulary) });
    }
    match &attrs.weight {
        Some(Weight::Int(weight)) => calls.push(quote! { .with_weight(#weight) }),
        Some(Weight::Tag(weight)) => calls.push(quote! { .with_weight_tag(#weight) }),
        None => {}
    }
    if attrs.required {
        calls.push(quote! { .with_required(true) });
    }
    if let Some(validate) = &attrs.validate {
        calls.push(quote! { .with_validate(#validate) });
    }
    match &attrs.widget {
        Some(WidgetAttr::Spec(spec)) => calls.push(quote! { .with_widget_spec(#spec) }),
        Some(WidgetAttr::Settings(settings)) => {
            let settings = widget_settings(schema_crate, settings);
            calls.push(quote! { .with_widget(#settings) });
        }
        None => {}
    }

    quote! { #schema_crate::FieldTags::new() #(#calls)* }
}

/// True when the attributes add nothing to the inherited tags.
pub fn is_untagged(attrs: &FieldAttrs) -> bool {
    attrs.label.is_none()
        && attrs.vocabulary.is_none()
        && attrs.weight.is_none()
        && !attrs.required
        && attrs.validate.is_none()
        && attrs.widget.is_none()
}

fn widget_settings(schema_crate: &TokenStream, attr: &WidgetSettingsAttr) -> TokenStream {
    let string = quote! { ::std::string::String::from };
    let mut assignments = Vec::new();

    let text_settings = [
        ("name", &attr.name),
        ("url_prefix", &attr.url_prefix),
        ("storage", &attr.storage),
        ("vocabulary", &attr.vocabulary),
    ];
    for (field, value) in text_settings {
        if let Some(value) = value {
            let field = syn::Ident::new(field, proc_macro2::Span::call_site());
            assignments.push(quote! { settings.#field = #string(#value); });
        }
    }
    if attr.images {
        assignments.push(quote! { settings.images = true; });
    }
    if let Some(cols) = attr.cols {
        assignments.push(quote! { settings.cols = #cols; });
    }
    for (key, value) in &attr.options.0 {
        assignments.push(quote! { settings.options.insert(#string(#key), #string(#value)); });
    }

    if assignments.is_empty() {
        return quote! { #schema_crate::WidgetSettings::default() };
    }
    quote! {
        {
            let mut settings = #schema_crate::WidgetSettings::default();
            #(#assignments)*
            settings
        }
    }
}
