use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam, Ident, WherePredicate, parse_quote};

use crate::config::MacroConfig;

pub struct MacroContext {
    pub config: MacroConfig,
    pub input: DeriveInput,
}

impl MacroContext {
    pub fn new(config: MacroConfig, input: DeriveInput) -> Self {
        Self { config, input }
    }

    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    /// Path of the runtime crate
    pub fn schema_crate(&self) -> &TokenStream {
        &self.config.schema_crate
    }

    /// Applies the container rename rule to a declared field name.
    pub fn apply_rename(&self, name: &str) -> String {
        match self.config.rename_all {
            Some(rename_all) => rename_all.apply(name),
            None => name.to_string(),
        }
    }

    /// Every type parameter must itself describe a schema.
    fn where_predicates(&self) -> Vec<WherePredicate> {
        let schema_crate = self.schema_crate();
        let mut predicates: Vec<WherePredicate> = self
            .input
            .generics
            .where_clause
            .as_ref()
            .map(|clause| clause.predicates.iter().cloned().collect())
            .unwrap_or_default();
        for param in &self.input.generics.params {
            if let GenericParam::Type(type_param) = param {
                let ident = &type_param.ident;
                predicates.push(parse_quote!(#ident: #schema_crate::BuildSchema));
            }
        }
        predicates
    }

    /// Generates the BuildSchema impl block around `build_body`, which can
    /// use `self` and the inherited `tags`.
    pub fn impl_build_schema(&self, build_body: TokenStream) -> TokenStream {
        let ident = self.ident();
        let schema_crate = self.schema_crate();
        let (impl_generics, ty_generics, _) = self.input.generics.split_for_impl();
        let predicates = self.where_predicates();
        let where_clause = if predicates.is_empty() {
            quote! {}
        } else {
            quote! { where #(#predicates),* }
        };

        quote! {
            #[automatically_derived]
            impl #impl_generics #schema_crate::BuildSchema for #ident #ty_generics #where_clause {
                fn build_schema(
                    &self,
                    tags: &#schema_crate::FieldTags,
                ) -> ::core::option::Option<#schema_crate::Schema> {
                    #build_body
                }
            }
        }
    }
}
