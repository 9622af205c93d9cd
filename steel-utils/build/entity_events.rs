use heck::ToUpperCamelCase;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct EntityEventJson {
    name: String,
    value: i8,
}

pub(crate) fn build() -> TokenStream {
    println!("cargo:rerun-if-changed=build_assets/entity_events.json");

    let file = fs::read_to_string("build_assets/entity_events.json")
        .expect("Failed to read entity_events.json");

    let events: Vec<EntityEventJson> =
        serde_json::from_str(&file).expect("Failed to parse entity_events.json");

    let mut variants = TokenStream::new();

    for event in events {
        let variant_name = Ident::new(&event.name.to_upper_camel_case(), Span::call_site());
        let value = Literal::i8_unsuffixed(event.value);
        variants.extend(quote! {
            #variant_name = #value,
        });
    }

    quote! {
        /// Status type for the entity event broadcast.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i8)]
        pub enum EntityStatus {
            #variants
        }
    }
}
