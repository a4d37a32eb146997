//! Derive macros for `dynval`.
//!
//! - Structs with named fields become records keyed by field name.
//! - Single-field tuple structs are transparent; wider tuple structs become arrays.
//! - Unit structs become `null`.
//! - Enums without data become the variant name as a string.
//!
//! Field attributes: `#[dynval(tag = "key,omitempty")]`, `#[dynval(rename = "key")]`,
//! `#[dynval(skip)]` and `#[dynval(omit_empty)]`. Variant attribute: `#[dynval(rename = "..")]`.

extern crate proc_macro;

mod attrs;
mod decode;
mod encode;
mod types;
mod util;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

use crate::attrs::ensure_no_dynval_attrs;

#[proc_macro_derive(DynEncode, attributes(dynval))]
pub fn derive_dyn_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let out = ensure_no_dynval_attrs(&input.attrs, "the container").and_then(|()| match &input.data {
        Data::Struct(data) => encode::encode_struct(&input.ident, &input.generics, data),
        Data::Enum(data) => encode::encode_enum(&input.ident, &input.generics, data),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span,
            "DynEncode not supported for unions",
        )),
    });
    TokenStream::from(out.unwrap_or_else(syn::Error::into_compile_error))
}

#[proc_macro_derive(DynDecode, attributes(dynval))]
pub fn derive_dyn_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let out = ensure_no_dynval_attrs(&input.attrs, "the container").and_then(|()| match &input.data {
        Data::Struct(data) => decode::decode_struct(&input.ident, &input.generics, data),
        Data::Enum(data) => decode::decode_enum(&input.ident, &input.generics, data),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span,
            "DynDecode not supported for unions",
        )),
    });
    TokenStream::from(out.unwrap_or_else(syn::Error::into_compile_error))
}
