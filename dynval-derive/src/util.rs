use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    parse_quote, spanned::Spanned, DataEnum, Fields, FieldsNamed, Generics, Ident, LitStr, Type,
    WhereClause, WherePredicate,
};

use crate::attrs::{parse_dynval_field_attrs, parse_dynval_variant_attrs};
use crate::types::type_mentions_self;

pub(crate) fn add_where_bound(wc: &mut WhereClause, ty: &Type, bound: TokenStream) {
    let pred: WherePredicate = parse_quote!(#ty: #bound);
    wc.predicates.push(pred);
}

/// The derived type's where-clause extended with `bound` for every field type in `tys` that
/// does not mention the type itself.
pub(crate) fn where_with_bounds<'a>(
    name: &Ident,
    generics: &Generics,
    tys: impl IntoIterator<Item = &'a Type>,
    bound: &TokenStream,
) -> WhereClause {
    let mut wc = generics
        .where_clause
        .clone()
        .unwrap_or_else(|| WhereClause {
            where_token: Default::default(),
            predicates: Default::default(),
        });
    for ty in tys {
        if !type_mentions_self(ty, name) {
            add_where_bound(&mut wc, ty, bound.clone());
        }
    }
    wc
}

/// One named struct field as the record traits see it.
pub(crate) struct RecordField<'a> {
    pub(crate) ident: &'a Ident,
    pub(crate) ty: &'a Type,
    /// `::dynval::Field` constructor for the `FIELDS` table.
    pub(crate) descriptor: TokenStream,
    pub(crate) excluded: bool,
}

pub(crate) fn record_fields(fields: &FieldsNamed) -> syn::Result<Vec<RecordField<'_>>> {
    let mut out = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new(field.span(), "expected a named field"));
        };
        let attr = parse_dynval_field_attrs(&field.attrs)?;
        let declared = LitStr::new(&ident.unraw().to_string(), ident.span());
        let descriptor = match attr.tag_value() {
            Some(tag) => {
                let tag = LitStr::new(&tag, ident.span());
                quote!(::dynval::Field::tagged(#declared, #tag))
            }
            None => quote!(::dynval::Field::new(#declared)),
        };
        out.push(RecordField {
            ident,
            ty: &field.ty,
            descriptor,
            excluded: attr.is_excluded(),
        });
    }
    Ok(out)
}

/// Variant idents of a fieldless enum paired with their string form.
pub(crate) fn unit_variants<'a>(
    data: &'a DataEnum,
    derive: &str,
) -> syn::Result<Vec<(&'a Ident, LitStr)>> {
    let mut out = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                format!("{derive} only supports enums whose variants carry no data"),
            ));
        }
        let attr = parse_dynval_variant_attrs(&variant.attrs)?;
        let name = attr.rename.unwrap_or_else(|| {
            LitStr::new(&variant.ident.unraw().to_string(), variant.ident.span())
        });
        out.push((&variant.ident, name));
    }
    Ok(out)
}
