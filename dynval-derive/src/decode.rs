use quote::quote;
use syn::{DataEnum, DataStruct, Fields, Generics, Ident};

use crate::attrs::ensure_no_dynval_attrs;
use crate::util::{record_fields, unit_variants, where_with_bounds};

pub(crate) fn decode_struct(
    name: &Ident,
    generics: &Generics,
    data: &DataStruct,
) -> syn::Result<proc_macro2::TokenStream> {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let bound = quote!(::dynval::DynDecode);

    match &data.fields {
        Fields::Named(named) => {
            let fields = record_fields(named)?;
            let table = fields.iter().map(|f| &f.descriptor);
            let arms = fields
                .iter()
                .enumerate()
                .filter(|(_, f)| !f.excluded)
                .map(|(index, f)| {
                    let ident = f.ident;
                    quote! { #index => ::dynval::DynDecode::decode_from(&mut self.#ident, source), }
                });
            let wc = where_with_bounds(
                name,
                generics,
                fields.iter().filter(|f| !f.excluded).map(|f| f.ty),
                &bound,
            );

            Ok(quote! {
                impl #impl_generics ::dynval::RecordDecode for #name #ty_generics #wc {
                    const FIELDS: &'static [::dynval::Field] = &[#(#table),*];

                    #[allow(unused_variables)]
                    fn decode_field<__H: ::dynval::HostValue>(
                        &mut self,
                        index: usize,
                        source: &__H,
                    ) -> ::core::result::Result<(), ::dynval::DecodeError> {
                        match index {
                            #(#arms)*
                            _ => ::core::result::Result::Ok(()),
                        }
                    }
                }

                impl #impl_generics ::dynval::DynDecode for #name #ty_generics #wc {
                    fn decode_from<__H: ::dynval::HostValue>(
                        &mut self,
                        source: &__H,
                    ) -> ::core::result::Result<(), ::dynval::DecodeError> {
                        ::dynval::decode_record(self, source)
                    }
                }
            })
        }

        Fields::Unnamed(fields) => {
            for field in &fields.unnamed {
                ensure_no_dynval_attrs(&field.attrs, "tuple struct fields")?;
            }
            let wc = where_with_bounds(name, generics, fields.unnamed.iter().map(|f| &f.ty), &bound);

            if fields.unnamed.len() == 1 {
                return Ok(quote! {
                    impl #impl_generics ::dynval::DynDecode for #name #ty_generics #wc {
                        fn decode_from<__H: ::dynval::HostValue>(
                            &mut self,
                            source: &__H,
                        ) -> ::core::result::Result<(), ::dynval::DecodeError> {
                            ::dynval::DynDecode::decode_from(&mut self.0, source)
                        }
                    }
                });
            }

            let items = (0..fields.unnamed.len()).map(|idx| {
                let index = syn::Index::from(idx);
                quote! {
                    if let ::core::option::Option::Some(item) =
                        ::dynval::HostValue::index(source, #idx)
                    {
                        ::dynval::DynDecode::decode_from(&mut self.#index, item)?;
                    }
                }
            });

            Ok(quote! {
                impl #impl_generics ::dynval::DynDecode for #name #ty_generics #wc {
                    fn decode_from<__H: ::dynval::HostValue>(
                        &mut self,
                        source: &__H,
                    ) -> ::core::result::Result<(), ::dynval::DecodeError> {
                        if !::dynval::HostValue::is_array(source) {
                            return ::core::result::Result::Ok(());
                        }
                        #(#items)*
                        ::core::result::Result::Ok(())
                    }
                }
            })
        }

        Fields::Unit => Ok(quote! {
            impl #impl_generics ::dynval::DynDecode for #name #ty_generics #where_clause {
                fn decode_from<__H: ::dynval::HostValue>(
                    &mut self,
                    _source: &__H,
                ) -> ::core::result::Result<(), ::dynval::DecodeError> {
                    ::core::result::Result::Ok(())
                }
            }
        }),
    }
}

pub(crate) fn decode_enum(
    name: &Ident,
    generics: &Generics,
    data: &DataEnum,
) -> syn::Result<proc_macro2::TokenStream> {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let variants = unit_variants(data, "DynDecode")?;
    let arms = variants
        .iter()
        .map(|(ident, vname)| quote! { #vname => *self = Self::#ident, });

    // Unknown names and non-string sources leave the value unchanged.
    Ok(quote! {
        impl #impl_generics ::dynval::DynDecode for #name #ty_generics #where_clause {
            fn decode_from<__H: ::dynval::HostValue>(
                &mut self,
                source: &__H,
            ) -> ::core::result::Result<(), ::dynval::DecodeError> {
                if let ::core::option::Option::Some(name) = ::dynval::HostValue::as_str(source) {
                    #[allow(clippy::match_single_binding)]
                    match name {
                        #(#arms)*
                        _ => {}
                    }
                }
                ::core::result::Result::Ok(())
            }
        }
    })
}
