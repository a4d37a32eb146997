use quote::quote;
use syn::{DataEnum, DataStruct, Fields, Generics, Ident};

use crate::attrs::ensure_no_dynval_attrs;
use crate::util::{record_fields, unit_variants, where_with_bounds};

pub(crate) fn encode_struct(
    name: &Ident,
    generics: &Generics,
    data: &DataStruct,
) -> syn::Result<proc_macro2::TokenStream> {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let bound = quote!(::dynval::DynEncode);

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
                    quote! { #index => ::dynval::DynEncode::encode(&self.#ident), }
                });
            let wc = where_with_bounds(
                name,
                generics,
                fields.iter().filter(|f| !f.excluded).map(|f| f.ty),
                &bound,
            );

            Ok(quote! {
                impl #impl_generics ::dynval::RecordEncode for #name #ty_generics #wc {
                    const FIELDS: &'static [::dynval::Field] = &[#(#table),*];

                    fn encode_field<__H: ::dynval::HostValue>(&self, index: usize) -> __H {
                        match index {
                            #(#arms)*
                            _ => <__H as ::dynval::HostValue>::null(),
                        }
                    }
                }

                impl #impl_generics ::dynval::DynEncode for #name #ty_generics #wc {
                    fn encode<__H: ::dynval::HostValue>(&self) -> __H {
                        ::dynval::encode_record(self)
                    }
                }
            })
        }

        Fields::Unnamed(fields) => {
            for field in &fields.unnamed {
                ensure_no_dynval_attrs(&field.attrs, "tuple struct fields")?;
            }
            let wc = where_with_bounds(name, generics, fields.unnamed.iter().map(|f| &f.ty), &bound);

            // A single field is transparent.
            if fields.unnamed.len() == 1 {
                return Ok(quote! {
                    impl #impl_generics ::dynval::DynEncode for #name #ty_generics #wc {
                        fn encode<__H: ::dynval::HostValue>(&self) -> __H {
                            ::dynval::DynEncode::encode(&self.0)
                        }
                    }
                });
            }

            let len = fields.unnamed.len();
            let items = (0..len).map(|idx| {
                let index = syn::Index::from(idx);
                quote! {
                    ::dynval::HostValue::set_index(
                        &mut array,
                        #idx,
                        ::dynval::DynEncode::encode(&self.#index),
                    );
                }
            });

            Ok(quote! {
                impl #impl_generics ::dynval::DynEncode for #name #ty_generics #wc {
                    fn encode<__H: ::dynval::HostValue>(&self) -> __H {
                        let mut array = <__H as ::dynval::HostValue>::new_array(#len);
                        #(#items)*
                        array
                    }
                }
            })
        }

        Fields::Unit => Ok(quote! {
            impl #impl_generics ::dynval::DynEncode for #name #ty_generics #where_clause {
                fn encode<__H: ::dynval::HostValue>(&self) -> __H {
                    <__H as ::dynval::HostValue>::null()
                }
            }
        }),
    }
}

pub(crate) fn encode_enum(
    name: &Ident,
    generics: &Generics,
    data: &DataEnum,
) -> syn::Result<proc_macro2::TokenStream> {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let variants = unit_variants(data, "DynEncode")?;

    // An empty enum has no values to encode.
    if variants.is_empty() {
        return Ok(quote! {
            impl #impl_generics ::dynval::DynEncode for #name #ty_generics #where_clause {
                fn encode<__H: ::dynval::HostValue>(&self) -> __H {
                    match *self {}
                }
            }
        });
    }

    let arms = variants.iter().map(|(ident, vname)| quote! { Self::#ident => #vname, });

    Ok(quote! {
        impl #impl_generics ::dynval::DynEncode for #name #ty_generics #where_clause {
            fn encode<__H: ::dynval::HostValue>(&self) -> __H {
                let name: &'static str = match self {
                    #(#arms)*
                };
                <__H as ::dynval::HostValue>::from_string(
                    ::dynval::__dynval_macro::String::from(name),
                )
            }
        }
    })
}
