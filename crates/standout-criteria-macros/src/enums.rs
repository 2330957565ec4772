//! Implementation of the `#[derive(CriteriaEnum)]` macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

/// Main implementation of the CriteriaEnum derive macro.
///
/// Fieldless enums map each variant to its discriminant. Single-field tuple
/// structs map to their inner integer, which suits bit-flag newtypes.
pub fn criteria_enum_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "CriteriaEnum cannot be derived for generic types",
        ));
    }

    let bits = match &input.data {
        Data::Enum(data) => {
            if data.variants.is_empty() {
                return Err(Error::new(
                    input.span(),
                    "CriteriaEnum cannot be derived for enums without variants",
                ));
            }

            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(Error::new(
                        variant.span(),
                        "CriteriaEnum variants cannot carry data",
                    ));
                }
                let ident = &variant.ident;
                arms.push(quote! { Self::#ident => Self::#ident as u64, });
            }

            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                quote! { self.0 as u64 }
            }
            _ => {
                return Err(Error::new(
                    input.span(),
                    "CriteriaEnum can only be derived for structs with a single unnamed field",
                ))
            }
        },
        Data::Union(_) => {
            return Err(Error::new(
                input.span(),
                "CriteriaEnum can only be derived for enums and newtype structs",
            ))
        }
    };

    Ok(quote! {
        impl ::standout_criteria::CriteriaEnum for #name {
            fn bits(&self) -> u64 {
                #bits
            }
        }

        ::standout_criteria::impl_criteria_enum!(#name);
    })
}
