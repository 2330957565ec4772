//! Implementation of the `#[derive(Model)]` macro.
//!
//! This macro generates `Record` and `Model` implementations and member name
//! constants for type-safe criteria building.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result,
    Type,
};

use super::attrs::{parse_container_attrs, parse_field_attrs};

/// Main implementation of the Model derive macro.
pub fn model_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.to_string();

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Model cannot be derived for generic structs",
        ));
    }

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Model can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Model can only be derived for structs",
            ))
        }
    };

    let container = parse_container_attrs(&input.attrs)?;

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut members: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let member_name = match (attrs.rename, container.rename_all) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply(&field_name.to_string()),
            (None, None) => field_name.to_string().trim_start_matches("r#").to_string(),
        };

        let const_name = format_ident!("{}", to_screaming_snake_case(&member_name));
        field_constants.push(quote! {
            /// Member name constant for type-safe criteria.
            pub const #const_name: &'static str = #member_name;
        });

        let (inner, optional) = match option_inner(&field.ty) {
            Some(inner) => (inner, true),
            None => (&field.ty, false),
        };

        let (member, read) = if attrs.nested {
            let member = quote! {
                ::standout_criteria::Member::record::<#inner>(#member_name, #optional)
            };
            let read = if optional {
                quote! {
                    match &self.#field_name {
                        ::std::option::Option::Some(value) => ::standout_criteria::Field::Record(value),
                        ::std::option::Option::None => ::standout_criteria::Field::Null,
                    }
                }
            } else {
                quote! { ::standout_criteria::Field::Record(&self.#field_name) }
            };
            (member, read)
        } else if attrs.collection {
            let element = element_type(inner).ok_or_else(|| {
                Error::new(
                    field.ty.span(),
                    "collection fields must be a sequence type such as Vec<T>",
                )
            })?;
            let member = quote! {
                ::standout_criteria::Member::collection::<#element>(#member_name, #optional)
            };
            let records = quote! {
                ::standout_criteria::Field::Records(
                    values
                        .iter()
                        .map(|value| value as &dyn ::standout_criteria::Record)
                        .collect(),
                )
            };
            let read = if optional {
                quote! {
                    match &self.#field_name {
                        ::std::option::Option::Some(values) => #records,
                        ::std::option::Option::None => ::standout_criteria::Field::Null,
                    }
                }
            } else {
                quote! {
                    {
                        let values = &self.#field_name;
                        #records
                    }
                }
            };
            (member, read)
        } else {
            let ty = &field.ty;
            let member = quote! {
                ::standout_criteria::Member::scalar::<#ty>(#member_name)
            };
            let read = quote! {
                ::standout_criteria::FieldType::field(&self.#field_name)
            };
            (member, read)
        };

        members.push(member);
        field_matches.push(quote! {
            #member_name => ::std::option::Option::Some(#read),
        });
    }

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*
        }

        impl ::standout_criteria::Record for #struct_name {
            fn field(&self, name: &str) -> ::std::option::Option<::standout_criteria::Field<'_>> {
                match name {
                    #(#field_matches)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::standout_criteria::Model for #struct_name {
            fn schema() -> &'static ::standout_criteria::Schema {
                static SCHEMA: ::standout_criteria::__private::Lazy<::standout_criteria::Schema> =
                    ::standout_criteria::__private::Lazy::new(|| {
                        ::standout_criteria::Schema::new(
                            #type_name,
                            ::std::vec![#(#members),*],
                        )
                    });
                &SCHEMA
            }
        }
    };

    Ok(expanded)
}

/// Returns `T` for a type written as `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    single_type_argument(&segment.arguments)
}

/// Returns the element type of a sequence such as `Vec<T>`, `[T; N]` or
/// `Box<[T]>`.
fn element_type(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Array(array) => Some(&array.elem),
        Type::Slice(slice) => Some(&slice.elem),
        Type::Reference(reference) => element_type(&reference.elem),
        Type::Path(path) => {
            let segment = path.path.segments.last()?;
            let argument = single_type_argument(&segment.arguments)?;
            match argument {
                Type::Slice(slice) => Some(&slice.elem),
                other => Some(other),
            }
        }
        _ => None,
    }
}

fn single_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    let first = types.next()?;
    types.next().is_none().then_some(first)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
pub(crate) fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("Name"), "NAME");
        assert_eq!(to_screaming_snake_case("created_at"), "CREATED_AT");
        assert_eq!(to_screaming_snake_case("CreatedAt"), "CREATED_AT");
        assert_eq!(to_screaming_snake_case("zipCode"), "ZIP_CODE");
        assert_eq!(to_screaming_snake_case("my-field"), "MY_FIELD");
    }

    fn render(ty: Option<&Type>) -> Option<String> {
        ty.map(|ty| quote!(#ty).to_string())
    }

    #[test]
    fn test_option_inner() {
        let ty: Type = syn::parse_quote!(Option<Address>);
        assert_eq!(render(option_inner(&ty)), Some("Address".to_string()));

        let ty: Type = syn::parse_quote!(std::option::Option<String>);
        assert_eq!(render(option_inner(&ty)), Some("String".to_string()));

        let ty: Type = syn::parse_quote!(Vec<Address>);
        assert_eq!(render(option_inner(&ty)), None);
    }

    #[test]
    fn test_element_type() {
        let types: [Type; 4] = [
            syn::parse_quote!(Vec<Order>),
            syn::parse_quote!(std::collections::VecDeque<Order>),
            syn::parse_quote!([Order; 3]),
            syn::parse_quote!(Box<[Order]>),
        ];
        for ty in &types {
            assert_eq!(render(element_type(ty)), Some("Order".to_string()));
        }

        let ty: Type = syn::parse_quote!(HashMap<u32, Order>);
        assert_eq!(render(element_type(&ty)), None);
    }

    #[test]
    fn test_rejects_generic_structs() {
        let input: DeriveInput = syn::parse_quote! {
            struct Wrapper<T> { value: T }
        };
        let err = model_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("generic"));
    }

    #[test]
    fn test_rejects_tuple_structs() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair(u32, u32);
        };
        assert!(model_derive_impl(input).is_err());
    }

    #[test]
    fn test_generates_renamed_constants() {
        let input: DeriveInput = syn::parse_quote! {
            #[criteria(rename_all = "PascalCase")]
            struct Customer {
                created_at: u32,
                #[criteria(rename = "Label")]
                name: String,
                #[criteria(skip)]
                secret: String,
            }
        };
        let output = model_derive_impl(input).unwrap().to_string();
        assert!(output.contains("CREATED_AT"));
        assert!(output.contains("\"CreatedAt\""));
        assert!(output.contains("LABEL"));
        assert!(!output.contains("SECRET"));
    }
}
