//! Attribute parsing for the Model derive macro.
//!
//! This module provides parsers for the `#[criteria(...)]` attributes on
//! structs and on their fields.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Case convention applied to field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `created_at` becomes `CreatedAt`.
    PascalCase,
    /// `created_at` becomes `createdAt`.
    CamelCase,
}

impl RenameRule {
    /// Parse a rule from a string literal.
    pub fn from_str(s: &str, span: Span) -> Result<Self> {
        match s {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            other => Err(Error::new(
                span,
                format!(
                    "unknown rename rule: '{}'. Expected one of: PascalCase, camelCase",
                    other
                ),
            )),
        }
    }

    /// Apply the rule to a snake_case field name.
    pub fn apply(self, field: &str) -> String {
        let mut result = String::with_capacity(field.len());
        let mut upper_next = self == RenameRule::PascalCase;

        for c in field.trim_start_matches("r#").chars() {
            if c == '_' {
                upper_next = !result.is_empty() || self == RenameRule::PascalCase;
            } else if upper_next {
                result.push(c.to_ascii_uppercase());
                upper_next = false;
            } else {
                result.push(c);
            }
        }

        result
    }
}

/// Struct-level attributes from `#[criteria(...)]`.
#[derive(Debug, Clone, Default)]
pub struct ContainerAttr {
    /// Case convention for member names.
    pub rename_all: Option<RenameRule>,
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename_all = Some(RenameRule::from_str(&s.value(), s.span())?);
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename_all must be a string literal",
                        ));
                    }
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown criteria attribute. Expected: rename_all = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Field-level attributes from `#[criteria(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    /// Leave this field out of the schema.
    pub skip: bool,
    /// Custom member name (default: field name after `rename_all`).
    pub rename: Option<String>,
    /// The field holds a nested `Model` (or `Option` of one).
    pub nested: bool,
    /// The field holds a sequence of `Model`s.
    pub collection: bool,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            skip: false,
            rename: None,
            nested: false,
            collection: false,
            span: Span::call_site(),
        }
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr {
            span: input.span(),
            ..FieldAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if p.is_ident("nested") {
                        attr.nested = true;
                    } else if p.is_ident("collection") {
                        attr.collection = true;
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected one of: skip, nested, collection",
                        ));
                    }
                }

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown criteria attribute. Expected: skip, nested, collection, or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.nested && attr.collection {
            return Err(Error::new(
                attr.span,
                "a field cannot be both nested and a collection",
            ));
        }

        Ok(attr)
    }
}

/// Extract the `#[criteria(...)]` attribute of a struct.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("criteria") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}

/// Extract the `#[criteria(...)]` attribute of a field.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("criteria") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
