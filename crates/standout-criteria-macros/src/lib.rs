//! Derive macros for standout-criteria.
//!
//! This crate provides:
//!
//! ## Derive Macros
//!
//! - [`Model`] - Generate member metadata and field readers for criteria compilation
//! - [`CriteriaEnum`] - Expose an enum or flag newtype as an integer criteria value
//!
//! The generated code refers to items of the `standout-criteria` crate, which
//! re-exports both derives; depend on that crate rather than on this one.

mod enums;
mod model;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `Record` and `Model` for a struct with named fields.
///
/// Every field becomes a member of the type's schema. Scalar fields need a
/// `FieldType` implementation, which exists for strings, numbers, booleans,
/// chrono and uuid types, `geo-types` geometries, `Option` of those, and
/// enums deriving [`CriteriaEnum`].
///
/// # Container Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `rename_all = "PascalCase"` | Member names in PascalCase (`created_at` → `CreatedAt`) |
/// | `rename_all = "camelCase"` | Member names in camelCase (`created_at` → `createdAt`) |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `nested` | Field is a `Model` (or `Option` of one), reachable with dotted paths |
/// | `collection` | Field is a sequence of `Model`s, reachable with `Base[Inner]` paths |
/// | `skip` | Exclude this field from criteria |
/// | `rename = "..."` | Use a custom member name |
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Member name constants (e.g., `Customer::NAME`, `Customer::CREATED_AT`)
/// 2. Implementation of `Record::field()`
/// 3. Implementation of `Model::schema()`, built once on first use
///
/// # Example
///
/// ```ignore
/// use standout_criteria::{CriteriaBuilder, CriteriaExpression, Model};
///
/// #[derive(Model)]
/// #[criteria(rename_all = "PascalCase")]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Model)]
/// #[criteria(rename_all = "PascalCase")]
/// struct Customer {
///     name: Option<String>,
///
///     #[criteria(nested)]
///     address: Option<Address>,
///
///     #[criteria(skip)]
///     password_hash: String,
/// }
///
/// let expression = CriteriaExpression::new().equal("Address.City", "Lisbon")?;
/// let predicate = CriteriaBuilder::new().build::<Customer>(&expression)?;
/// ```
///
/// # Collections
///
/// ```ignore
/// #[derive(Model)]
/// struct Order {
///     #[criteria(collection)]
///     lines: Vec<Line>,
/// }
///
/// // Matches orders with at least one line whose sku starts with "A-".
/// let expression = CriteriaExpression::new().starts_with("lines[sku]", "A-")?;
/// ```
#[proc_macro_derive(Model, attributes(criteria))]
pub fn model_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    model::model_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `CriteriaEnum`, `FieldType` and `CriteriaValue`.
///
/// Fieldless enums are compared by discriminant. A tuple struct with a single
/// integer field is compared by that integer; using it with `In` or
/// `Contains` tests flag membership.
///
/// # Example
///
/// ```ignore
/// use standout_criteria::CriteriaEnum;
///
/// #[derive(Clone, Copy, CriteriaEnum)]
/// enum Status {
///     Pending,
///     Active,
///     Done,
/// }
///
/// #[derive(Clone, Copy, CriteriaEnum)]
/// struct Permissions(u8);
/// ```
#[proc_macro_derive(CriteriaEnum)]
pub fn criteria_enum_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    enums::criteria_enum_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
