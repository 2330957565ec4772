//! Criteria - Dynamic filter predicates for Rust struct collections.
//!
//! Criteria lets callers describe filters as data (a property path, an
//! operator and a value) and compiles them into predicates over in-memory
//! collections of structs. It supports:
//!
//! - Typed criteria, validated against the value type when constructed
//! - Dotted paths into nested records and `Base[Inner]` paths over collections
//! - Text, ordering, membership, flag-enum and spatial operators
//! - Left-to-right AND/OR chaining within a criteria set
//! - Sorting with a tie-breaker, and page-based pagination
//!
//! # Quick Start
//!
//! ```rust
//! use standout_criteria::{CriteriaBuilder, CriteriaExpression, Model};
//!
//! #[derive(Model)]
//! #[criteria(rename_all = "PascalCase")]
//! struct Customer {
//!     id: u32,
//!     name: Option<String>,
//!     age: u8,
//! }
//!
//! let customers = vec![
//!     Customer { id: 1, name: Some("John".into()), age: 41 },
//!     Customer { id: 2, name: Some("Joanna".into()), age: 17 },
//!     Customer { id: 3, name: None, age: 35 },
//! ];
//!
//! let expression = CriteriaExpression::new()
//!     .starts_with(Customer::NAME, "Jo")?
//!     .greater_than_or_equal(Customer::AGE, 18u8)?;
//!
//! let predicate = CriteriaBuilder::new().build::<Customer>(&expression)?;
//! assert_eq!(
//!     predicate.to_string(),
//!     r#"(((x.Name != null) && x.Name.starts_with("Jo")) && (x.Age >= 18))"#
//! );
//!
//! let adults = predicate.filter(&customers);
//! assert_eq!(adults.len(), 1);
//! assert_eq!(adults[0].id, 1);
//! # Ok::<(), standout_criteria::CriteriaError>(())
//! ```
//!
//! # Chaining Semantics
//!
//! Criteria in a set are folded from left to right. The connector stored on
//! a criterion joins everything before it to the criterion that follows:
//!
//! ```text
//! a OR b AND c  ==  (a OR b) AND c
//! ```
//!
//! Several sets passed to [`CriteriaBuilder::build_all`] are combined with
//! AND; empty sets are ignored and no criteria at all matches everything.
//!
//! # Value Types and Operators
//!
//! | Type | Operators |
//! |------|-----------|
//! | Text, char | `Equal`, `NotEqual`, `StartsWith`, `EndsWith`, `IsEmpty`, `IsNotEmpty`, `IsNullOrWhiteSpace`, `IsNotNullOrWhiteSpace`, `In`, `NotIn`, `Contains`, `NotContains` |
//! | Number, date, time, duration | `Equal`, `NotEqual`, `GreaterThan`, `GreaterThanOrEqual`, `LessThan`, `LessThanOrEqual`, `Between` |
//! | Bool, Uuid | `Equal`, `NotEqual` |
//! | Enum | `Equal`, `NotEqual`, `In`, `NotIn`, `Contains`, `NotContains` |
//! | Arrays | `In`, `NotIn`, `Contains`, `NotContains` |
//! | Geometry | `Covers`, `Crosses`, `Touches`, `Overlaps`, `CoveredBy`, `Disjoint`, `Intersects`, `Within`, `IsWithinDistance` |
//!
//! `Option<T>` values additionally accept `IsNull` and `IsNotNull`.

mod builder;
mod criteria;
mod error;
mod expr;
mod expression;
mod kind;
mod op;
mod ordering;
mod pagination;
mod query;
mod schema;
mod spatial;
mod traits;
mod value;

// Re-export public API
pub use builder::{BuilderOptions, CriteriaBuilder, Predicate};
pub use criteria::Criteria;
pub use error::{CriteriaError, Result};
pub use expr::{CompareOp, Expr, Method, Operand};
pub use expression::CriteriaExpression;
pub use kind::{ValueKind, ValueType};
pub use op::{LogicalType, OperationType};
pub use ordering::{compare_fields, Direction, Ordering};
pub use pagination::Pagination;
pub use query::{Query, QueryCriteria};
pub use schema::{Member, MemberPath, MemberType, ResolvedMember, Schema, SchemaFn};
pub use spatial::SpatialOp;
pub use traits::{CriteriaEnum, CriteriaValue, FieldType, Model, Record};
pub use value::{Field, Number, Value};

pub use standout_criteria_macros::{CriteriaEnum, Model};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
