//! Compiles criteria expressions into predicates.
//!
//! [`CriteriaBuilder`] resolves each criterion's property path against the
//! [`Schema`] of the target type and emits an [`Expr`]. Criteria in a set are
//! combined by a left fold: the connector stored on criterion `i` joins the
//! accumulated expression to criterion `i + 1`, so `a OR b AND c` compiles to
//! `(a OR b) AND c`.
//!
//! # Example
//!
//! ```
//! use standout_criteria::{CriteriaBuilder, CriteriaExpression, Field, Member, Model, Record, Schema};
//! use standout_criteria::__private::Lazy;
//!
//! struct Task {
//!     priority: u8,
//! }
//!
//! impl Record for Task {
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "Priority" => Some(Field::Number(self.priority.into())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Model for Task {
//!     fn schema() -> &'static Schema {
//!         static SCHEMA: Lazy<Schema> =
//!             Lazy::new(|| Schema::new("Task", vec![Member::scalar::<u8>("Priority")]));
//!         &SCHEMA
//!     }
//! }
//!
//! let expression = CriteriaExpression::new().greater_than("Priority", 3u8)?;
//! let predicate = CriteriaBuilder::new().build::<Task>(&expression)?;
//!
//! assert_eq!(predicate.to_string(), "(x.Priority > 3)");
//! assert!(predicate.matches(&Task { priority: 5 }));
//! # Ok::<(), standout_criteria::CriteriaError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::criteria::Criteria;
use crate::error::{CriteriaError, Result};
use crate::expr::{CompareOp, Expr, Method, Operand};
use crate::expression::CriteriaExpression;
use crate::kind::ValueKind;
use crate::op::{LogicalType, OperationType};
use crate::schema::{MemberType, ResolvedMember, Schema};
use crate::spatial::SpatialOp;
use crate::traits::Model;
use crate::value::Value;

/// Parameter name of the root record in compiled expressions.
const ROOT_PARAM: &str = "x";

/// Parameter name of collection elements inside `any`.
const ELEMENT_PARAM: &str = "i";

/// Options controlling how criteria are compiled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Compare text case-insensitively and ignoring surrounding whitespace.
    ///
    /// Applies to `Equal`, `NotEqual`, `StartsWith`, `EndsWith` and to text
    /// `Contains`/`NotContains`.
    pub normalize_text: bool,
}

/// Compiles [`CriteriaExpression`]s into [`Predicate`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriteriaBuilder {
    options: BuilderOptions,
}

impl CriteriaBuilder {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        CriteriaBuilder::default()
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        CriteriaBuilder { options }
    }

    pub fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Compiles one criteria set into a predicate over `T`.
    ///
    /// An empty set compiles to a predicate that accepts everything.
    pub fn build<T: Model>(&self, expression: &CriteriaExpression) -> Result<Predicate<T>> {
        self.build_all(std::iter::once(expression))
    }

    /// Compiles several criteria sets and combines them with AND.
    ///
    /// Empty sets contribute nothing. With no non-empty sets the predicate
    /// accepts everything.
    pub fn build_all<'e, T, I>(&self, expressions: I) -> Result<Predicate<T>>
    where
        T: Model,
        I: IntoIterator<Item = &'e CriteriaExpression>,
    {
        let schema = T::schema();
        let mut combined: Option<Expr> = None;

        for expression in expressions {
            if let Some(expr) = self.compile(schema, expression)? {
                combined = Some(match combined {
                    Some(previous) => Expr::and(previous, expr),
                    None => expr,
                });
            }
        }

        Ok(Predicate::new(combined.unwrap_or(Expr::Constant(true))))
    }

    /// Compiles a criteria set against `schema`.
    ///
    /// Returns `None` for an empty set.
    pub fn compile(&self, schema: &'static Schema, expression: &CriteriaExpression) -> Result<Option<Expr>> {
        debug!(
            target_type = schema.name(),
            criteria = expression.criteria().len(),
            "compiling criteria set"
        );

        let mut combined: Option<Expr> = None;
        let mut connector = LogicalType::And;

        for criteria in expression.criteria() {
            let expr = self.compile_criteria(schema, criteria).inspect_err(|error| {
                debug!(
                    target_type = schema.name(),
                    property = criteria.property(),
                    %error,
                    "criteria compilation failed"
                );
            })?;

            trace!(
                property = criteria.property(),
                operation = %criteria.operation_type(),
                connector = %connector,
                "compiled criterion"
            );

            combined = Some(match combined {
                None => expr,
                Some(previous) => match connector {
                    LogicalType::And => Expr::and(previous, expr),
                    LogicalType::Or => Expr::or(previous, expr),
                },
            });
            connector = criteria.logical_type();
        }

        Ok(combined)
    }

    // ========================================================================
    // Path handling
    // ========================================================================

    fn compile_criteria(&self, schema: &'static Schema, criteria: &Criteria) -> Result<Expr> {
        let property = criteria.property().trim();

        match split_collection_path(property)? {
            None => {
                let segments = split_segments(property, property)?;
                self.compile_member(schema, &segments, ROOT_PARAM, criteria)
            }
            Some((base, inner)) => {
                let base_segments = split_segments(base, property)?;
                let inner_segments = split_segments(inner, property)?;

                let collection = schema.resolve(&base_segments, ROOT_PARAM)?;
                let MemberType::Collection(element) = collection.ty else {
                    return Err(CriteriaError::NotACollection {
                        path: property.to_string(),
                        member: terminal_name(&collection),
                        type_name: collection.owner,
                    });
                };

                let predicate =
                    self.compile_member(element(), &inner_segments, ELEMENT_PARAM, criteria)?;
                Ok(Expr::Any {
                    collection: collection.path,
                    predicate: Box::new(predicate),
                })
            }
        }
    }

    fn compile_member(
        &self,
        schema: &'static Schema,
        segments: &[&str],
        param: &'static str,
        criteria: &Criteria,
    ) -> Result<Expr> {
        let resolved = schema.resolve(segments, param)?;
        let member = Operand::member(resolved.path.clone());
        let operation = criteria.operation_type();

        match operation {
            OperationType::IsNull => return Ok(is_null(member)),
            OperationType::IsNotNull => return Ok(not_null(member)),
            _ => {}
        }

        match resolved.ty {
            MemberType::Scalar(ValueKind::Enum) => compile_enum(member, criteria),
            MemberType::Scalar(ValueKind::Spatial) => compile_spatial(member, criteria),
            MemberType::Scalar(kind) => self.compile_scalar(member, kind, resolved.nullable, criteria),
            MemberType::Record(_) | MemberType::Collection(_) => Err(CriteriaError::UnsupportedOperation {
                operation,
                type_name: resolved.ty.describe(),
            }),
        }
    }

    // ========================================================================
    // Scalar members
    // ========================================================================

    fn compile_scalar(
        &self,
        member: Operand,
        kind: ValueKind,
        nullable: bool,
        criteria: &Criteria,
    ) -> Result<Expr> {
        let operation = criteria.operation_type();
        if !kind.accepts(criteria.operand_kind()) {
            return Err(unsupported(criteria));
        }

        let value = coerce(criteria.value(), kind);
        let normalize = self.options.normalize_text && kind == ValueKind::Text;

        let expr = match operation {
            OperationType::Equal | OperationType::NotEqual => {
                let negated = operation == OperationType::NotEqual;
                if value.is_null() {
                    return Ok(if negated { not_null(member) } else { is_null(member) });
                }

                let (target, value) = normalized(member.clone(), value, normalize);
                if negated {
                    let compare = Expr::compare(CompareOp::Ne, target, value);
                    if nullable {
                        Expr::or(is_null(member), compare)
                    } else {
                        compare
                    }
                } else {
                    guard_if(nullable, &member, Expr::compare(CompareOp::Eq, target, value))
                }
            }

            OperationType::StartsWith | OperationType::EndsWith => {
                if kind != ValueKind::Text || value.as_str().is_none() {
                    return Err(unsupported(criteria));
                }
                let method = if operation == OperationType::StartsWith {
                    Method::StartsWith
                } else {
                    Method::EndsWith
                };
                let (target, value) = normalized(member.clone(), value, normalize);
                Expr::and(not_null(member), Expr::call(method, target, value))
            }

            OperationType::GreaterThan
            | OperationType::GreaterThanOrEqual
            | OperationType::LessThan
            | OperationType::LessThanOrEqual => {
                if !kind.is_ordered() {
                    return Err(unsupported(criteria));
                }
                let op = match operation {
                    OperationType::GreaterThan => CompareOp::Gt,
                    OperationType::GreaterThanOrEqual => CompareOp::Ge,
                    OperationType::LessThan => CompareOp::Lt,
                    _ => CompareOp::Le,
                };
                let compare = Expr::compare(op, member.clone(), Operand::constant(value));
                guard_if(nullable, &member, compare)
            }

            OperationType::Between => {
                if !kind.is_ordered() {
                    return Err(unsupported(criteria));
                }
                let high = coerce(criteria.value2(), kind);
                if !high.kind().is_some_and(|high| kind.accepts(high)) {
                    return Err(unsupported(criteria));
                }
                let range = Expr::and(
                    Expr::compare(CompareOp::Ge, member.clone(), Operand::constant(value)),
                    Expr::compare(CompareOp::Le, member.clone(), Operand::constant(high)),
                );
                guard_if(nullable, &member, range)
            }

            OperationType::IsEmpty | OperationType::IsNotEmpty => {
                if kind != ValueKind::Text {
                    return Err(unsupported(criteria));
                }
                let op = if operation == OperationType::IsEmpty {
                    CompareOp::Eq
                } else {
                    CompareOp::Ne
                };
                Expr::compare(op, member, empty_text())
            }

            OperationType::IsNullOrWhiteSpace => {
                if kind != ValueKind::Text {
                    return Err(unsupported(criteria));
                }
                Expr::or(
                    is_null(member.clone()),
                    Expr::compare(CompareOp::Eq, member.trim(), empty_text()),
                )
            }

            OperationType::IsNotNullOrWhiteSpace => {
                if kind != ValueKind::Text {
                    return Err(unsupported(criteria));
                }
                Expr::and(
                    not_null(member.clone()),
                    Expr::compare(CompareOp::Ne, member.trim(), empty_text()),
                )
            }

            OperationType::In
            | OperationType::NotIn
            | OperationType::Contains
            | OperationType::NotContains => {
                let negated = operation.is_negated_membership();
                match value {
                    Value::List(items) => {
                        let contains = Expr::ListContains { items, item: member };
                        if negated {
                            Expr::not(contains)
                        } else {
                            contains
                        }
                    }
                    Value::String(_) if kind == ValueKind::Text => {
                        // A null member contains nothing and is excluded by
                        // the negated form too.
                        let (target, value) = normalized(member.clone(), value, normalize);
                        let contains = Expr::call(Method::Contains, target, value);
                        if negated {
                            guard_if(nullable, &member, Expr::not(contains))
                        } else {
                            contains
                        }
                    }
                    _ => return Err(unsupported(criteria)),
                }
            }

            _ => return Err(unsupported(criteria)),
        };

        Ok(expr)
    }
}

// ============================================================================
// Enum and spatial members
// ============================================================================

fn compile_enum(member: Operand, criteria: &Criteria) -> Result<Expr> {
    let operation = criteria.operation_type();
    if criteria.operand_kind() != ValueKind::Enum {
        return Err(unsupported(criteria));
    }

    match operation {
        OperationType::Equal | OperationType::NotEqual => {
            let op = if operation == OperationType::Equal {
                CompareOp::Eq
            } else {
                CompareOp::Ne
            };
            Ok(Expr::compare(
                op,
                member.bits(),
                Operand::constant(criteria.value().clone()).bits(),
            ))
        }
        OperationType::In
        | OperationType::NotIn
        | OperationType::Contains
        | OperationType::NotContains => {
            let contains = match criteria.value() {
                Value::List(items) => Expr::ListContains {
                    items: items.clone(),
                    item: member,
                },
                value => {
                    let flags = Operand::constant(value.clone()).bits();
                    Expr::compare(CompareOp::Eq, member.bits().bit_or(flags.clone()), flags)
                }
            };
            if operation.is_negated_membership() {
                Ok(Expr::not(contains))
            } else {
                Ok(contains)
            }
        }
        _ => Err(unsupported(criteria)),
    }
}

fn compile_spatial(member: Operand, criteria: &Criteria) -> Result<Expr> {
    let Some(op) = SpatialOp::from_operation(criteria.operation_type()) else {
        return Err(unsupported(criteria));
    };
    let Value::Geometry(geometry) = criteria.value() else {
        return Err(unsupported(criteria));
    };

    let distance = match op {
        SpatialOp::IsWithinDistance => criteria.value2().as_number().map(|n| n.to_f64()),
        _ => None,
    };

    Ok(Expr::and(
        not_null(member.clone()),
        Expr::Spatial {
            op,
            target: member,
            geometry: geometry.clone(),
            distance,
        },
    ))
}

// ============================================================================
// Helpers
// ============================================================================

fn unsupported(criteria: &Criteria) -> CriteriaError {
    CriteriaError::UnsupportedOperation {
        operation: criteria.operation_type(),
        type_name: criteria.value_type().name.to_string(),
    }
}

fn is_null(member: Operand) -> Expr {
    Expr::compare(CompareOp::Eq, member, Operand::null())
}

fn not_null(member: Operand) -> Expr {
    Expr::compare(CompareOp::Ne, member, Operand::null())
}

fn empty_text() -> Operand {
    Operand::constant(Value::String(String::new()))
}

/// `(member != null) && expr` when the member can be null.
///
/// Only `Option` members are nullable. A plain `String` member cannot hold
/// null, so it is never guarded.
fn guard_if(nullable: bool, member: &Operand, expr: Expr) -> Expr {
    if nullable {
        Expr::and(not_null(member.clone()), expr)
    } else {
        expr
    }
}

/// Pairs the member with the constant, both normalized when requested.
fn normalized(member: Operand, value: Value, normalize: bool) -> (Operand, Operand) {
    match value {
        Value::String(text) if normalize => (
            member.normalize(),
            Operand::constant(Value::String(text.trim().to_lowercase())),
        ),
        value => (member, Operand::constant(value)),
    }
}

/// Widens a character constant to a string when compared to text.
fn coerce(value: &Value, kind: ValueKind) -> Value {
    match value {
        Value::Char(c) if kind == ValueKind::Text => Value::String(c.to_string()),
        Value::List(items) => Value::List(items.iter().map(|item| coerce(item, kind)).collect()),
        other => other.clone(),
    }
}

fn terminal_name(resolved: &ResolvedMember) -> String {
    resolved
        .path
        .segments()
        .last()
        .map(|name| name.to_string())
        .unwrap_or_default()
}

/// Splits `Base[Inner]` into its two parts; `None` for plain paths.
fn split_collection_path(property: &str) -> Result<Option<(&str, &str)>> {
    let invalid = |reason| CriteriaError::InvalidPath {
        path: property.to_string(),
        reason,
    };

    let opens = property.matches('[').count();
    let closes = property.matches(']').count();
    match (opens, closes) {
        (0, 0) => return Ok(None),
        (1, 1) => {}
        _ if opens != closes => return Err(invalid("unbalanced brackets")),
        _ => return Err(invalid("only one bracketed segment is supported")),
    }

    let (Some(open), Some(close)) = (property.find('['), property.find(']')) else {
        return Err(invalid("unbalanced brackets"));
    };
    if close < open {
        return Err(invalid("unbalanced brackets"));
    }
    if close != property.len() - 1 {
        return Err(invalid("unexpected text after ']'"));
    }

    Ok(Some((&property[..open], &property[open + 1..close])))
}

fn split_segments<'p>(path: &'p str, property: &str) -> Result<Vec<&'p str>> {
    let segments: Vec<&str> = path.split('.').map(str::trim).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(CriteriaError::InvalidPath {
            path: property.to_string(),
            reason: "empty path segment",
        });
    }
    Ok(segments)
}

// ============================================================================
// Predicate
// ============================================================================

/// A compiled, reusable filter over `T`.
pub struct Predicate<T> {
    expr: Expr,
    _marker: PhantomData<fn(&T) -> bool>,
}

impl<T> Predicate<T> {
    fn new(expr: Expr) -> Self {
        Predicate {
            expr,
            _marker: PhantomData,
        }
    }

    /// The compiled expression tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }
}

impl<T: Model> Predicate<T> {
    /// Returns `true` if `item` satisfies the predicate.
    pub fn matches(&self, item: &T) -> bool {
        self.expr.eval(item)
    }

    /// Returns the matching items, in order.
    pub fn filter<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate::new(self.expr.clone())
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("expr", &self.expr).finish()
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Member;
    use crate::traits::{FieldType, Record};
    use crate::value::Field;
    use once_cell::sync::Lazy;

    struct Line {
        sku: String,
        quantity: u32,
    }

    impl Record for Line {
        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "Sku" => Some(self.sku.field()),
                "Quantity" => Some(self.quantity.field()),
                _ => None,
            }
        }
    }

    impl Model for Line {
        fn schema() -> &'static Schema {
            static SCHEMA: Lazy<Schema> = Lazy::new(|| {
                Schema::new(
                    "Line",
                    vec![
                        Member::scalar::<String>("Sku"),
                        Member::scalar::<u32>("Quantity"),
                    ],
                )
            });
            &SCHEMA
        }
    }

    struct Order {
        id: i64,
        note: Option<String>,
        lines: Vec<Line>,
    }

    impl Record for Order {
        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "Id" => Some(self.id.field()),
                "Note" => Some(self.note.field()),
                "Lines" => Some(Field::Records(
                    self.lines.iter().map(|line| line as &dyn Record).collect(),
                )),
                _ => None,
            }
        }
    }

    impl Model for Order {
        fn schema() -> &'static Schema {
            static SCHEMA: Lazy<Schema> = Lazy::new(|| {
                Schema::new(
                    "Order",
                    vec![
                        Member::scalar::<i64>("Id"),
                        Member::scalar::<Option<String>>("Note"),
                        Member::collection::<Line>("Lines", false),
                    ],
                )
            });
            &SCHEMA
        }
    }

    fn order(id: i64, note: Option<&str>) -> Order {
        Order {
            id,
            note: note.map(str::to_string),
            lines: vec![Line {
                sku: "A-1".into(),
                quantity: id as u32,
            }],
        }
    }

    fn compile(expression: &CriteriaExpression) -> Result<String> {
        CriteriaBuilder::new()
            .build::<Order>(expression)
            .map(|predicate| predicate.to_string())
    }

    #[test]
    fn empty_set_accepts_everything() {
        let predicate = CriteriaBuilder::new()
            .build::<Order>(&CriteriaExpression::new())
            .unwrap();
        assert_eq!(predicate.expr(), &Expr::Constant(true));
        assert!(predicate.matches(&order(1, None)));
    }

    #[test]
    fn nullable_equal_is_guarded() {
        let expression = CriteriaExpression::new().equal("Note", "rush").unwrap();
        assert_eq!(
            compile(&expression).unwrap(),
            r#"((x.Note != null) && (x.Note == "rush"))"#
        );
    }

    #[test]
    fn non_nullable_equal_is_plain() {
        let expression = CriteriaExpression::new().equal("Id", 1i64).unwrap();
        assert_eq!(compile(&expression).unwrap(), "(x.Id == 1)");
    }

    #[test]
    fn nullable_not_equal_accepts_null() {
        let expression = CriteriaExpression::new().not_equal("Note", "rush").unwrap();
        let predicate = CriteriaBuilder::new().build::<Order>(&expression).unwrap();
        assert_eq!(
            predicate.to_string(),
            r#"((x.Note == null) || (x.Note != "rush"))"#
        );
        assert!(predicate.matches(&order(1, None)));
        assert!(!predicate.matches(&order(1, Some("rush"))));
    }

    #[test]
    fn connector_applies_to_following_criterion() {
        let expression = CriteriaExpression::new()
            .equal("Id", 1i64)
            .unwrap()
            .or()
            .equal("Id", 2i64)
            .unwrap()
            .greater_than("Id", 0i64)
            .unwrap();
        assert_eq!(
            compile(&expression).unwrap(),
            "(((x.Id == 1) || (x.Id == 2)) && (x.Id > 0))"
        );
    }

    #[test]
    fn bracketed_path_compiles_to_any() {
        let expression = CriteriaExpression::new()
            .greater_than("Lines[Quantity]", 2u32)
            .unwrap();
        let predicate = CriteriaBuilder::new().build::<Order>(&expression).unwrap();
        assert_eq!(predicate.to_string(), "x.Lines.any(|i| (i.Quantity > 2))");
        assert!(predicate.matches(&order(3, None)));
        assert!(!predicate.matches(&order(1, None)));
    }

    #[test]
    fn bracket_on_scalar_is_not_a_collection() {
        let expression = CriteriaExpression::new().equal("Id[Value]", 1i64).unwrap();
        assert!(matches!(
            compile(&expression).unwrap_err(),
            CriteriaError::NotACollection { type_name: "Order", .. }
        ));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for path in ["Lines[Sku", "Lines]Sku[", "Lines[Sku]Extra", "Lines[]", "Id..Value", "A[B][C]"] {
            let expression = CriteriaExpression::new().equal(path, "x").unwrap();
            assert!(
                matches!(compile(&expression).unwrap_err(), CriteriaError::InvalidPath { .. }),
                "{path}"
            );
        }
    }

    #[test]
    fn type_mismatch_fails_at_compile_time() {
        let expression = CriteriaExpression::new().equal("Id", "text").unwrap();
        assert!(matches!(
            compile(&expression).unwrap_err(),
            CriteriaError::UnsupportedOperation {
                operation: OperationType::Equal,
                ..
            }
        ));
    }

    #[test]
    fn unknown_members_are_reported() {
        let expression = CriteriaExpression::new().equal("Missing", 1i64).unwrap();
        assert!(matches!(
            compile(&expression).unwrap_err(),
            CriteriaError::MemberNotFound { .. }
        ));
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        let builder = CriteriaBuilder::with_options(BuilderOptions {
            normalize_text: true,
        });
        let expression = CriteriaExpression::new().equal("Note", "  RUSH ").unwrap();
        let predicate = builder.build::<Order>(&expression).unwrap();
        assert_eq!(
            predicate.to_string(),
            r#"((x.Note != null) && (x.Note.trim().to_lowercase() == "rush"))"#
        );
        assert!(predicate.matches(&order(1, Some(" Rush"))));
    }

    #[test]
    fn sets_are_combined_with_and() {
        let first = CriteriaExpression::new().greater_than("Id", 1i64).unwrap();
        let empty = CriteriaExpression::new();
        let second = CriteriaExpression::new().less_than("Id", 5i64).unwrap();
        let predicate = CriteriaBuilder::new()
            .build_all::<Order, _>([&first, &empty, &second])
            .unwrap();
        assert_eq!(predicate.to_string(), "((x.Id > 1) && (x.Id < 5))");
    }

    #[test]
    fn char_constants_widen_to_text() {
        let expression = CriteriaExpression::new()
            .starts_with("Lines[Sku]", 'A')
            .unwrap();
        let predicate = CriteriaBuilder::new().build::<Order>(&expression).unwrap();
        assert_eq!(
            predicate.to_string(),
            r#"x.Lines.any(|i| ((i.Sku != null) && i.Sku.starts_with("A")))"#
        );
        assert!(predicate.matches(&order(1, None)));
    }

    #[test]
    fn split_collection_path_parts() {
        assert_eq!(split_collection_path("Name").unwrap(), None);
        assert_eq!(
            split_collection_path("Orders[Lines.Sku]").unwrap(),
            Some(("Orders", "Lines.Sku"))
        );
    }
}
