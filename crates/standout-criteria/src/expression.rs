//! Ordered sets of criteria.
//!
//! [`CriteriaExpression`] is built with one method per operator. Every
//! method appends a criterion joined to the next one with `And`; call
//! [`or`](CriteriaExpression::or) right after a criterion to join it to the
//! next one with `Or` instead.

use crate::criteria::Criteria;
use crate::error::Result;
use crate::op::{LogicalType, OperationType};
use crate::traits::CriteriaValue;
use crate::value::{Number, Value};

/// An ordered list of criteria, folded left to right when compiled.
///
/// # Example
///
/// ```
/// use standout_criteria::{CriteriaExpression, LogicalType};
///
/// // Name starts with "Jo" OR Name is empty, AND Age >= 18
/// let expression = CriteriaExpression::new()
///     .starts_with("Name", "Jo")?
///     .or()
///     .is_empty("Name")?
///     .greater_than_or_equal("Age", 18)?;
///
/// assert_eq!(expression.criteria().len(), 3);
/// assert_eq!(expression.criteria()[0].logical_type(), LogicalType::Or);
/// # Ok::<(), standout_criteria::CriteriaError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaExpression {
    criteria: Vec<Criteria>,
}

impl CriteriaExpression {
    /// Creates an empty criteria set.
    ///
    /// An empty set compiles to a predicate that accepts everything.
    pub fn new() -> Self {
        CriteriaExpression::default()
    }

    /// The criteria, in insertion order.
    pub fn criteria(&self) -> &[Criteria] {
        &self.criteria
    }

    /// Appends a prebuilt criterion.
    pub fn push(mut self, criteria: Criteria) -> Self {
        self.criteria.push(criteria);
        self
    }

    // ========================================================================
    // Connectors
    // ========================================================================

    /// Joins the most recently added criterion to the next one with `Or`.
    pub fn or(self) -> Self {
        self.connect(LogicalType::Or)
    }

    /// Joins the most recently added criterion to the next one with `And`.
    ///
    /// This is the default; the method exists for symmetry with
    /// [`or`](CriteriaExpression::or).
    pub fn and(self) -> Self {
        self.connect(LogicalType::And)
    }

    fn connect(mut self, logical_type: LogicalType) -> Self {
        if let Some(last) = self.criteria.last_mut() {
            last.set_logical_type(logical_type);
        }
        self
    }

    // ========================================================================
    // Generic primitive
    // ========================================================================

    /// Appends a criterion. All typed methods below go through here.
    pub fn add<T: CriteriaValue>(
        self,
        property: &str,
        operation_type: OperationType,
        value: T,
        value2: Option<Value>,
        logical_type: LogicalType,
    ) -> Result<Self> {
        self.add_value::<T>(
            property,
            operation_type,
            value.into_value(),
            value2.unwrap_or(Value::Null),
            logical_type,
        )
    }

    fn add_value<T: CriteriaValue>(
        mut self,
        property: &str,
        operation_type: OperationType,
        value: Value,
        value2: Value,
        logical_type: LogicalType,
    ) -> Result<Self> {
        let criteria =
            Criteria::typed::<T>(property.to_string(), operation_type, value, value2, logical_type)?;
        self.criteria.push(criteria);
        Ok(self)
    }

    fn add_unary<T: CriteriaValue>(self, property: &str, operation_type: OperationType) -> Result<Self> {
        self.add_value::<T>(property, operation_type, Value::Null, Value::Null, LogicalType::And)
    }

    // ========================================================================
    // Equality
    // ========================================================================

    /// Member equals `value`. A null value records `IsNull` instead.
    pub fn equal<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        match value.into_value() {
            Value::Null => self.add_unary::<T>(property, OperationType::IsNull),
            value => self.add_value::<T>(property, OperationType::Equal, value, Value::Null, LogicalType::And),
        }
    }

    /// Member differs from `value`. A null value records `IsNotNull` instead.
    pub fn not_equal<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        match value.into_value() {
            Value::Null => self.add_unary::<T>(property, OperationType::IsNotNull),
            value => {
                self.add_value::<T>(property, OperationType::NotEqual, value, Value::Null, LogicalType::And)
            }
        }
    }

    // ========================================================================
    // Text
    // ========================================================================

    pub fn starts_with<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::StartsWith, value, None, LogicalType::And)
    }

    pub fn ends_with<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::EndsWith, value, None, LogicalType::And)
    }

    /// Member is the empty string.
    pub fn is_empty(self, property: &str) -> Result<Self> {
        self.add_unary::<String>(property, OperationType::IsEmpty)
    }

    pub fn is_not_empty(self, property: &str) -> Result<Self> {
        self.add_unary::<String>(property, OperationType::IsNotEmpty)
    }

    /// Member is null, empty, or only whitespace.
    pub fn is_null_or_white_space(self, property: &str) -> Result<Self> {
        self.add_unary::<String>(property, OperationType::IsNullOrWhiteSpace)
    }

    pub fn is_not_null_or_white_space(self, property: &str) -> Result<Self> {
        self.add_unary::<String>(property, OperationType::IsNotNullOrWhiteSpace)
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    pub fn greater_than<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::GreaterThan, value, None, LogicalType::And)
    }

    pub fn greater_than_or_equal<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::GreaterThanOrEqual, value, None, LogicalType::And)
    }

    pub fn less_than<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::LessThan, value, None, LogicalType::And)
    }

    pub fn less_than_or_equal<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::LessThanOrEqual, value, None, LogicalType::And)
    }

    /// Member lies in `low..=high`.
    pub fn between<T: CriteriaValue>(self, property: &str, low: T, high: T) -> Result<Self> {
        let high = high.into_value();
        self.add(property, OperationType::Between, low, Some(high), LogicalType::And)
    }

    // ========================================================================
    // Null checks
    // ========================================================================

    /// Member has no value. `T` is the member's nullable type, for example
    /// `Option<Uuid>`.
    pub fn is_null<T: CriteriaValue>(self, property: &str) -> Result<Self> {
        self.add_unary::<T>(property, OperationType::IsNull)
    }

    pub fn is_not_null<T: CriteriaValue>(self, property: &str) -> Result<Self> {
        self.add_unary::<T>(property, OperationType::IsNotNull)
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Member is one of the items of a list value, contains a text value as
    /// a substring, or has all flags of an enum value set.
    pub fn is_in<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::In, value, None, LogicalType::And)
    }

    pub fn not_in<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::NotIn, value, None, LogicalType::And)
    }

    /// Same test as [`is_in`](CriteriaExpression::is_in).
    pub fn contains<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::Contains, value, None, LogicalType::And)
    }

    pub fn not_contains<T: CriteriaValue>(self, property: &str, value: T) -> Result<Self> {
        self.add(property, OperationType::NotContains, value, None, LogicalType::And)
    }

    // ========================================================================
    // Spatial
    // ========================================================================

    pub fn covers<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Covers, geometry, None, LogicalType::And)
    }

    pub fn crosses<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Crosses, geometry, None, LogicalType::And)
    }

    pub fn touches<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Touches, geometry, None, LogicalType::And)
    }

    pub fn overlaps<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Overlaps, geometry, None, LogicalType::And)
    }

    pub fn covered_by<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::CoveredBy, geometry, None, LogicalType::And)
    }

    pub fn disjoint<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Disjoint, geometry, None, LogicalType::And)
    }

    pub fn intersects<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Intersects, geometry, None, LogicalType::And)
    }

    pub fn within<T: CriteriaValue>(self, property: &str, geometry: T) -> Result<Self> {
        self.add(property, OperationType::Within, geometry, None, LogicalType::And)
    }

    /// Member lies at most `distance` away from `geometry`.
    pub fn is_within_distance<T: CriteriaValue>(
        self,
        property: &str,
        geometry: T,
        distance: f64,
    ) -> Result<Self> {
        self.add(
            property,
            OperationType::IsWithinDistance,
            geometry,
            Some(Value::Number(Number::F64(distance))),
            LogicalType::And,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CriteriaError;
    use uuid::Uuid;

    #[test]
    fn methods_record_their_operator() {
        let expression = CriteriaExpression::new()
            .equal("Name", "value")
            .and_then(|e| e.not_equal("Name", "value"))
            .and_then(|e| e.starts_with("Name", "value"))
            .and_then(|e| e.ends_with("Name", "value"))
            .and_then(|e| e.is_empty("Name"))
            .and_then(|e| e.is_not_empty("Name"))
            .and_then(|e| e.is_null_or_white_space("Name"))
            .and_then(|e| e.is_not_null_or_white_space("Name"))
            .and_then(|e| e.is_in("Name", vec!["a", "b"]))
            .and_then(|e| e.not_in("Name", "a"))
            .and_then(|e| e.contains("Name", "a"))
            .and_then(|e| e.not_contains("Name", "a"))
            .and_then(|e| e.greater_than("Age", 1))
            .and_then(|e| e.greater_than_or_equal("Age", 1))
            .and_then(|e| e.less_than("Age", 1))
            .and_then(|e| e.less_than_or_equal("Age", 1))
            .and_then(|e| e.between("Age", 1, 2))
            .and_then(|e| e.is_null::<Option<i32>>("Age"))
            .and_then(|e| e.is_not_null::<Option<i32>>("Age"))
            .unwrap();

        let ops: Vec<_> = expression.criteria().iter().map(Criteria::operation_type).collect();
        assert_eq!(
            ops,
            vec![
                OperationType::Equal,
                OperationType::NotEqual,
                OperationType::StartsWith,
                OperationType::EndsWith,
                OperationType::IsEmpty,
                OperationType::IsNotEmpty,
                OperationType::IsNullOrWhiteSpace,
                OperationType::IsNotNullOrWhiteSpace,
                OperationType::In,
                OperationType::NotIn,
                OperationType::Contains,
                OperationType::NotContains,
                OperationType::GreaterThan,
                OperationType::GreaterThanOrEqual,
                OperationType::LessThan,
                OperationType::LessThanOrEqual,
                OperationType::Between,
                OperationType::IsNull,
                OperationType::IsNotNull,
            ]
        );
        assert!(expression
            .criteria()
            .iter()
            .all(|c| c.logical_type() == LogicalType::And));
    }

    #[test]
    fn equal_null_records_is_null() {
        let expression = CriteriaExpression::new()
            .equal("IdNullable", None::<Uuid>)
            .unwrap();
        assert_eq!(expression.criteria().len(), 1);
        assert_eq!(expression.criteria()[0].operation_type(), OperationType::IsNull);

        let expression = CriteriaExpression::new()
            .not_equal("IdNullable", None::<Uuid>)
            .unwrap();
        assert_eq!(expression.criteria()[0].operation_type(), OperationType::IsNotNull);
    }

    #[test]
    fn equal_with_some_keeps_equal() {
        let id = Uuid::from_u128(7);
        let expression = CriteriaExpression::new()
            .equal("IdNullable", Some(id))
            .unwrap();
        assert_eq!(expression.criteria()[0].operation_type(), OperationType::Equal);
        assert_eq!(expression.criteria()[0].value(), &Value::Guid(id));
    }

    #[test]
    fn or_sets_connector_on_previous_criterion() {
        let expression = CriteriaExpression::new()
            .equal("Name", "a")
            .map(CriteriaExpression::or)
            .and_then(|e| e.equal("Name", "b"))
            .unwrap();

        assert_eq!(expression.criteria()[0].logical_type(), LogicalType::Or);
        assert_eq!(expression.criteria()[1].logical_type(), LogicalType::And);
    }

    #[test]
    fn connector_on_empty_set_is_noop() {
        assert!(CriteriaExpression::new().or().criteria().is_empty());
    }

    #[test]
    fn between_stores_upper_bound() {
        let expression = CriteriaExpression::new().between("Age", 10, 20).unwrap();
        let criteria = &expression.criteria()[0];
        assert_eq!(criteria.value(), &Value::Number(Number::I64(10)));
        assert_eq!(criteria.value2(), &Value::Number(Number::I64(20)));
    }

    #[test]
    fn invalid_operator_fails_at_construction() {
        let err = CriteriaExpression::new().starts_with("Age", 10).unwrap_err();
        assert!(matches!(
            err,
            CriteriaError::UnsupportedOperation {
                operation: OperationType::StartsWith,
                ..
            }
        ));
    }

    #[test]
    fn spatial_methods_store_distance() {
        let point = geo_types::Point::new(0.0, 0.0);
        let expression = CriteriaExpression::new()
            .is_within_distance("Location", point, 5.0)
            .and_then(|e| e.intersects("Location", point))
            .unwrap();
        assert_eq!(expression.criteria()[0].value2().as_number(), Some(Number::F64(5.0)));
        assert_eq!(
            expression.criteria()[1].operation_type(),
            OperationType::Intersects
        );
    }
}
