//! A single filter criterion.
//!
//! A [`Criteria`] pairs a property path with an operator and its operands.
//! The operator is checked against the static type of the value when the
//! criterion is constructed, so an ill-typed criterion never exists.

use crate::error::{CriteriaError, Result};
use crate::kind::{ValueKind, ValueType};
use crate::op::{LogicalType, OperationType};
use crate::traits::CriteriaValue;
use crate::value::Value;

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use standout_criteria::{Criteria, LogicalType, OperationType};
///
/// let criteria = Criteria::new("Name", OperationType::StartsWith, "Jo", None, LogicalType::And)?;
/// assert_eq!(criteria.property(), "Name");
///
/// // Relational operators are not defined for text.
/// assert!(Criteria::new("Name", OperationType::GreaterThan, "Jo", None, LogicalType::And).is_err());
/// # Ok::<(), standout_criteria::CriteriaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    property: String,
    operation_type: OperationType,
    logical_type: LogicalType,
    value: Value,
    value2: Value,
    value_type: ValueType,
}

impl Criteria {
    /// Creates a criterion with an operand of type `T`.
    ///
    /// `value2` is the upper bound for `Between` and the distance for
    /// `IsWithinDistance`; other operators ignore it.
    pub fn new<T: CriteriaValue>(
        property: impl Into<String>,
        operation_type: OperationType,
        value: T,
        value2: Option<Value>,
        logical_type: LogicalType,
    ) -> Result<Self> {
        Criteria::typed::<T>(
            property.into(),
            operation_type,
            value.into_value(),
            value2.unwrap_or(Value::Null),
            logical_type,
        )
    }

    /// Creates a criterion without an operand, for operators such as
    /// `IsNull`. `T` is the type the member is expected to have.
    pub fn of_type<T: CriteriaValue>(
        property: impl Into<String>,
        operation_type: OperationType,
        logical_type: LogicalType,
    ) -> Result<Self> {
        Criteria::typed::<T>(
            property.into(),
            operation_type,
            Value::Null,
            Value::Null,
            logical_type,
        )
    }

    /// Creates a criterion from an already converted operand whose static
    /// type is `T`.
    pub(crate) fn typed<T: CriteriaValue>(
        property: String,
        operation_type: OperationType,
        value: Value,
        value2: Value,
        logical_type: LogicalType,
    ) -> Result<Self> {
        let value_type = T::value_type();

        if property.trim().is_empty() {
            return Err(CriteriaError::InvalidArgument {
                name: "property",
                reason: "must not be empty",
            });
        }

        if !value_type.supports(operation_type) {
            return Err(CriteriaError::UnsupportedOperation {
                operation: operation_type,
                type_name: value_type.name.to_string(),
            });
        }

        match operation_type {
            OperationType::Between if value2.is_null() => {
                return Err(CriteriaError::InvalidArgument {
                    name: "value2",
                    reason: "Between requires an upper bound",
                });
            }
            OperationType::Between
                if !value2
                    .kind()
                    .is_some_and(|kind| value_type.operand_kind().accepts(kind)) =>
            {
                return Err(CriteriaError::UnsupportedOperation {
                    operation: operation_type,
                    type_name: value_type.name.to_string(),
                });
            }
            OperationType::IsWithinDistance if value2.as_number().is_none() => {
                return Err(CriteriaError::InvalidArgument {
                    name: "value2",
                    reason: "IsWithinDistance requires a numeric distance",
                });
            }
            _ => {}
        }

        Ok(Criteria {
            property,
            operation_type,
            logical_type,
            value,
            value2,
            value_type,
        })
    }

    /// Dot-separated member path, optionally with one bracketed segment.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// Connector joining this criterion to the next one.
    pub fn logical_type(&self) -> LogicalType {
        self.logical_type
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value2(&self) -> &Value {
        &self.value2
    }

    /// Static type of the value, as classified at construction.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Kind of the value, or of its items for arrays.
    pub fn operand_kind(&self) -> ValueKind {
        self.value_type.operand_kind()
    }

    pub(crate) fn set_logical_type(&mut self, logical_type: LogicalType) {
        self.logical_type = logical_type;
    }
}
