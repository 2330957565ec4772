//! Operators and connectors for criteria.
//!
//! [`OperationType`] is the closed set of filter operators a criterion can
//! carry. [`LogicalType`] is the connector that joins a criterion to the one
//! after it.

use serde::{Deserialize, Serialize};

/// Filter operator of a single criterion.
///
/// Operators are grouped by the value types they support:
/// - **Equality**: `Equal`, `NotEqual`
/// - **Text**: `StartsWith`, `EndsWith`, `IsEmpty`, `IsNotEmpty`,
///   `IsNullOrWhiteSpace`, `IsNotNullOrWhiteSpace`
/// - **Ordering**: `GreaterThan`, `GreaterThanOrEqual`, `LessThan`,
///   `LessThanOrEqual`, `Between`
/// - **Null checks**: `IsNull`, `IsNotNull`
/// - **Membership**: `In`, `NotIn`, `Contains`, `NotContains`
/// - **Spatial**: `Covers`, `Crosses`, `Touches`, `Overlaps`, `CoveredBy`,
///   `Disjoint`, `Intersects`, `Within`, `IsWithinDistance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    // Equality
    Equal,
    NotEqual,

    // Text
    StartsWith,
    EndsWith,

    // Ordering
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,

    // Null and emptiness checks
    IsNull,
    IsNotNull,
    IsEmpty,
    IsNotEmpty,
    IsNullOrWhiteSpace,
    IsNotNullOrWhiteSpace,

    // Membership
    In,
    NotIn,
    Contains,
    NotContains,

    // Spatial
    Covers,
    Crosses,
    Touches,
    Overlaps,
    CoveredBy,
    Disjoint,
    Intersects,
    Within,
    IsWithinDistance,
}

impl OperationType {
    /// Every operator, in declaration order.
    pub const ALL: [OperationType; 28] = [
        OperationType::Equal,
        OperationType::NotEqual,
        OperationType::StartsWith,
        OperationType::EndsWith,
        OperationType::GreaterThan,
        OperationType::GreaterThanOrEqual,
        OperationType::LessThan,
        OperationType::LessThanOrEqual,
        OperationType::Between,
        OperationType::IsNull,
        OperationType::IsNotNull,
        OperationType::IsEmpty,
        OperationType::IsNotEmpty,
        OperationType::IsNullOrWhiteSpace,
        OperationType::IsNotNullOrWhiteSpace,
        OperationType::In,
        OperationType::NotIn,
        OperationType::Contains,
        OperationType::NotContains,
        OperationType::Covers,
        OperationType::Crosses,
        OperationType::Touches,
        OperationType::Overlaps,
        OperationType::CoveredBy,
        OperationType::Disjoint,
        OperationType::Intersects,
        OperationType::Within,
        OperationType::IsWithinDistance,
    ];

    /// Returns `true` for `In`, `NotIn`, `Contains` and `NotContains`.
    pub fn is_membership(self) -> bool {
        matches!(
            self,
            OperationType::In
                | OperationType::NotIn
                | OperationType::Contains
                | OperationType::NotContains
        )
    }

    /// Returns `true` for the negated membership operators.
    pub fn is_negated_membership(self) -> bool {
        matches!(self, OperationType::NotIn | OperationType::NotContains)
    }

    /// Returns `true` for the relational comparisons, `Between` included.
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            OperationType::GreaterThan
                | OperationType::GreaterThanOrEqual
                | OperationType::LessThan
                | OperationType::LessThanOrEqual
                | OperationType::Between
        )
    }

    /// Returns `true` for the geometry predicates.
    pub fn is_spatial(self) -> bool {
        matches!(
            self,
            OperationType::Covers
                | OperationType::Crosses
                | OperationType::Touches
                | OperationType::Overlaps
                | OperationType::CoveredBy
                | OperationType::Disjoint
                | OperationType::Intersects
                | OperationType::Within
                | OperationType::IsWithinDistance
        )
    }

    /// Returns `true` for operators that take no operand value.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            OperationType::IsNull
                | OperationType::IsNotNull
                | OperationType::IsEmpty
                | OperationType::IsNotEmpty
                | OperationType::IsNullOrWhiteSpace
                | OperationType::IsNotNullOrWhiteSpace
        )
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Equal => "Equal",
            OperationType::NotEqual => "NotEqual",
            OperationType::StartsWith => "StartsWith",
            OperationType::EndsWith => "EndsWith",
            OperationType::GreaterThan => "GreaterThan",
            OperationType::GreaterThanOrEqual => "GreaterThanOrEqual",
            OperationType::LessThan => "LessThan",
            OperationType::LessThanOrEqual => "LessThanOrEqual",
            OperationType::Between => "Between",
            OperationType::IsNull => "IsNull",
            OperationType::IsNotNull => "IsNotNull",
            OperationType::IsEmpty => "IsEmpty",
            OperationType::IsNotEmpty => "IsNotEmpty",
            OperationType::IsNullOrWhiteSpace => "IsNullOrWhiteSpace",
            OperationType::IsNotNullOrWhiteSpace => "IsNotNullOrWhiteSpace",
            OperationType::In => "In",
            OperationType::NotIn => "NotIn",
            OperationType::Contains => "Contains",
            OperationType::NotContains => "NotContains",
            OperationType::Covers => "Covers",
            OperationType::Crosses => "Crosses",
            OperationType::Touches => "Touches",
            OperationType::Overlaps => "Overlaps",
            OperationType::CoveredBy => "CoveredBy",
            OperationType::Disjoint => "Disjoint",
            OperationType::Intersects => "Intersects",
            OperationType::Within => "Within",
            OperationType::IsWithinDistance => "IsWithinDistance",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Connector joining a criterion to the next one in its set.
///
/// The connector stored on the last criterion of a set is never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogicalType {
    #[default]
    And,
    Or,
}

impl LogicalType {
    /// Returns the display name of this connector.
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalType::And => "And",
            LogicalType::Or => "Or",
        }
    }
}

impl std::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
