//! Value categories and the operators each category accepts.

use crate::op::OperationType;

use OperationType::*;

const TEXT_OPERATIONS: &[OperationType] = &[
    Equal,
    NotEqual,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    IsNull,
    IsNotNull,
    IsNullOrWhiteSpace,
    IsNotNullOrWhiteSpace,
    In,
    NotIn,
    Contains,
    NotContains,
];

const ORDERED_OPERATIONS: &[OperationType] = &[
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,
];

const EQUALITY_OPERATIONS: &[OperationType] = &[Equal, NotEqual];

const ENUM_OPERATIONS: &[OperationType] = &[Equal, NotEqual, In, NotIn, Contains, NotContains];

const ARRAY_OPERATIONS: &[OperationType] = &[In, NotIn, Contains, NotContains];

const SPATIAL_OPERATIONS: &[OperationType] = &[
    Covers,
    Crosses,
    Touches,
    Overlaps,
    CoveredBy,
    Disjoint,
    Intersects,
    Within,
    IsWithinDistance,
];

const NULLABLE_OPERATIONS: &[OperationType] = &[IsNull, IsNotNull];

/// Category of a criterion value or of a scalar member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Char,
    Number,
    Boolean,
    Date,
    DateTime,
    DateTimeOffset,
    Time,
    Duration,
    Guid,
    Enum,
    Array,
    Spatial,
}

impl ValueKind {
    /// Operators accepted for non-nullable values of this kind.
    pub fn operations(self) -> &'static [OperationType] {
        match self {
            ValueKind::Text | ValueKind::Char => TEXT_OPERATIONS,
            ValueKind::Number
            | ValueKind::Date
            | ValueKind::DateTime
            | ValueKind::DateTimeOffset
            | ValueKind::Time
            | ValueKind::Duration => ORDERED_OPERATIONS,
            ValueKind::Boolean | ValueKind::Guid => EQUALITY_OPERATIONS,
            ValueKind::Enum => ENUM_OPERATIONS,
            ValueKind::Array => ARRAY_OPERATIONS,
            ValueKind::Spatial => SPATIAL_OPERATIONS,
        }
    }

    /// Returns `true` for string and character values.
    pub fn is_text(self) -> bool {
        matches!(self, ValueKind::Text | ValueKind::Char)
    }

    /// Returns `true` for kinds with a total order usable by relational
    /// operators.
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            ValueKind::Number
                | ValueKind::Date
                | ValueKind::DateTime
                | ValueKind::DateTimeOffset
                | ValueKind::Time
                | ValueKind::Duration
        )
    }

    /// Returns `true` if a constant of kind `value` can be compared to a
    /// member of this kind.
    pub fn accepts(self, value: ValueKind) -> bool {
        self == value || (self == ValueKind::Text && value == ValueKind::Char)
    }

    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Char => "char",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
            ValueKind::DateTime => "datetime",
            ValueKind::DateTimeOffset => "datetime-offset",
            ValueKind::Time => "time",
            ValueKind::Duration => "duration",
            ValueKind::Guid => "guid",
            ValueKind::Enum => "enum",
            ValueKind::Array => "array",
            ValueKind::Spatial => "spatial",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static type of a criterion value, classified once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    /// Category of the value (of the inner type for nullable values).
    pub kind: ValueKind,
    /// `true` for `Option<T>`.
    pub nullable: bool,
    /// Category of the items, for arrays.
    pub element: Option<ValueKind>,
    /// Rust type name, for error messages.
    pub name: &'static str,
}

impl ValueType {
    /// Non-nullable scalar type.
    pub fn of<T: ?Sized>(kind: ValueKind) -> Self {
        ValueType {
            kind,
            nullable: false,
            element: None,
            name: std::any::type_name::<T>(),
        }
    }

    /// Array type whose items have the given type.
    pub fn array_of<T: ?Sized>(element: ValueType) -> Self {
        ValueType {
            kind: ValueKind::Array,
            nullable: false,
            element: Some(element.kind),
            name: std::any::type_name::<T>(),
        }
    }

    /// Nullable wrapper around `inner`.
    pub fn nullable_of<T: ?Sized>(inner: ValueType) -> Self {
        ValueType {
            nullable: true,
            name: std::any::type_name::<T>(),
            ..inner
        }
    }

    /// Returns `true` if `operation` is legal for values of this type.
    pub fn supports(&self, operation: OperationType) -> bool {
        self.kind.operations().contains(&operation)
            || (self.nullable && NULLABLE_OPERATIONS.contains(&operation))
    }

    /// Kind that must match the member a value of this type is compared to.
    ///
    /// For arrays this is the item kind.
    pub fn operand_kind(&self) -> ValueKind {
        match (self.kind, self.element) {
            (ValueKind::Array, Some(element)) => element,
            (kind, _) => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_string_operators() {
        let ty = ValueType::of::<String>(ValueKind::Text);
        assert!(ty.supports(StartsWith));
        assert!(ty.supports(IsNullOrWhiteSpace));
        assert!(ty.supports(IsNull));
        assert!(!ty.supports(GreaterThan));
        assert!(!ty.supports(Between));
    }

    #[test]
    fn numbers_reject_null_checks_unless_nullable() {
        let ty = ValueType::of::<i32>(ValueKind::Number);
        assert!(ty.supports(Between));
        assert!(!ty.supports(IsNull));

        let nullable = ValueType::nullable_of::<Option<i32>>(ty);
        assert!(nullable.supports(IsNull));
        assert!(nullable.supports(IsNotNull));
        assert!(nullable.supports(LessThanOrEqual));
        assert!(nullable.name.contains("Option<i32>"));
    }

    #[test]
    fn booleans_and_guids_only_compare_for_equality() {
        for kind in [ValueKind::Boolean, ValueKind::Guid] {
            let ty = ValueType::of::<()>(kind);
            assert!(ty.supports(Equal));
            assert!(ty.supports(NotEqual));
            assert!(!ty.supports(In));
            assert!(!ty.supports(GreaterThan));
        }
    }

    #[test]
    fn arrays_only_accept_membership() {
        let ty = ValueType::array_of::<Vec<String>>(ValueType::of::<String>(ValueKind::Text));
        for op in OperationType::ALL {
            assert_eq!(ty.supports(op), op.is_membership(), "{op}");
        }
        assert_eq!(ty.operand_kind(), ValueKind::Text);
    }

    #[test]
    fn spatial_accepts_only_geometry_predicates() {
        let ty = ValueType::of::<()>(ValueKind::Spatial);
        for op in OperationType::ALL {
            assert_eq!(ty.supports(op), op.is_spatial(), "{op}");
        }
    }

    #[test]
    fn enums_accept_flags_membership() {
        let ty = ValueType::of::<()>(ValueKind::Enum);
        assert!(ty.supports(Contains));
        assert!(ty.supports(NotIn));
        assert!(!ty.supports(StartsWith));
    }

    #[test]
    fn member_kind_accepts_char_constants_for_text() {
        assert!(ValueKind::Text.accepts(ValueKind::Char));
        assert!(!ValueKind::Char.accepts(ValueKind::Text));
        assert!(!ValueKind::Date.accepts(ValueKind::DateTime));
        assert!(ValueKind::Duration.is_ordered());
        assert!(!ValueKind::Guid.is_ordered());
    }
}
