//! Traits for derive macro support.
//!
//! [`Record`] and [`Model`] are implemented by `#[derive(Model)]` from the
//! `standout-criteria-macros` crate. [`FieldType`] and [`CriteriaValue`]
//! classify member and operand types; they are implemented here for the
//! common scalar types and, through [`impl_criteria_enum!`], for enums.
//!
//! # Manual Implementation
//!
//! ```
//! use standout_criteria::{Field, FieldType, Member, Model, Record, Schema};
//! use once_cell::sync::Lazy;
//!
//! struct Task {
//!     name: String,
//!     priority: u8,
//! }
//!
//! impl Record for Task {
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "Name" => Some(self.name.field()),
//!             "Priority" => Some(self.priority.field()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Model for Task {
//!     fn schema() -> &'static Schema {
//!         static SCHEMA: Lazy<Schema> = Lazy::new(|| {
//!             Schema::new(
//!                 "Task",
//!                 vec![
//!                     Member::scalar::<String>("Name"),
//!                     Member::scalar::<u8>("Priority"),
//!                 ],
//!             )
//!         });
//!         &SCHEMA
//!     }
//! }
//! ```

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use geo_types::{
    Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Rect, Triangle,
};
use uuid::Uuid;

use crate::kind::{ValueKind, ValueType};
use crate::schema::Schema;
use crate::value::{Field, Number, Value};

/// An instance whose members can be read by name.
///
/// This trait is object safe; nested records and collection elements are
/// handed around as `&dyn Record`.
pub trait Record {
    /// Returns the value of a member, or `None` if there is no such member.
    fn field(&self, name: &str) -> Option<Field<'_>>;
}

/// A record type with static member metadata.
pub trait Model: Record {
    /// Returns the metadata for this type.
    ///
    /// Implementations build the schema once and return the same reference
    /// on every call.
    fn schema() -> &'static Schema;
}

/// A type that can appear as a scalar member of a [`Model`].
pub trait FieldType {
    /// Category of the member.
    const KIND: ValueKind;
    /// `true` if the member can hold no value.
    const NULLABLE: bool = false;

    /// Reads the member.
    fn field(&self) -> Field<'_>;
}

/// A type that can be the value of a criterion.
pub trait CriteriaValue {
    /// Static classification of this type.
    fn value_type() -> ValueType;

    /// Converts into an owned operand.
    fn into_value(self) -> Value;
}

/// Conversion of an enum or flags type to its underlying bit pattern.
///
/// Use `#[derive(CriteriaEnum)]` for fieldless enums and single-field
/// newtypes, or implement it by hand and call [`impl_criteria_enum!`].
///
/// # Example
///
/// ```
/// use standout_criteria::{impl_criteria_enum, CriteriaEnum};
///
/// #[derive(Clone, Copy)]
/// struct Permissions(u8);
///
/// impl Permissions {
///     const READ: Permissions = Permissions(1);
///     const WRITE: Permissions = Permissions(2);
/// }
///
/// impl CriteriaEnum for Permissions {
///     fn bits(&self) -> u64 {
///         self.0 as u64
///     }
/// }
///
/// impl_criteria_enum!(Permissions);
///
/// assert_eq!(Permissions::WRITE.bits(), 2);
/// ```
pub trait CriteriaEnum {
    /// Returns the underlying integer value.
    fn bits(&self) -> u64;
}

/// Implements [`FieldType`] and [`CriteriaValue`] for types implementing
/// [`CriteriaEnum`].
#[macro_export]
macro_rules! impl_criteria_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FieldType for $ty {
                const KIND: $crate::ValueKind = $crate::ValueKind::Enum;

                fn field(&self) -> $crate::Field<'_> {
                    $crate::Field::Enum($crate::CriteriaEnum::bits(self))
                }
            }

            impl $crate::CriteriaValue for $ty {
                fn value_type() -> $crate::ValueType {
                    $crate::ValueType::of::<$ty>($crate::ValueKind::Enum)
                }

                fn into_value(self) -> $crate::Value {
                    $crate::Value::Enum($crate::CriteriaEnum::bits(&self))
                }
            }
        )+
    };
}

// ============================================================================
// Scalar implementations
// ============================================================================

macro_rules! scalar {
    ($kind:ident, |$this:ident| $field:expr, |$owned:ident| $value:expr; $($ty:ty),+) => {
        $(
            impl FieldType for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn field(&self) -> Field<'_> {
                    let $this = self;
                    $field
                }
            }

            impl CriteriaValue for $ty {
                fn value_type() -> ValueType {
                    ValueType::of::<$ty>(ValueKind::$kind)
                }

                fn into_value(self) -> Value {
                    let $owned = self;
                    $value
                }
            }
        )+
    };
}

scalar!(Number, |n| Field::Number(Number::from(*n)), |n| Value::Number(Number::from(n));
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
scalar!(Boolean, |b| Field::Bool(*b), |b| Value::Bool(b); bool);
scalar!(Char, |c| Field::Char(*c), |c| Value::Char(c); char);
scalar!(Text, |s| Field::str(s), |s| Value::String(s); String);
scalar!(Date, |d| Field::Date(*d), |d| Value::Date(d); NaiveDate);
scalar!(DateTime, |d| Field::DateTime(*d), |d| Value::DateTime(d); NaiveDateTime);
scalar!(DateTimeOffset, |d| Field::DateTimeOffset(*d), |d| Value::DateTimeOffset(d);
    DateTime<FixedOffset>);
scalar!(DateTimeOffset, |d| Field::DateTimeOffset(d.fixed_offset()),
    |d| Value::DateTimeOffset(d.fixed_offset()); DateTime<Utc>);
scalar!(Time, |t| Field::Time(*t), |t| Value::Time(t); NaiveTime);
scalar!(Duration, |d| Field::Duration(*d), |d| Value::Duration(d); TimeDelta);
scalar!(Guid, |g| Field::Guid(*g), |g| Value::Guid(g); Uuid);
scalar!(Spatial, |g| Field::Geometry(Cow::Borrowed(g)), |g| Value::Geometry(g); Geometry<f64>);
scalar!(Spatial, |g| Field::Geometry(Cow::Owned(Geometry::from(g.clone()))),
    |g| Value::Geometry(Geometry::from(g));
    Point<f64>, Line<f64>, LineString<f64>, Polygon<f64>, MultiPoint<f64>,
    MultiLineString<f64>, MultiPolygon<f64>, Rect<f64>, Triangle<f64>);
scalar!(Spatial, |g| Field::Geometry(Cow::Owned(Geometry::GeometryCollection(g.clone()))),
    |g| Value::Geometry(Geometry::GeometryCollection(g));
    GeometryCollection<f64>);

impl CriteriaValue for &str {
    fn value_type() -> ValueType {
        ValueType::of::<str>(ValueKind::Text)
    }

    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl CriteriaValue for &String {
    fn value_type() -> ValueType {
        ValueType::of::<String>(ValueKind::Text)
    }

    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

// ============================================================================
// Nullable and array implementations
// ============================================================================

impl<T: FieldType> FieldType for Option<T> {
    const KIND: ValueKind = T::KIND;
    const NULLABLE: bool = true;

    fn field(&self) -> Field<'_> {
        match self {
            Some(inner) => inner.field(),
            None => Field::Null,
        }
    }
}

impl<T: CriteriaValue> CriteriaValue for Option<T> {
    fn value_type() -> ValueType {
        ValueType::nullable_of::<Self>(T::value_type())
    }

    fn into_value(self) -> Value {
        match self {
            Some(inner) => inner.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: CriteriaValue> CriteriaValue for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::array_of::<Self>(T::value_type())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(CriteriaValue::into_value).collect())
    }
}

impl<T: CriteriaValue, const N: usize> CriteriaValue for [T; N] {
    fn value_type() -> ValueType {
        ValueType::array_of::<Self>(T::value_type())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(CriteriaValue::into_value).collect())
    }
}

impl<T: CriteriaValue + Clone> CriteriaValue for &[T] {
    fn value_type() -> ValueType {
        ValueType::array_of::<[T]>(T::value_type())
    }

    fn into_value(self) -> Value {
        Value::List(self.iter().cloned().map(CriteriaValue::into_value).collect())
    }
}
