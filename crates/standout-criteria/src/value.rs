//! Value types for criteria operands and member reads.
//!
//! [`Value`] is the owned operand stored in a criterion. [`Field`] is the
//! value of a member read from an instance at evaluation time; it borrows
//! from the instance where it can.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use geo_types::Geometry;
use uuid::Uuid;

use crate::kind::ValueKind;
use crate::traits::Record;

/// Owned operand value of a criterion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (`None` of an `Option`).
    Null,
    Bool(bool),
    Char(char),
    String(String),
    Number(Number),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Time(NaiveTime),
    Duration(TimeDelta),
    Guid(Uuid),
    /// Enum or flag set, as its underlying bit pattern.
    Enum(u64),
    /// Materialized sequence, used by the membership operators.
    List(Vec<Value>),
    Geometry(Geometry<f64>),
}

impl Value {
    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind of this value, or `None` for `Null`.
    pub fn kind(&self) -> Option<ValueKind> {
        let kind = match self {
            Value::Null => return None,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Char(_) => ValueKind::Char,
            Value::String(_) => ValueKind::Text,
            Value::Number(_) => ValueKind::Number,
            Value::Date(_) => ValueKind::Date,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::DateTimeOffset(_) => ValueKind::DateTimeOffset,
            Value::Time(_) => ValueKind::Time,
            Value::Duration(_) => ValueKind::Duration,
            Value::Guid(_) => ValueKind::Guid,
            Value::Enum(_) => ValueKind::Enum,
            Value::List(_) => ValueKind::Array,
            Value::Geometry(_) => ValueKind::Spatial,
        };
        Some(kind)
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extracts the list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows this value as a [`Field`] for evaluation.
    pub fn as_field(&self) -> Field<'_> {
        match self {
            Value::Null => Field::Null,
            Value::Bool(b) => Field::Bool(*b),
            Value::Char(c) => Field::Char(*c),
            Value::String(s) => Field::Str(Cow::Borrowed(s)),
            Value::Number(n) => Field::Number(*n),
            Value::Date(d) => Field::Date(*d),
            Value::DateTime(d) => Field::DateTime(*d),
            Value::DateTimeOffset(d) => Field::DateTimeOffset(*d),
            Value::Time(t) => Field::Time(*t),
            Value::Duration(d) => Field::Duration(*d),
            Value::Guid(g) => Field::Guid(*g),
            Value::Enum(bits) => Field::Enum(*bits),
            Value::List(items) => Field::List(items),
            Value::Geometry(g) => Field::Geometry(Cow::Borrowed(g)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::DateTime(d) => write!(f, "{d}"),
            Value::DateTimeOffset(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::Duration(d) => write!(f, "{d}"),
            Value::Guid(g) => write!(f, "{g}"),
            Value::Enum(bits) => write!(f, "{bits}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Geometry(g) => write!(f, "{g:?}"),
        }
    }
}

/// Value of a member read from an instance.
///
/// Returned by [`Record::field`]. Text and geometries are borrowed when the
/// member holds them directly and owned when they had to be produced, for
/// instance by trimming or by widening a `Point` into a `Geometry`.
#[derive(Clone)]
pub enum Field<'a> {
    /// Member is `None`, or a nested record on the path was `None`.
    Null,
    Bool(bool),
    Char(char),
    Str(Cow<'a, str>),
    Number(Number),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    DateTimeOffset(DateTime<FixedOffset>),
    Time(NaiveTime),
    Duration(TimeDelta),
    Guid(Uuid),
    Enum(u64),
    Geometry(Cow<'a, Geometry<f64>>),
    /// A list constant borrowed from a criterion.
    List(&'a [Value]),
    /// A nested record member.
    Record(&'a dyn Record),
    /// A collection of nested records.
    Records(Vec<&'a dyn Record>),
}

impl<'a> Field<'a> {
    /// Borrowed text field.
    pub fn str(s: &'a str) -> Self {
        Field::Str(Cow::Borrowed(s))
    }

    /// Returns `true` if this is a `Null` field.
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Extracts the text, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Str(s) => Some(&**s),
            _ => None,
        }
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Field::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Compares two non-null scalar fields of the same kind.
    ///
    /// Returns `None` for nulls, for mismatched kinds, for NaN, and for
    /// kinds without an order (geometries, records, lists).
    pub fn compare(&self, other: &Field<'_>) -> Option<Ordering> {
        match (self, other) {
            (Field::Bool(a), Field::Bool(b)) => Some(a.cmp(b)),
            (Field::Char(a), Field::Char(b)) => Some(a.cmp(b)),
            (Field::Str(a), Field::Str(b)) => Some((**a).cmp(&**b)),
            (Field::Number(a), Field::Number(b)) => a.compare(*b),
            (Field::Date(a), Field::Date(b)) => Some(a.cmp(b)),
            (Field::DateTime(a), Field::DateTime(b)) => Some(a.cmp(b)),
            (Field::DateTimeOffset(a), Field::DateTimeOffset(b)) => Some(a.cmp(b)),
            (Field::Time(a), Field::Time(b)) => Some(a.cmp(b)),
            (Field::Duration(a), Field::Duration(b)) => Some(a.cmp(b)),
            (Field::Guid(a), Field::Guid(b)) => Some(a.cmp(b)),
            (Field::Enum(a), Field::Enum(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Equality with null semantics: two nulls are equal, a null never
    /// equals a non-null value.
    pub fn loose_eq(&self, other: &Field<'_>) -> bool {
        match (self, other) {
            (Field::Null, Field::Null) => true,
            (Field::Null, _) | (_, Field::Null) => false,
            (Field::Geometry(a), Field::Geometry(b)) => a == b,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => f.write_str("Null"),
            Field::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Field::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Field::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Field::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Field::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Field::DateTime(d) => f.debug_tuple("DateTime").field(d).finish(),
            Field::DateTimeOffset(d) => f.debug_tuple("DateTimeOffset").field(d).finish(),
            Field::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Field::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Field::Guid(g) => f.debug_tuple("Guid").field(g).finish(),
            Field::Enum(bits) => f.debug_tuple("Enum").field(bits).finish(),
            Field::Geometry(g) => f.debug_tuple("Geometry").field(g).finish(),
            Field::List(items) => f.debug_tuple("List").field(items).finish(),
            Field::Record(_) => f.write_str("Record(..)"),
            Field::Records(items) => write!(f, "Records(len={})", items.len()),
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// Comparisons between different numeric types are handled by converting
/// to the appropriate common type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            // Integers of opposite signedness compare exactly.
            (Number::I64(a), Number::U64(b)) => Some(compare_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(compare_signed_unsigned(b, a).reverse()),

            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

fn compare_signed_unsigned(a: i64, b: u64) -> Ordering {
    match u64::try_from(a) {
        Ok(a) => a.cmp(&b),
        Err(_) => Ordering::Less,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
