//! Boolean expression trees produced by the compiler.
//!
//! An [`Expr`] is interpreted directly against any [`Record`] and renders
//! itself as readable text through `Display`, for example
//! `((x.Name != null) && x.Name.starts_with("Jo"))`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use geo_types::Geometry;

use crate::schema::MemberPath;
use crate::spatial::SpatialOp;
use crate::traits::Record;
use crate::value::{Field, Number, Value};

/// Binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    /// Evaluates `left <op> right`.
    ///
    /// Equality treats two nulls as equal. Relational operators are false
    /// when either side is null or the sides cannot be ordered.
    pub fn test(self, left: &Field<'_>, right: &Field<'_>) -> bool {
        match self {
            CompareOp::Eq => left.loose_eq(right),
            CompareOp::Ne => !left.loose_eq(right),
            _ => match left.compare(right) {
                Some(ordering) => self.eval_ordering(ordering),
                None => false,
            },
        }
    }

    fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
        }
    }
}

/// String method applied to a text operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    StartsWith,
    EndsWith,
    Contains,
}

impl Method {
    /// Evaluates `target.<method>(argument)`; false unless both are text.
    pub fn test(self, target: &Field<'_>, argument: &Field<'_>) -> bool {
        let (Some(target), Some(argument)) = (target.as_str(), argument.as_str()) else {
            return false;
        };
        match self {
            Method::StartsWith => target.starts_with(argument),
            Method::EndsWith => target.ends_with(argument),
            Method::Contains => target.contains(argument),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::StartsWith => "starts_with",
            Method::EndsWith => "ends_with",
            Method::Contains => "contains",
        }
    }
}

/// A value-producing node.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A member of the current parameter.
    Member(MemberPath),
    Constant(Value),
    /// The text operand with surrounding whitespace removed.
    Trim(Box<Operand>),
    /// The text operand trimmed and lowercased.
    Normalize(Box<Operand>),
    /// An enum operand as its underlying integer.
    Bits(Box<Operand>),
    /// Bitwise or of two integer operands.
    BitOr(Box<Operand>, Box<Operand>),
}

impl Operand {
    pub fn member(path: MemberPath) -> Self {
        Operand::Member(path)
    }

    pub fn constant(value: Value) -> Self {
        Operand::Constant(value)
    }

    pub fn null() -> Self {
        Operand::Constant(Value::Null)
    }

    pub fn trim(self) -> Self {
        Operand::Trim(Box::new(self))
    }

    pub fn normalize(self) -> Self {
        Operand::Normalize(Box::new(self))
    }

    pub fn bits(self) -> Self {
        Operand::Bits(Box::new(self))
    }

    pub fn bit_or(self, other: Operand) -> Self {
        Operand::BitOr(Box::new(self), Box::new(other))
    }

    /// Evaluates this operand against `record`.
    pub fn eval<'a>(&'a self, record: &'a dyn Record) -> Field<'a> {
        match self {
            Operand::Member(path) => path.eval(record),
            Operand::Constant(value) => value.as_field(),
            Operand::Trim(inner) => match inner.eval(record) {
                Field::Str(text) => Field::Str(trim(text)),
                other => other,
            },
            Operand::Normalize(inner) => match inner.eval(record) {
                Field::Str(text) => Field::Str(Cow::Owned(text.trim().to_lowercase())),
                other => other,
            },
            Operand::Bits(inner) => match inner.eval(record) {
                Field::Enum(bits) => Field::Number(Number::U64(bits)),
                _ => Field::Null,
            },
            Operand::BitOr(left, right) => match (left.eval(record), right.eval(record)) {
                (Field::Number(Number::U64(a)), Field::Number(Number::U64(b))) => {
                    Field::Number(Number::U64(a | b))
                }
                _ => Field::Null,
            },
        }
    }
}

fn trim(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Member(path) => write!(f, "{path}"),
            Operand::Constant(value) => write!(f, "{value}"),
            Operand::Trim(inner) => write!(f, "{inner}.trim()"),
            Operand::Normalize(inner) => write!(f, "{inner}.trim().to_lowercase()"),
            Operand::Bits(inner) => write!(f, "bits({inner})"),
            Operand::BitOr(left, right) => write!(f, "({left} | {right})"),
        }
    }
}

/// A boolean expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(bool),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    Compare {
        op: CompareOp,
        left: Operand,
        right: Operand,
    },
    Call {
        method: Method,
        target: Operand,
        argument: Operand,
    },
    /// `items` contains the value of `item`.
    ListContains {
        items: Vec<Value>,
        item: Operand,
    },
    Spatial {
        op: SpatialOp,
        target: Operand,
        geometry: Geometry<f64>,
        distance: Option<f64>,
    },
    /// Some element of the collection satisfies `predicate`.
    Any {
        collection: MemberPath,
        predicate: Box<Expr>,
    },
}

impl Expr {
    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn compare(op: CompareOp, left: Operand, right: Operand) -> Self {
        Expr::Compare { op, left, right }
    }

    pub fn call(method: Method, target: Operand, argument: Operand) -> Self {
        Expr::Call {
            method,
            target,
            argument,
        }
    }

    /// Evaluates the expression against `record`.
    pub fn eval(&self, record: &dyn Record) -> bool {
        match self {
            Expr::Constant(value) => *value,
            Expr::And(left, right) => left.eval(record) && right.eval(record),
            Expr::Or(left, right) => left.eval(record) || right.eval(record),
            Expr::Not(inner) => !inner.eval(record),
            Expr::Compare { op, left, right } => op.test(&left.eval(record), &right.eval(record)),
            Expr::Call {
                method,
                target,
                argument,
            } => method.test(&target.eval(record), &argument.eval(record)),
            Expr::ListContains { items, item } => {
                let item = item.eval(record);
                items.iter().any(|candidate| candidate.as_field().loose_eq(&item))
            }
            Expr::Spatial {
                op,
                target,
                geometry,
                distance,
            } => match target.eval(record) {
                Field::Geometry(subject) => op.test(&subject, geometry, *distance),
                _ => false,
            },
            Expr::Any {
                collection,
                predicate,
            } => match collection.eval(record) {
                Field::Records(elements) => elements.iter().any(|element| predicate.eval(*element)),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::And(left, right) => write!(f, "({left} && {right})"),
            Expr::Or(left, right) => write!(f, "({left} || {right})"),
            Expr::Not(inner) => write!(f, "!{inner}"),
            Expr::Compare { op, left, right } => write!(f, "({left} {} {right})", op.as_str()),
            Expr::Call {
                method,
                target,
                argument,
            } => write!(f, "{target}.{}({argument})", method.as_str()),
            Expr::ListContains { items, item } => {
                write!(f, "{}.contains({item})", Value::List(items.clone()))
            }
            Expr::Spatial {
                op,
                target,
                geometry,
                distance,
            } => {
                let geometry = Value::Geometry(geometry.clone());
                match distance {
                    Some(distance) => write!(f, "{target}.{op}({geometry}, {distance})"),
                    None => write!(f, "{target}.{op}({geometry})"),
                }
            }
            Expr::Any {
                collection,
                predicate,
            } => write!(f, "{collection}.any(|i| {predicate})"),
        }
    }
}
