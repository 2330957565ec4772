//! Static member metadata for [`Model`] types and member path resolution.
//!
//! A [`Schema`] lists the members of a record type. Nested record and
//! collection members point at the schema of their element type through a
//! function pointer, so schemas of recursive types can reference each other.

use std::fmt;

use crate::error::{CriteriaError, Result};
use crate::kind::ValueKind;
use crate::traits::{FieldType, Model, Record};
use crate::value::Field;

/// Returns a schema; used for nested and collection members.
pub type SchemaFn = fn() -> &'static Schema;

/// Type of a member.
#[derive(Clone, Copy)]
pub enum MemberType {
    /// Scalar value of the given kind.
    Scalar(ValueKind),
    /// Nested record.
    Record(SchemaFn),
    /// Sequence of nested records.
    Collection(SchemaFn),
}

impl MemberType {
    /// Name of the member type, for error messages.
    pub fn describe(&self) -> String {
        match self {
            MemberType::Scalar(kind) => kind.to_string(),
            MemberType::Record(schema) => format!("record {}", schema().name()),
            MemberType::Collection(schema) => format!("collection of {}", schema().name()),
        }
    }
}

impl fmt::Debug for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberType::Scalar(kind) => f.debug_tuple("Scalar").field(kind).finish(),
            MemberType::Record(schema) => f.debug_tuple("Record").field(&schema().name()).finish(),
            MemberType::Collection(schema) => {
                f.debug_tuple("Collection").field(&schema().name()).finish()
            }
        }
    }
}

/// A named member of a record type.
#[derive(Debug, Clone)]
pub struct Member {
    name: &'static str,
    ty: MemberType,
    nullable: bool,
}

impl Member {
    /// Creates a member.
    pub fn new(name: &'static str, ty: MemberType, nullable: bool) -> Self {
        Member { name, ty, nullable }
    }

    /// Scalar member whose Rust type is `T`.
    pub fn scalar<T: FieldType>(name: &'static str) -> Self {
        Member::new(name, MemberType::Scalar(T::KIND), T::NULLABLE)
    }

    /// Nested record member of type `T` (or `Option<T>` when `nullable`).
    pub fn record<T: Model>(name: &'static str, nullable: bool) -> Self {
        Member::new(name, MemberType::Record(T::schema), nullable)
    }

    /// Collection of `T` records.
    pub fn collection<T: Model>(name: &'static str, nullable: bool) -> Self {
        Member::new(name, MemberType::Collection(T::schema), nullable)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ty(&self) -> MemberType {
        self.ty
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// Member metadata of a record type.
#[derive(Debug)]
pub struct Schema {
    name: &'static str,
    members: Vec<Member>,
}

impl Schema {
    /// Creates a schema for the type called `name`.
    pub fn new(name: &'static str, members: Vec<Member>) -> Self {
        Schema { name, members }
    }

    /// Name of the described type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Looks up a member by name.
    ///
    /// An exact match wins; otherwise the first member whose name matches
    /// ignoring ASCII case is returned.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .or_else(|| self.members.iter().find(|m| m.name.eq_ignore_ascii_case(name)))
    }

    /// Resolves a dotted member path against this schema.
    ///
    /// Every segment but the last must name a nested record member. `param`
    /// is the name the path is rendered with (`x` for the root type).
    pub fn resolve(&'static self, segments: &[&str], param: &'static str) -> Result<ResolvedMember> {
        let full_path = || segments.join(".");

        let (last, parents) = segments.split_last().ok_or_else(|| CriteriaError::InvalidPath {
            path: String::new(),
            reason: "path is empty",
        })?;

        let mut schema = self;
        let mut names = Vec::with_capacity(segments.len());
        let mut nullable = false;

        for segment in parents {
            let member = schema
                .member(segment)
                .ok_or_else(|| CriteriaError::MemberNotFound {
                    path: full_path(),
                    member: segment.to_string(),
                    type_name: schema.name,
                })?;
            match member.ty {
                MemberType::Record(next) => {
                    names.push(member.name);
                    nullable |= member.nullable;
                    schema = next();
                }
                _ => {
                    return Err(CriteriaError::NotARecord {
                        path: full_path(),
                        member: member.name.to_string(),
                        type_name: schema.name,
                    })
                }
            }
        }

        let member = schema
            .member(last)
            .ok_or_else(|| CriteriaError::MemberNotFound {
                path: full_path(),
                member: last.to_string(),
                type_name: schema.name,
            })?;
        names.push(member.name);

        Ok(ResolvedMember {
            path: MemberPath {
                param,
                segments: names,
            },
            owner: schema.name,
            ty: member.ty,
            nullable: nullable || member.nullable,
        })
    }
}

/// Result of resolving a dotted path.
#[derive(Debug, Clone)]
pub struct ResolvedMember {
    /// Path to the member, with canonical member names.
    pub path: MemberPath,
    /// Name of the type that declares the terminal member.
    pub owner: &'static str,
    /// Type of the terminal member.
    pub ty: MemberType,
    /// `true` if the terminal member, or any record on the way to it, can be
    /// null.
    pub nullable: bool,
}

/// A resolved chain of member accesses starting at a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPath {
    param: &'static str,
    segments: Vec<&'static str>,
}

impl MemberPath {
    pub fn param(&self) -> &'static str {
        self.param
    }

    pub fn segments(&self) -> &[&'static str] {
        &self.segments
    }

    /// Reads the member from `record`.
    ///
    /// A null or missing record on the way yields [`Field::Null`].
    pub fn eval<'a>(&self, record: &'a dyn Record) -> Field<'a> {
        let Some((last, parents)) = self.segments.split_last() else {
            return Field::Null;
        };

        let mut current = record;
        for segment in parents {
            match current.field(segment) {
                Some(Field::Record(next)) => current = next,
                _ => return Field::Null,
            }
        }

        current.field(last).unwrap_or(Field::Null)
    }
}

impl fmt::Display for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param)?;
        for segment in &self.segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}
