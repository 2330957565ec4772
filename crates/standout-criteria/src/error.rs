//! Error types for the criteria crate.

use thiserror::Error;

use crate::op::OperationType;

/// Errors that can occur when constructing criteria or compiling them into
/// predicates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    /// A required argument was missing or malformed.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// Operator is not valid for the given value or member type.
    #[error("operation '{operation}' is not supported for {type_name} values")]
    UnsupportedOperation {
        operation: OperationType,
        type_name: String,
    },

    /// A path segment does not name a member of the type it is looked up on.
    #[error("member '{member}' not found on type '{type_name}' (path '{path}')")]
    MemberNotFound {
        path: String,
        member: String,
        type_name: &'static str,
    },

    /// A dotted path walks through a member that is not a nested record.
    #[error("member '{member}' on type '{type_name}' is not a nested record (path '{path}')")]
    NotARecord {
        path: String,
        member: String,
        type_name: &'static str,
    },

    /// The base of a bracketed path is not a collection member.
    #[error("member '{member}' on type '{type_name}' is not a collection (path '{path}')")]
    NotACollection {
        path: String,
        member: String,
        type_name: &'static str,
    },

    /// A property path could not be parsed.
    #[error("invalid property path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// A pagination field is outside its accepted range.
    #[error("pagination {field} must be between {min} and {max}, got {value}")]
    InvalidPagination {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Result type for criteria operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
