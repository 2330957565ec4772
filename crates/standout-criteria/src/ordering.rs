//! Sorting of filtered results.
//!
//! Provides [`Direction`] for sort direction and [`Ordering`] for sorting by
//! a member path with an optional tie-breaker.

use std::cmp::Ordering as CmpOrdering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CriteriaError, Result};
use crate::schema::{MemberPath, MemberType, Schema};
use crate::traits::{Model, Record};
use crate::value::Field;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Direction {
    pub fn is_asc(self) -> bool {
        matches!(self, Direction::Asc)
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Direction::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: CmpOrdering) -> CmpOrdering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "Asc",
            Direction::Desc => "Desc",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort order: a primary member with an optional tie-breaker, both compared
/// in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ordering {
    /// Member path of the primary sort key.
    pub by: String,
    /// Member path used to break ties on `by`.
    pub then_by: Option<String>,
    pub direction: Direction,
}

impl Default for Ordering {
    fn default() -> Self {
        Ordering {
            by: Ordering::DEFAULT_PROPERTY.to_string(),
            then_by: None,
            direction: Direction::Asc,
        }
    }
}

impl Ordering {
    /// Member sorted by when none is given.
    pub const DEFAULT_PROPERTY: &'static str = "Id";

    /// Creates an ordering on `by`.
    pub fn new(by: impl Into<String>, direction: Direction) -> Self {
        Ordering {
            by: by.into(),
            then_by: None,
            direction,
        }
    }

    /// Ascending ordering on `by`.
    pub fn asc(by: impl Into<String>) -> Self {
        Ordering::new(by, Direction::Asc)
    }

    /// Descending ordering on `by`.
    pub fn desc(by: impl Into<String>) -> Self {
        Ordering::new(by, Direction::Desc)
    }

    /// Sets the tie-breaking member.
    pub fn then_by(mut self, then_by: impl Into<String>) -> Self {
        self.then_by = Some(then_by.into());
        self
    }

    /// Sorts `items` by this ordering.
    ///
    /// The sort is stable. Null keys sort after every other value in
    /// ascending order. Fails if a key path does not resolve to a scalar
    /// member of `T`.
    pub fn sort<'a, T: Model>(&self, mut items: Vec<&'a T>) -> Result<Vec<&'a T>> {
        let schema = T::schema();
        let by = sort_key(schema, &self.by)?;
        let then_by = self
            .then_by
            .as_deref()
            .map(|path| sort_key(schema, path))
            .transpose()?;

        debug!(
            target_type = schema.name(),
            by = %by,
            direction = %self.direction,
            items = items.len(),
            "sorting results"
        );

        items.sort_by(|a, b| {
            let (a, b): (&dyn Record, &dyn Record) = (*a, *b);
            let primary = compare_fields(&by.eval(a), &by.eval(b));
            let ordering = match &then_by {
                Some(then_by) => primary.then_with(|| compare_fields(&then_by.eval(a), &then_by.eval(b))),
                None => primary,
            };
            self.direction.apply(ordering)
        });

        Ok(items)
    }
}

fn sort_key(schema: &'static Schema, path: &str) -> Result<MemberPath> {
    let segments: Vec<&str> = path.trim().split('.').map(str::trim).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(CriteriaError::InvalidPath {
            path: path.to_string(),
            reason: "empty path segment",
        });
    }

    let resolved = schema.resolve(&segments, "x")?;
    match resolved.ty {
        MemberType::Scalar(_) => Ok(resolved.path),
        _ => Err(CriteriaError::InvalidPath {
            path: path.to_string(),
            reason: "sort keys must be scalar members",
        }),
    }
}

/// Compares two member values.
///
/// Nulls sort last. Values that cannot be ordered against each other
/// compare equal, leaving their relative order to the stable sort.
pub fn compare_fields(a: &Field<'_>, b: &Field<'_>) -> CmpOrdering {
    match (a, b) {
        (Field::Null, Field::Null) => CmpOrdering::Equal,
        (Field::Null, _) => CmpOrdering::Greater,
        (_, Field::Null) => CmpOrdering::Less,
        _ => a.compare(b).unwrap_or(CmpOrdering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Member;
    use crate::traits::FieldType;
    use crate::value::Number;
    use once_cell::sync::Lazy;

    #[derive(Debug)]
    struct Row {
        id: u32,
        score: Option<i32>,
        name: String,
    }

    impl Record for Row {
        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "Id" => Some(self.id.field()),
                "Score" => Some(self.score.field()),
                "Name" => Some(self.name.field()),
                _ => None,
            }
        }
    }

    impl Model for Row {
        fn schema() -> &'static Schema {
            static SCHEMA: Lazy<Schema> = Lazy::new(|| {
                Schema::new(
                    "Row",
                    vec![
                        Member::scalar::<u32>("Id"),
                        Member::scalar::<Option<i32>>("Score"),
                        Member::scalar::<String>("Name"),
                    ],
                )
            });
            &SCHEMA
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 3, score: Some(10), name: "b".into() },
            Row { id: 1, score: None, name: "a".into() },
            Row { id: 2, score: Some(10), name: "a".into() },
            Row { id: 4, score: Some(5), name: "c".into() },
        ]
    }

    fn ids(sorted: &[&Row]) -> Vec<u32> {
        sorted.iter().map(|row| row.id).collect()
    }

    #[test]
    fn direction_apply() {
        assert_eq!(Direction::Asc.apply(CmpOrdering::Less), CmpOrdering::Less);
        assert_eq!(Direction::Desc.apply(CmpOrdering::Less), CmpOrdering::Greater);
        assert_eq!(Direction::Desc.apply(CmpOrdering::Equal), CmpOrdering::Equal);
    }

    #[test]
    fn default_orders_by_id_ascending() {
        let rows = rows();
        let sorted = Ordering::default().sort(rows.iter().collect()).unwrap();
        assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
    }

    #[test]
    fn nulls_sort_last_and_ties_are_stable() {
        let rows = rows();
        let sorted = Ordering::asc("Score").sort(rows.iter().collect()).unwrap();
        assert_eq!(ids(&sorted), vec![4, 3, 2, 1]);
    }

    #[test]
    fn then_by_breaks_ties() {
        let rows = rows();
        let sorted = Ordering::asc("score")
            .then_by("Name")
            .sort(rows.iter().collect())
            .unwrap();
        assert_eq!(ids(&sorted), vec![4, 2, 3, 1]);
    }

    #[test]
    fn descending_reverses_the_whole_comparison() {
        let rows = rows();
        let sorted = Ordering::desc("Score")
            .then_by("Name")
            .sort(rows.iter().collect())
            .unwrap();
        assert_eq!(ids(&sorted), vec![1, 3, 2, 4]);
    }

    #[test]
    fn unknown_sort_key_is_an_error() {
        let rows = rows();
        let err = Ordering::asc("Missing").sort(rows.iter().collect()).unwrap_err();
        assert!(matches!(err, CriteriaError::MemberNotFound { .. }));
    }

    #[test]
    fn compare_fields_puts_nulls_last() {
        let one = Field::Number(Number::I64(1));
        assert_eq!(compare_fields(&Field::Null, &one), CmpOrdering::Greater);
        assert_eq!(compare_fields(&one, &Field::Null), CmpOrdering::Less);
        assert_eq!(compare_fields(&Field::Null, &Field::Null), CmpOrdering::Equal);
    }

    #[test]
    fn serde_uses_pascal_case_keys() {
        let ordering: Ordering =
            serde_json::from_str(r#"{"By": "Name", "ThenBy": "Id", "Direction": "Desc"}"#).unwrap();
        assert_eq!(ordering, Ordering::desc("Name").then_by("Id"));

        let defaulted: Ordering = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, Ordering::default());
    }
}
