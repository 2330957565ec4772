//! Page selection over sorted results.

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};

/// A validated page request.
///
/// Pages are numbered from 1. `skip` overrides the offset derived from the
/// page number when present.
///
/// # Example
///
/// ```
/// use standout_criteria::Pagination;
///
/// let page = Pagination::new(2, 10)?;
/// assert_eq!(page.skip(), 10);
///
/// let items: Vec<u32> = page.page((0..35).collect());
/// assert_eq!(items, (10..20).collect::<Vec<_>>());
/// # Ok::<(), standout_criteria::CriteriaError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "RawPagination")]
pub struct Pagination {
    number: usize,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip: Option<usize>,
}

impl Pagination {
    pub const DEFAULT_NUMBER: usize = 1;
    pub const DEFAULT_COUNT: usize = 25;
    /// Largest accepted page size.
    pub const MAX_COUNT: usize = 25_000;

    /// Creates a page request.
    ///
    /// Fails if `number` is zero or `count` is outside `1..=MAX_COUNT`.
    pub fn new(number: usize, count: usize) -> Result<Self> {
        if number < 1 {
            return Err(CriteriaError::InvalidPagination {
                field: "Number",
                value: number,
                min: 1,
                max: usize::MAX,
            });
        }
        if !(1..=Pagination::MAX_COUNT).contains(&count) {
            return Err(CriteriaError::InvalidPagination {
                field: "Count",
                value: count,
                min: 1,
                max: Pagination::MAX_COUNT,
            });
        }
        Ok(Pagination {
            number,
            count,
            skip: None,
        })
    }

    /// Overrides the number of items skipped.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of items before the page: the explicit skip, or
    /// `(number - 1) * count`.
    pub fn skip(&self) -> usize {
        self.skip
            .unwrap_or_else(|| (self.number - 1).saturating_mul(self.count))
    }

    /// Selects the page from `items`.
    pub fn page<T>(&self, items: Vec<T>) -> Vec<T> {
        self.paginate(items).collect()
    }

    /// Selects the page from an iterator.
    pub fn paginate<I: IntoIterator>(&self, items: I) -> impl Iterator<Item = I::Item> {
        items.into_iter().skip(self.skip()).take(self.count)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            number: Pagination::DEFAULT_NUMBER,
            count: Pagination::DEFAULT_COUNT,
            skip: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawPagination {
    #[serde(default = "default_number")]
    number: usize,
    #[serde(default = "default_count")]
    count: usize,
    #[serde(default)]
    skip: Option<usize>,
}

fn default_number() -> usize {
    Pagination::DEFAULT_NUMBER
}

fn default_count() -> usize {
    Pagination::DEFAULT_COUNT
}

impl TryFrom<RawPagination> for Pagination {
    type Error = CriteriaError;

    fn try_from(raw: RawPagination) -> Result<Self> {
        let pagination = Pagination::new(raw.number, raw.count)?;
        Ok(match raw.skip {
            Some(skip) => pagination.with_skip(skip),
            None => pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let page = Pagination::default();
        assert_eq!(page.number(), 1);
        assert_eq!(page.count(), 25);
        assert_eq!(page.skip(), 0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            Pagination::new(0, 10),
            Err(CriteriaError::InvalidPagination { field: "Number", .. })
        ));
        assert!(matches!(
            Pagination::new(1, 0),
            Err(CriteriaError::InvalidPagination { field: "Count", .. })
        ));
        assert!(Pagination::new(1, Pagination::MAX_COUNT).is_ok());
        assert!(Pagination::new(1, Pagination::MAX_COUNT + 1).is_err());
    }

    #[test]
    fn explicit_skip_overrides_page_number() {
        let page = Pagination::new(3, 5).unwrap().with_skip(1);
        assert_eq!(page.skip(), 1);
        assert_eq!(page.page((0..10).collect::<Vec<_>>()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = Pagination::new(5, 10).unwrap();
        assert!(page.page((0..20).collect::<Vec<u8>>()).is_empty());
    }

    #[test]
    fn last_page_is_partial() {
        let page = Pagination::new(2, 15).unwrap();
        assert_eq!(page.paginate(0..20).count(), 5);
    }

    #[test]
    fn deserialization_validates() {
        let page: Pagination = serde_json::from_str(r#"{"Number": 2, "Count": 50}"#).unwrap();
        assert_eq!(page, Pagination::new(2, 50).unwrap());

        let defaulted: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(defaulted, Pagination::default());

        let err = serde_json::from_str::<Pagination>(r#"{"Count": 30000}"#).unwrap_err();
        assert!(err.to_string().contains("Count"));
    }

    #[test]
    fn serializes_with_pascal_case_keys() {
        let json = serde_json::to_string(&Pagination::new(1, 10).unwrap().with_skip(3)).unwrap();
        assert_eq!(json, r#"{"Number":1,"Count":10,"Skip":3}"#);
    }
}
