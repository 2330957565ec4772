//! The query envelope: filter, then sort, then paginate.
//!
//! A [`Query`] bundles an [`Ordering`], a [`Pagination`] and a criteria
//! payload `C`. The payload only has to produce a [`CriteriaExpression`]
//! through [`QueryCriteria`], so request types can carry typed filter fields
//! and translate them into criteria.
//!
//! # Example
//!
//! ```
//! use serde::Deserialize;
//! use standout_criteria::{CriteriaExpression, Query, QueryCriteria, Result};
//!
//! #[derive(Default, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct CustomerFilter {
//!     name: Option<String>,
//! }
//!
//! impl QueryCriteria for CustomerFilter {
//!     fn criteria_expression(&self) -> Result<CriteriaExpression> {
//!         let expression = CriteriaExpression::new();
//!         match &self.name {
//!             Some(name) => expression.starts_with("Name", name.as_str()),
//!             None => Ok(expression),
//!         }
//!     }
//! }
//!
//! let query: Query<CustomerFilter> = serde_json::from_str(
//!     r#"{ "Order": { "By": "Name", "Direction": "Desc" },
//!          "Paging": { "Number": 2, "Count": 10 },
//!          "Criteria": { "Name": "Jo" } }"#,
//! )
//! .unwrap();
//! assert_eq!(query.paging.skip(), 10);
//! assert_eq!(query.criteria.criteria_expression()?.criteria().len(), 1);
//! # Ok::<(), standout_criteria::CriteriaError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::CriteriaBuilder;
use crate::error::Result;
use crate::expression::CriteriaExpression;
use crate::ordering::Ordering;
use crate::pagination::Pagination;
use crate::traits::Model;

/// Produces the criteria a query filters by.
pub trait QueryCriteria {
    fn criteria_expression(&self) -> Result<CriteriaExpression>;
}

/// No criteria: every item matches.
impl QueryCriteria for () {
    fn criteria_expression(&self) -> Result<CriteriaExpression> {
        Ok(CriteriaExpression::new())
    }
}

impl QueryCriteria for CriteriaExpression {
    fn criteria_expression(&self) -> Result<CriteriaExpression> {
        Ok(self.clone())
    }
}

/// Criteria plus ordering and paging for a collection of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Query<C = ()> {
    #[serde(default)]
    pub order: Ordering,
    #[serde(default)]
    pub paging: Pagination,
    #[serde(default)]
    pub criteria: C,
}

impl<C> Query<C> {
    /// Creates a query with default ordering and paging.
    pub fn new(criteria: C) -> Self {
        Query {
            order: Ordering::default(),
            paging: Pagination::default(),
            criteria,
        }
    }

    pub fn order(mut self, order: Ordering) -> Self {
        self.order = order;
        self
    }

    pub fn paging(mut self, paging: Pagination) -> Self {
        self.paging = paging;
        self
    }
}

impl<C: QueryCriteria> Query<C> {
    /// Runs the query over `items` with default builder options.
    pub fn apply<'a, T: Model>(&self, items: &'a [T]) -> Result<Vec<&'a T>> {
        self.apply_with(&CriteriaBuilder::new(), items)
    }

    /// Runs the query over `items`, compiling criteria with `builder`.
    ///
    /// Filtering, sorting and paging always happen in that order.
    pub fn apply_with<'a, T: Model>(
        &self,
        builder: &CriteriaBuilder,
        items: &'a [T],
    ) -> Result<Vec<&'a T>> {
        let expression = self.criteria.criteria_expression()?;
        let predicate = builder.build::<T>(&expression)?;

        let matched = predicate.filter(items);
        debug!(
            target_type = T::schema().name(),
            total = items.len(),
            matched = matched.len(),
            "applying query"
        );

        let sorted = self.order.sort(matched)?;
        Ok(self.paging.page(sorted))
    }
}
