//! Catalog queries and pages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SeriesMeta;

/// Categorical field → required value. An empty value places no constraint.
pub type Dimensions = BTreeMap<String, String>;

/// One of the three catalog access patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CatalogQuery {
    /// Case-insensitive substring search over descriptive text.
    Search {
        /// Keyword to look for.
        keyword: String,
        /// Maximum number of items to return.
        limit: usize,
    },
    /// AND-combination of equality filters over categorical fields.
    Filter {
        /// Required field values.
        dimensions: Dimensions,
        /// Maximum number of items to return.
        limit: usize,
        /// Number of matching items to skip.
        offset: usize,
    },
    /// Exhaustive pagination with optional filters.
    Browse {
        /// Number of matching items to skip.
        offset: usize,
        /// Maximum number of items to return.
        limit: usize,
        /// Optional required field values.
        filters: Option<Dimensions>,
    },
}

impl CatalogQuery {
    /// Build a keyword search.
    pub fn search(keyword: impl Into<String>, limit: usize) -> Self {
        Self::Search {
            keyword: keyword.into(),
            limit,
        }
    }

    /// Build a dimensional filter.
    #[must_use]
    pub const fn filter(dimensions: Dimensions, limit: usize, offset: usize) -> Self {
        Self::Filter {
            dimensions,
            limit,
            offset,
        }
    }

    /// Build a browse page request.
    #[must_use]
    pub const fn browse(offset: usize, limit: usize, filters: Option<Dimensions>) -> Self {
        Self::Browse {
            offset,
            limit,
            filters,
        }
    }

    /// Requested offset (`0` for searches).
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Search { .. } => 0,
            Self::Filter { offset, .. } | Self::Browse { offset, .. } => *offset,
        }
    }

    /// Requested page size.
    #[must_use]
    pub const fn limit(&self) -> usize {
        match self {
            Self::Search { limit, .. }
            | Self::Filter { limit, .. }
            | Self::Browse { limit, .. } => *limit,
        }
    }

    /// Short name of the access pattern for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Filter { .. } => "filter",
            Self::Browse { .. } => "browse",
        }
    }
}

/// One page of catalog results.
///
/// `total` counts every item matching the query, not only those on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Number of items matching the query across all pages.
    pub total: usize,
    /// Items on this page.
    pub items: Vec<SeriesMeta>,
    /// Offset the page starts at.
    pub offset: usize,
    /// Page size that was requested.
    pub limit: usize,
}

impl CatalogPage {
    /// An empty page echoing the requested window.
    #[must_use]
    pub const fn empty(offset: usize, limit: usize) -> Self {
        Self {
            total: 0,
            items: Vec::new(),
            offset,
            limit,
        }
    }

    /// True when more matching items exist past this page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len()) < self.total
    }
}
