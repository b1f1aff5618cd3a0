//! Report envelopes produced by the engine.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogPage;
use crate::error::CadenceError;
use crate::series::SeriesId;

/// Outcome of loading every identifier of a comparison.
///
/// Per-identifier failures never abort the load; they are collected in
/// `warnings` and the identifier simply contributes no observations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Identifiers fetched during this load, with the connector that served each.
    pub fetched: Vec<(SeriesId, String)>,
    /// Identifiers that were already in the observation store.
    pub cached: Vec<SeriesId>,
    /// Non-fatal issues, one per failed identifier.
    pub warnings: Vec<CadenceError>,
}

impl LoadReport {
    /// True when no identifier failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Outcome of a catalog query.
///
/// On failure the page is empty and `error` is set; re-issuing the same query
/// is the retry path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogReport {
    /// Resulting page (empty on failure).
    pub page: CatalogPage,
    /// Failure that produced an empty page, if any.
    pub error: Option<CadenceError>,
}

impl CatalogReport {
    /// True when the query failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
