use async_trait::async_trait;

use crate::{CadenceError, CatalogPage, CatalogQuery, Observation, PeriodKey, SeriesId};

/// Focused role trait for connectors that serve observation lists.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch the observations of one series, optionally starting at `range_start`.
    ///
    /// Implementations may return observations in any order and may include
    /// duplicates; the engine normalises the list before storing it. Unknown
    /// identifiers should fail with `CadenceError::NotFound` so that the next
    /// connector gets a chance.
    async fn fetch_series(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Result<Vec<Observation>, CadenceError>;
}

/// Focused role trait for connectors that expose a series catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Answer a search, filter, or browse query with one page of results.
    async fn catalog_page(&self, query: &CatalogQuery) -> Result<CatalogPage, CadenceError>;
}

/// Main connector trait implemented by data-access crates. Exposes capability discovery.
pub trait CadenceConnector: Send + Sync {
    /// A stable identifier used in logs, errors, and load reports.
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise series capability by returning a usable trait object reference when supported.
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        None
    }

    /// Advertise catalog capability by returning a usable trait object reference when supported.
    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        None
    }
}
