use async_trait::async_trait;
use cadence_core::connector::{CadenceConnector, CatalogProvider, SeriesProvider};
use cadence_core::{CadenceError, CatalogPage, CatalogQuery, Observation, PeriodKey, SeriesId};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Identifiers served by [`MockConnector`].
pub const FIXTURE_IDS: &[&str] = &[
    "CUUR0000SA0",
    "CUSR0000SA0",
    "LNS14000000",
    "LNS11300000",
    "CIU1020000000000I",
];

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// The identifier (or search keyword) `FAIL` fails with a connector error and
/// `TIMEOUT` sleeps long enough to trip a short provider timeout.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the fixture connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(key: &str, capability: &'static str) -> Result<(), CadenceError> {
        match key {
            "FAIL" => Err(CadenceError::connector(
                "cadence-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Short enough to keep tests quick, long enough for a tight provider timeout.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl CadenceConnector for MockConnector {
    fn name(&self) -> &'static str {
        "cadence-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        Some(self as &dyn CatalogProvider)
    }
}

#[async_trait]
impl SeriesProvider for MockConnector {
    async fn fetch_series(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Result<Vec<Observation>, CadenceError> {
        Self::maybe_fail_or_timeout(id.as_str(), "series").await?;
        let mut obs = fixtures::series::by_id(id.as_str())
            .ok_or_else(|| CadenceError::not_found(format!("series {id}")))?;
        if let Some(start) = range_start {
            obs.retain(|o| o.period >= start);
        }
        Ok(obs)
    }
}

#[async_trait]
impl CatalogProvider for MockConnector {
    async fn catalog_page(&self, query: &CatalogQuery) -> Result<CatalogPage, CadenceError> {
        if let CatalogQuery::Search { keyword, .. } = query {
            Self::maybe_fail_or_timeout(keyword.trim(), "catalog").await?;
        }
        Ok(cadence_core::catalog::evaluate(
            &fixtures::catalog::entries(),
            query,
        ))
    }
}
