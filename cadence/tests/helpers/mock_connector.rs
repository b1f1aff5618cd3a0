#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cadence::{
    CadenceConnector, CadenceError, CatalogPage, CatalogQuery, Observation, PeriodKey, SeriesId,
};
use cadence_core::connector::{CatalogProvider, SeriesProvider};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// Behavior is tailored per test through the closures below; a connector
/// without a closure for a capability does not advertise it.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub series_fn: Option<
        Arc<
            dyn Fn(&SeriesId, Option<PeriodKey>) -> Result<Vec<Observation>, CadenceError>
                + Send
                + Sync,
        >,
    >,
    pub catalog_fn:
        Option<Arc<dyn Fn(&CatalogQuery) -> Result<CatalogPage, CadenceError> + Send + Sync>>,
    pub series_calls: AtomicUsize,
    pub catalog_calls: AtomicUsize,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::default()
    }

    pub fn series_calls(&self) -> usize {
        self.series_calls.load(Ordering::SeqCst)
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    async fn maybe_delay(&self) {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[derive(Default)]
pub struct MockConnectorBuilder {
    name: Option<&'static str>,
    delay_ms: u64,
    series_fn: Option<
        Arc<
            dyn Fn(&SeriesId, Option<PeriodKey>) -> Result<Vec<Observation>, CadenceError>
                + Send
                + Sync,
        >,
    >,
    catalog_fn:
        Option<Arc<dyn Fn(&CatalogQuery) -> Result<CatalogPage, CadenceError> + Send + Sync>>,
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_series_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&SeriesId, Option<PeriodKey>) -> Result<Vec<Observation>, CadenceError>
            + Send
            + Sync
            + 'static,
    {
        self.series_fn = Some(Arc::new(f));
        self
    }

    /// Serve a fixed table of identifier → observations; anything else is `NotFound`.
    pub fn with_series_table(self, table: Vec<(&'static str, Vec<Observation>)>) -> Self {
        self.with_series_fn(move |id, start| {
            table
                .iter()
                .find(|(k, _)| *k == id.as_str())
                .map(|(_, obs)| {
                    obs.iter()
                        .filter(|o| start.is_none_or(|s| o.period >= s))
                        .cloned()
                        .collect()
                })
                .ok_or_else(|| CadenceError::not_found(format!("series {id}")))
        })
    }

    pub fn with_catalog_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&CatalogQuery) -> Result<CatalogPage, CadenceError> + Send + Sync + 'static,
    {
        self.catalog_fn = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name.unwrap_or("mock"),
            delay_ms: self.delay_ms,
            series_fn: self.series_fn,
            catalog_fn: self.catalog_fn,
            series_calls: AtomicUsize::new(0),
            catalog_calls: AtomicUsize::new(0),
        })
    }
}

impl CadenceConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        self.series_fn
            .as_ref()
            .map(|_| self as &dyn SeriesProvider)
    }

    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        self.catalog_fn
            .as_ref()
            .map(|_| self as &dyn CatalogProvider)
    }
}

#[async_trait]
impl SeriesProvider for MockConnector {
    async fn fetch_series(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Result<Vec<Observation>, CadenceError> {
        self.series_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_delay().await;
        match &self.series_fn {
            Some(f) => f(id, range_start),
            None => Err(CadenceError::unsupported("series")),
        }
    }
}

#[async_trait]
impl CatalogProvider for MockConnector {
    async fn catalog_page(&self, query: &CatalogQuery) -> Result<CatalogPage, CadenceError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.maybe_delay().await;
        match &self.catalog_fn {
            Some(f) => f(query),
            None => Err(CadenceError::unsupported("catalog")),
        }
    }
}
