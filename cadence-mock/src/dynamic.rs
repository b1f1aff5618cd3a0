use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cadence_core::connector::{CadenceConnector, CatalogProvider, SeriesProvider};
use cadence_core::{CadenceError, CatalogPage, CatalogQuery, Observation, PeriodKey, SeriesId};

/// Scripted outcome of one mocked provider call.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Answer with the value.
    Return(T),
    /// Answer with the value after a delay.
    Delay(Duration, T),
    /// Answer with the error.
    Fail(CadenceError),
    /// Never answer; exercises provider timeouts.
    Hang,
}

impl<T> MockBehavior<T> {
    async fn run(self) -> Result<T, CadenceError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::Delay(d, v) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Self::Fail(e) => Err(e),
            Self::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct InternalState {
    series_rules: HashMap<SeriesId, MockBehavior<Vec<Observation>>>,
    catalog_rule: Option<MockBehavior<CatalogPage>>,
    series_requests: Vec<(SeriesId, Option<PeriodKey>)>,
    catalog_requests: Vec<CatalogQuery>,
}

/// Test-side handle that scripts a [`DynamicMockConnector`] and reads its request log.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch_series` calls for a specific identifier.
    ///
    /// Identifiers without a rule answer `NotFound`.
    pub async fn set_series_behavior(
        &self,
        id: impl Into<SeriesId>,
        behavior: MockBehavior<Vec<Observation>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.series_rules.insert(id.into(), behavior);
    }

    /// Set the behavior for every `catalog_page` call.
    ///
    /// Without a rule, catalog calls fail as unsupported.
    pub async fn set_catalog_behavior(&self, behavior: MockBehavior<CatalogPage>) {
        let mut guard = self.state.lock().await;
        guard.catalog_rule = Some(behavior);
    }

    /// Every `fetch_series` call received so far, in order.
    pub async fn series_requests(&self) -> Vec<(SeriesId, Option<PeriodKey>)> {
        self.state.lock().await.series_requests.clone()
    }

    /// Number of `fetch_series` calls received for `id`.
    pub async fn fetch_count(&self, id: &SeriesId) -> usize {
        let guard = self.state.lock().await;
        guard.series_requests.iter().filter(|(r, _)| r == id).count()
    }

    /// Every `catalog_page` call received so far, in order.
    pub async fn catalog_requests(&self) -> Vec<CatalogQuery> {
        self.state.lock().await.catalog_requests.clone()
    }

    /// Forget every scripted outcome and logged request.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.series_rules.clear();
        guard.catalog_rule = None;
        guard.series_requests.clear();
        guard.catalog_requests.clear();
    }
}

/// Series and catalog connector whose answers are scripted through a [`DynamicMockController`].
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// A connector named `name` and the controller scripting it.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn CadenceConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn CadenceConnector>, controller)
    }
}

impl CadenceConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        Some(self as &dyn CatalogProvider)
    }
}

#[async_trait]
impl SeriesProvider for DynamicMockConnector {
    async fn fetch_series(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Result<Vec<Observation>, CadenceError> {
        // Log and snapshot the rule without holding the lock across the behavior.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.series_requests.push((id.clone(), range_start));
            guard.series_rules.get(id).cloned()
        };

        match behavior {
            Some(b) => b.run().await,
            None => Err(CadenceError::not_found(format!("series {id}"))),
        }
    }
}

#[async_trait]
impl CatalogProvider for DynamicMockConnector {
    async fn catalog_page(&self, query: &CatalogQuery) -> Result<CatalogPage, CadenceError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.catalog_requests.push(query.clone());
            guard.catalog_rule.clone()
        };

        match behavior {
            Some(b) => b.run().await,
            None => Err(CadenceError::unsupported("catalog")),
        }
    }
}
