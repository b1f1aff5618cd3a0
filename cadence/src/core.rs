use std::sync::Arc;

use cadence_core::{
    CadenceConfig, CadenceConnector, CadenceError, ColorAssignment, Palette, Periodicity,
    SelectionSet,
};

use crate::comparison::Comparison;
use crate::store::ObservationStore;

/// Engine that routes fetches across registered providers and holds the
/// session's observation store.
pub struct Cadence {
    pub(crate) connectors: Vec<Arc<dyn CadenceConnector>>,
    pub(crate) cfg: CadenceConfig,
    pub(crate) store: ObservationStore,
}

/// Builder for constructing a `Cadence` engine with custom configuration.
pub struct CadenceBuilder {
    connectors: Vec<Arc<dyn CadenceConnector>>,
    cfg: CadenceConfig,
}

impl Default for CadenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CadenceBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: CadenceConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order. A connector answering
    /// `NotFound` passes the request on to the next one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn CadenceConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: CadenceConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for loading a whole comparison.
    ///
    /// When exceeded, `load` returns a `RequestTimeout` error. Fetches that
    /// completed before the deadline stay in the store.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Default capacity of selection sets created by this engine.
    #[must_use]
    pub const fn selection_capacity(mut self, capacity: usize) -> Self {
        self.cfg.selection_capacity = capacity;
        self
    }

    /// Default palette of selection sets created by this engine.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.cfg.palette = palette;
        self
    }

    /// Default colour assignment mode of selection sets created by this engine.
    #[must_use]
    pub const fn color_assignment(mut self, mode: ColorAssignment) -> Self {
        self.cfg.color_assignment = mode;
        self
    }

    /// Page size used when a catalog query asks for `limit == 0`.
    #[must_use]
    pub const fn catalog_page_limit(mut self, limit: usize) -> Self {
        self.cfg.catalog_page_limit = limit;
        self
    }

    /// Build the `Cadence` engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, or if the
    /// selection capacity, the palette or the catalog page limit is empty.
    pub fn build(self) -> Result<Cadence, CadenceError> {
        if self.connectors.is_empty() {
            return Err(CadenceError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.selection_capacity == 0 {
            return Err(CadenceError::InvalidArg(
                "selection capacity must be at least 1".to_string(),
            ));
        }
        if self.cfg.palette.is_empty() {
            return Err(CadenceError::InvalidArg(
                "palette must contain at least one colour".to_string(),
            ));
        }
        if self.cfg.catalog_page_limit == 0 {
            return Err(CadenceError::InvalidArg(
                "catalog page limit must be at least 1".to_string(),
            ));
        }

        Ok(Cadence {
            connectors: self.connectors,
            cfg: self.cfg,
            store: ObservationStore::new(),
        })
    }
}

/// Attribute a non-routing error to the connector that produced it.
pub fn tag_err(connector: &str, e: CadenceError) -> CadenceError {
    match e {
        e @ (CadenceError::NotFound { .. }
        | CadenceError::ProviderTimeout { .. }
        | CadenceError::Connector { .. }
        | CadenceError::RequestTimeout { .. }
        | CadenceError::AllProvidersTimedOut { .. }
        | CadenceError::AllProvidersFailed(_)) => e,
        other => CadenceError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Bound `fut` by an optional overall deadline.
///
/// On timeout returns `CadenceError::RequestTimeout("request")`; call sites
/// remap the label to their capability.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<std::time::Duration>,
    fut: F,
) -> Result<T, CadenceError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| CadenceError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Cadence {
    /// Start building a new `Cadence` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let cadence = cadence::Cadence::builder()
    ///     .with_connector(Arc::new(cadence_mock::MockConnector::new()))
    ///     .selection_capacity(8)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CadenceBuilder {
        CadenceBuilder::new()
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &CadenceConfig {
        &self.cfg
    }

    /// The session's observation store.
    #[must_use]
    pub const fn store(&self) -> &ObservationStore {
        &self.store
    }

    /// A fresh comparison context using the configured selection defaults.
    #[must_use]
    pub fn comparison(&self, periodicity: Periodicity) -> Comparison {
        Comparison::new(periodicity, SelectionSet::from_config(&self.cfg))
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cadence::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, CadenceError>
    where
        Fut: core::future::Future<Output = Result<T, CadenceError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CadenceError::provider_timeout(connector_name, capability)))
    }

    /// Try connectors in registration order until one succeeds.
    ///
    /// - `call` returns `None` for connectors lacking the capability; they are skipped.
    /// - Each attempt is bounded by the provider timeout.
    /// - `NotFound` falls through to the next connector.
    /// - If nothing succeeded, errors collapse via [`crate::collapse_errors`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cadence::core::fetch_first",
            skip(self, call),
            fields(capability = %capability, what = %not_found_what),
        )
    )]
    pub(crate) async fn fetch_first<T, F, Fut>(
        &self,
        capability: cadence_core::Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, CadenceError>
    where
        T: Send,
        F: Fn(Arc<dyn CadenceConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, CadenceError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<CadenceError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c)) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability.as_str(),
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e @ (CadenceError::NotFound { .. } | CadenceError::ProviderTimeout { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        Err(crate::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }
}
