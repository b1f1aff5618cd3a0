use std::sync::Arc;

use cadence_core::{CadenceError, Capability, Observation, PeriodKey, SeriesId};

use crate::Cadence;

impl Cadence {
    /// Observations of one series, fetched on first use and served from the
    /// store afterwards.
    ///
    /// Connectors are tried in registration order; the first success is
    /// normalised (sorted ascending, one observation per period) and stored.
    ///
    /// # Errors
    /// `NotFound` when every connector reports the identifier unknown,
    /// `Unsupported` when no connector serves series, otherwise the
    /// collapsed provider failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cadence::router",
            skip(self),
            fields(id = %id),
        )
    )]
    pub async fn series(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Result<Arc<[Observation]>, CadenceError> {
        if let Some(hit) = self.store.get(id, range_start).await {
            return Ok(hit);
        }
        self.fetch_and_store(id, range_start)
            .await
            .map(|(_, obs)| obs)
    }

    /// Fetch from connectors regardless of the store, then insert.
    ///
    /// Returns the serving connector's name with the stored list. When a
    /// concurrent fetch stored the same key first, that earlier list is
    /// returned.
    pub(crate) async fn fetch_and_store(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Result<(&'static str, Arc<[Observation]>), CadenceError> {
        let (name, raw) = self
            .fetch_first(Capability::Series, format!("series {id}"), |c| {
                c.as_series_provider()?;
                let id = id.clone();
                Some(async move {
                    match c.as_series_provider() {
                        Some(p) => p
                            .fetch_series(&id, range_start)
                            .await
                            .map(|obs| (c.name(), obs)),
                        None => Err(CadenceError::connector(
                            c.name(),
                            "missing series capability during call",
                        )),
                    }
                })
            })
            .await?;
        let stored = self.store.insert(id.clone(), range_start, raw).await;
        Ok((name, stored))
    }
}
