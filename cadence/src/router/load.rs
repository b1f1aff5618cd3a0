use cadence_core::{CadenceError, Capability, LoadReport, PeriodKey, SeriesId};

use crate::{Cadence, Comparison};

impl Cadence {
    /// Fetch every selected series of `cmp` that is not stored yet.
    ///
    /// Fetches run concurrently, each bounded by the provider timeout. A
    /// failed identifier is reported in `warnings` and does not affect the
    /// others. There is no cancellation: results arriving for identifiers
    /// deselected in the meantime are still stored.
    ///
    /// # Errors
    /// Only `RequestTimeout("load:series")`, when the configured request
    /// deadline elapses before all fetches finish. Fetches completed before
    /// the deadline remain stored.
    pub async fn load(&self, cmp: &Comparison) -> Result<LoadReport, CadenceError> {
        self.load_ids(cmp.ids(), cmp.range_start()).await
    }

    /// [`Cadence::load`] for an explicit identifier list.
    ///
    /// Duplicate identifiers are fetched once.
    ///
    /// # Errors
    /// See [`Cadence::load`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cadence::router",
            skip(self, ids),
            fields(ids = ids.len()),
        )
    )]
    pub async fn load_ids(
        &self,
        ids: &[SeriesId],
        range_start: Option<PeriodKey>,
    ) -> Result<LoadReport, CadenceError> {
        let mut report = LoadReport::default();
        let mut pending: Vec<&SeriesId> = Vec::new();
        for id in ids {
            if report.cached.contains(id) || pending.contains(&id) {
                continue;
            }
            if self.store.contains(id, range_start).await {
                report.cached.push(id.clone());
            } else {
                pending.push(id);
            }
        }

        let tasks = pending.into_iter().map(|id| async move {
            let res = self.fetch_and_store(id, range_start).await;
            (id, res)
        });

        let results = crate::join_with_deadline(tasks, self.cfg.request_timeout)
            .await
            .map_err(|_| CadenceError::request_timeout(Capability::Load.as_str()))?;

        for (id, res) in results {
            match res {
                Ok((connector, _)) => report.fetched.push((id.clone(), connector.to_string())),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(id = %id, error = %e, "series fetch failed; it will render as absent");
                    report.warnings.push(e);
                }
            }
        }
        Ok(report)
    }
}
