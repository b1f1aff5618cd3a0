use std::collections::HashMap;
use std::sync::Arc;

use cadence_core::{Observation, PeriodKey, SeriesId, normalize_observations};
use tokio::sync::RwLock;

type Key = (SeriesId, Option<PeriodKey>);

/// Session cache of fetched observation lists.
///
/// Entries are keyed by identifier and requested range start, created on the
/// first successful fetch and never evicted or replaced. Every stored list is
/// sorted ascending by period with unique periods.
#[derive(Debug, Default)]
pub struct ObservationStore {
    inner: RwLock<HashMap<Key, Arc<[Observation]>>>,
}

impl ObservationStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored observations for `id`.
    ///
    /// Prefers the entry fetched for exactly `range_start`; otherwise falls
    /// back to a full-history entry trimmed to periods at or after
    /// `range_start`.
    pub async fn get(
        &self,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Option<Arc<[Observation]>> {
        let map = self.inner.read().await;
        Self::lookup(&map, id, range_start)
    }

    /// True when [`ObservationStore::get`] would return an entry.
    pub async fn contains(&self, id: &SeriesId, range_start: Option<PeriodKey>) -> bool {
        self.get(id, range_start).await.is_some()
    }

    /// Normalise and store a fetched list.
    ///
    /// If an entry for the same key already exists it is kept and returned
    /// instead; late duplicate fetches never overwrite.
    pub async fn insert(
        &self,
        id: SeriesId,
        range_start: Option<PeriodKey>,
        observations: Vec<Observation>,
    ) -> Arc<[Observation]> {
        let normalized: Arc<[Observation]> = normalize_observations(observations).into();
        let mut map = self.inner.write().await;
        Arc::clone(map.entry((id, range_start)).or_insert(normalized))
    }

    /// Stored lists for each of `ids`, in order; identifiers without an
    /// entry get an empty list.
    pub async fn lists(
        &self,
        ids: &[SeriesId],
        range_start: Option<PeriodKey>,
    ) -> Vec<(SeriesId, Arc<[Observation]>)> {
        let map = self.inner.read().await;
        ids.iter()
            .map(|id| {
                let obs = Self::lookup(&map, id, range_start).unwrap_or_else(|| Arc::from([]));
                (id.clone(), obs)
            })
            .collect()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// True when nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    fn lookup(
        map: &HashMap<Key, Arc<[Observation]>>,
        id: &SeriesId,
        range_start: Option<PeriodKey>,
    ) -> Option<Arc<[Observation]>> {
        if let Some(hit) = map.get(&(id.clone(), range_start)) {
            return Some(Arc::clone(hit));
        }
        let start = range_start?;
        let full = map.get(&(id.clone(), None))?;
        let from = full.partition_point(|o| o.period < start);
        if from == 0 {
            return Some(Arc::clone(full));
        }
        Some(Arc::from(&full[from..]))
    }
}
