use cadence_core::{
    AlignedRow, CadenceError, ChartView, DerivedMetric, PeriodKey, PeriodMode, SeriesSummary,
    TableView, align_from, build_chart_view, build_table_view, resolve, summarize,
};
use serde::{Deserialize, Serialize};

use crate::{Cadence, Comparison};

/// Everything a comparison page renders, derived from one read of the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Aligned rows over the selected series.
    pub rows: Vec<AlignedRow>,
    /// Index of the active row; `None` when there is nothing to show.
    pub active: Option<usize>,
    /// Period of the active row.
    pub active_period: Option<PeriodKey>,
    /// Mode the snapshot was resolved in (after any fallback to live).
    pub mode: PeriodMode,
    /// Headline metrics per selected series at the active row.
    pub summaries: Vec<SeriesSummary>,
    /// Wide chart projection.
    pub chart: ChartView,
    /// Tall table projection.
    pub table: TableView,
    /// Non-fatal issues met while building the snapshot.
    pub warnings: Vec<CadenceError>,
}

impl Snapshot {
    /// The active row, if any.
    #[must_use]
    pub fn active_row(&self) -> Option<&AlignedRow> {
        self.active.and_then(|i| self.rows.get(i))
    }

    /// Summary for one series.
    #[must_use]
    pub fn summary(&self, id: &cadence_core::SeriesId) -> Option<&SeriesSummary> {
        self.summaries.iter().find(|s| &s.id == id)
    }
}

impl Cadence {
    /// Align what is stored for the selected series and derive every view.
    ///
    /// Identifiers with no stored observations contribute absent values. A
    /// frozen period with no row is dropped: `cmp` is switched back to live
    /// mode and the `NotFound` is reported in `warnings`. When no row has
    /// any value the snapshot has no active row and carries a `NoData`
    /// warning.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cadence::router",
            skip(self, cmp),
            fields(ids = cmp.ids().len(), mode = ?cmp.mode()),
        )
    )]
    pub async fn snapshot(&self, cmp: &mut Comparison) -> Snapshot {
        let lists = self.store.lists(cmp.ids(), cmp.range_start()).await;
        let rows = align_from(
            lists.iter().map(|(id, obs)| (id, &obs[..])),
            cmp.range_start(),
        );
        let mut warnings = Vec::new();

        let mut resolved = resolve(&rows, cmp.mode().explicit(), cmp.ids());
        if let Err(e @ CadenceError::NotFound { .. }) = resolved {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %e, "frozen period has no row; returning to live mode");
            warnings.push(e);
            cmp.unfreeze();
            resolved = resolve(&rows, None, cmp.ids());
        }
        let active = match resolved {
            Ok(at) => Some(at),
            Err(e) => {
                warnings.push(e);
                None
            }
        };

        let ppy = cmp.periodicity().periods_per_year();
        let summaries = match active {
            Some(at) => summarize(&rows, cmp.selection(), at, ppy),
            None => cmp
                .selection()
                .colored()
                .map(|(id, color)| SeriesSummary {
                    id: id.clone(),
                    color: color.cloned(),
                    metric: DerivedMetric::default(),
                })
                .collect(),
        };

        Snapshot {
            active_period: active.and_then(|i| rows.get(i)).map(|r| r.period),
            active,
            mode: cmp.mode(),
            summaries,
            chart: build_chart_view(&rows, cmp.selection()),
            table: build_table_view(&rows, cmp.selection(), cmp.table_order()),
            warnings,
            rows,
        }
    }

    /// Load missing series, then snapshot.
    ///
    /// Load warnings, and a load that hit the request deadline, are folded
    /// into the snapshot's `warnings`; whatever was stored in time is shown.
    pub async fn refresh(&self, cmp: &mut Comparison) -> Snapshot {
        let load_warnings = match self.load(cmp).await {
            Ok(report) => report.warnings,
            Err(e) => vec![e],
        };
        let mut snap = self.snapshot(cmp).await;
        let mut warnings = load_warnings;
        warnings.append(&mut snap.warnings);
        snap.warnings = warnings;
        snap
    }
}
