//! Cadence compares several economic time series side by side.
//!
//! Overview
//! - Fetches observation lists through connectors implementing the
//!   `cadence_core` contracts, trying them in registration order.
//! - Keeps every fetched list in a session store; nothing is fetched twice.
//! - Aligns the selected series onto one period axis, resolves the active
//!   period (latest data, or a frozen historical period), and derives
//!   period-over-period and year-over-year changes.
//! - Projects the result into chart (wide) and table (tall) views.
//! - Answers catalog search, filter and browse queries.
//!
//! Key behaviors
//! - A failing series never fails the comparison; it is reported as a warning
//!   and renders as absent values.
//! - A frozen period that has no row is dropped and the comparison returns
//!   to live mode.
//! - Percent changes against a zero or missing reference are `None`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cadence::{Cadence, Periodicity, SeriesId};
//!
//! let cadence = Cadence::builder()
//!     .with_connector(Arc::new(cadence_mock::MockConnector::new()))
//!     .build()?;
//!
//! let mut cmp = cadence.comparison(Periodicity::Monthly);
//! cmp.toggle(&SeriesId::from("CUUR0000SA0"));
//! cmp.toggle(&SeriesId::from("LNS14000000"));
//!
//! let snap = cadence.refresh(&mut cmp).await;
//! for s in &snap.summaries {
//!     println!("{}: {:?} ({:?}% y/y)", s.id, s.metric.latest, s.metric.year_change_pct);
//! }
//! ```
#![warn(missing_docs)]

mod comparison;
pub(crate) mod core;
mod router;
mod snapshot;
mod store;

pub use comparison::Comparison;
pub use crate::core::{Cadence, CadenceBuilder};
pub use router::util::{collapse_errors, join_with_deadline};
pub use snapshot::Snapshot;
pub use store::ObservationStore;

pub use cadence_types::{CatalogReport, LoadReport};

// Re-export core types for convenience
pub use cadence_core::{
    AlignedRow, CadenceConfig, CadenceConnector, CadenceError, Capability, CatalogPage,
    CatalogQuery, ChartRow, ChartSeries, ChartView, Color, ColorAssignment, DerivedMetric,
    Dimensions, Observation, Palette, PeriodKey, PeriodMode, Periodicity, SelectionSet,
    SeriesId, SeriesMeta, SeriesSummary, Subperiod, TableOrder, TableRow, TableView, Toggle,
};

#[cfg(feature = "dataframe")]
pub use cadence_core::ToDataFrame;
