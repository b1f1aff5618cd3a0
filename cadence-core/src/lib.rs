//! cadence-core
//!
//! Core types, traits, and the pure analytics kernel shared across the
//! cadence workspace.
//!
//! - `types`: the data model (period keys, observations, rows, catalog pages).
//! - `connector`: the `CadenceConnector` trait and capability provider traits.
//! - `timeseries`: fetch-boundary normalisation, temporal alignment, period
//!   selection and delta computation.
//! - `selection`: the capacity-bounded, coloured selection set.
//! - `catalog`: in-memory evaluation of catalog queries.
//! - `view`: chart and table projections of aligned rows.
//!
//! Everything outside `connector` is synchronous and free of side effects:
//! derived structures are rebuilt from inputs, never patched.
#![warn(missing_docs)]

/// In-memory evaluation of search / filter / browse queries.
pub mod catalog;
/// Connector capability traits and the primary `CadenceConnector` interface.
pub mod connector;
/// Ordered, capacity-bounded selection of series with colour assignment.
pub mod selection;
/// Time-series utilities for normalising, aligning, selecting and differencing.
pub mod timeseries;
pub mod types;
/// Chart and table projections of aligned rows.
pub mod view;

pub use connector::CadenceConnector;
pub use selection::{SelectionSet, Toggle};
pub use timeseries::align::{align, align_from};
pub use timeseries::delta::{compute_deltas, compute_series_deltas, percent_change};
pub use timeseries::normalize::normalize_observations;
pub use timeseries::select::{PeriodMode, resolve};
pub use types::*;
pub use view::{
    ChartRow, ChartSeries, ChartView, SeriesSummary, TableOrder, TableRow, TableView,
    build_chart_view, build_table_view, summarize,
};
#[cfg(feature = "dataframe")]
pub use view::ToDataFrame;
