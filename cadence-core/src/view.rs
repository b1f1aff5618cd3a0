use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AlignedRow, Color, DerivedMetric, PeriodKey, SelectionSet, SeriesId, compute_deltas};

/// One plotted series of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series identifier.
    pub id: SeriesId,
    /// Line colour; `None` only with an empty palette.
    pub color: Option<Color>,
}

/// One x-axis position of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Period of the row.
    pub period: PeriodKey,
    /// Axis label.
    pub label: String,
    /// Value per selected series; gaps are `None`.
    pub values: BTreeMap<SeriesId, Option<f64>>,
}

/// Wide, chart-ready projection: one row per period, one column per series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartView {
    /// Plotted series in selection order.
    pub series: Vec<ChartSeries>,
    /// Rows in ascending period order.
    pub rows: Vec<ChartRow>,
}

/// Row order of a table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableOrder {
    /// Oldest period first.
    Chronological,
    /// Newest period first.
    #[default]
    Reverse,
}

/// One (period, series) cell of a table view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Period of the cell.
    pub period: PeriodKey,
    /// Display label of the period.
    pub label: String,
    /// Series of the cell.
    pub series: SeriesId,
    /// Value, if observed.
    pub value: Option<f64>,
    /// Series colour.
    pub color: Option<Color>,
}

/// Tall, table-ready projection: one row per period and selected series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableView {
    /// Period order of `rows`.
    pub order: TableOrder,
    /// Cells; within one period, series follow selection order.
    pub rows: Vec<TableRow>,
}

/// Headline metrics for one selected series at the active row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Series identifier.
    pub id: SeriesId,
    /// Series colour.
    pub color: Option<Color>,
    /// Latest value and changes.
    pub metric: DerivedMetric,
}

/// Project aligned rows onto the selected series for charting.
#[must_use]
pub fn build_chart_view(rows: &[AlignedRow], selection: &SelectionSet) -> ChartView {
    let series = selection
        .colored()
        .map(|(id, color)| ChartSeries {
            id: id.clone(),
            color: color.cloned(),
        })
        .collect();
    let rows = rows
        .iter()
        .map(|r| ChartRow {
            period: r.period,
            label: r.label.clone(),
            values: selection.iter().map(|id| (id.clone(), r.value(id))).collect(),
        })
        .collect();
    ChartView { series, rows }
}

/// Project aligned rows onto the selected series as a tall table.
#[must_use]
pub fn build_table_view(
    rows: &[AlignedRow],
    selection: &SelectionSet,
    order: TableOrder,
) -> TableView {
    let colored: Vec<(&SeriesId, Option<&Color>)> = selection.colored().collect();
    let cells = |r: &AlignedRow| {
        colored
            .iter()
            .map(|(id, color)| TableRow {
                period: r.period,
                label: r.label.clone(),
                series: (*id).clone(),
                value: r.value(id),
                color: color.cloned(),
            })
            .collect::<Vec<_>>()
    };
    let table_rows = match order {
        TableOrder::Chronological => rows.iter().flat_map(cells).collect(),
        TableOrder::Reverse => rows.iter().rev().flat_map(cells).collect(),
    };
    TableView {
        order,
        rows: table_rows,
    }
}

/// One summary per selected series, computed at row `at`.
#[must_use]
pub fn summarize(
    rows: &[AlignedRow],
    selection: &SelectionSet,
    at: usize,
    periods_per_year: usize,
) -> Vec<SeriesSummary> {
    selection
        .colored()
        .map(|(id, color)| SeriesSummary {
            id: id.clone(),
            color: color.cloned(),
            metric: compute_deltas(rows, id, at, periods_per_year),
        })
        .collect()
}

#[cfg(feature = "dataframe")]
mod dataframe {
    use polars::prelude::{Column, DataFrame};

    use super::ChartView;
    use crate::CadenceError;

    /// Conversion of view outputs into a polars `DataFrame`.
    pub trait ToDataFrame {
        /// Build the frame.
        ///
        /// # Errors
        /// Returns `CadenceError::Data` when polars rejects the columns.
        fn to_dataframe(&self) -> Result<DataFrame, CadenceError>;
    }

    impl ToDataFrame for ChartView {
        /// `period` and `label` columns followed by one `f64` column per series.
        fn to_dataframe(&self) -> Result<DataFrame, CadenceError> {
            let mut columns = Vec::with_capacity(self.series.len() + 2);
            columns.push(Column::new(
                "period".into(),
                self.rows.iter().map(|r| r.period.to_string()).collect::<Vec<_>>(),
            ));
            columns.push(Column::new(
                "label".into(),
                self.rows.iter().map(|r| r.label.clone()).collect::<Vec<_>>(),
            ));
            for s in &self.series {
                let values: Vec<Option<f64>> = self
                    .rows
                    .iter()
                    .map(|r| r.values.get(&s.id).copied().flatten())
                    .collect();
                columns.push(Column::new(s.id.as_str().into(), values));
            }
            DataFrame::new(columns).map_err(|e| CadenceError::Data(e.to_string()))
        }
    }
}

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
