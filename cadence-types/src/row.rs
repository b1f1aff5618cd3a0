//! Aligned rows and the metrics derived from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PeriodKey, SeriesId};

/// One period's values across every series of a comparison.
///
/// A series that has no observation for the period is present with `None`;
/// it is never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Period of the row.
    pub period: PeriodKey,
    /// Display label for the period.
    pub label: String,
    /// Value per contributing series.
    pub values: BTreeMap<SeriesId, Option<f64>>,
}

impl AlignedRow {
    /// Value for `id`, or `None` when absent or not part of the row.
    #[must_use]
    pub fn value(&self, id: &SeriesId) -> Option<f64> {
        self.values.get(id).copied().flatten()
    }

    /// True when at least one of `ids` carries a value in this row.
    #[must_use]
    pub fn has_any<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a SeriesId>,
    {
        ids.into_iter().any(|id| self.value(id).is_some())
    }
}

/// Period-over-period and year-over-year changes for one series at one row.
///
/// Every field is `None` when its inputs are missing; percentages are also
/// `None` for a zero reference value, so they are never NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMetric {
    /// Value at the row.
    pub latest: Option<f64>,
    /// Difference to the previous aligned row.
    pub period_change_abs: Option<f64>,
    /// `period_change_abs` relative to the previous value, in percent.
    pub period_change_pct: Option<f64>,
    /// Difference to the row one year of periods back.
    pub year_change_abs: Option<f64>,
    /// `year_change_abs` relative to the year-ago value, in percent.
    pub year_change_pct: Option<f64>,
}
