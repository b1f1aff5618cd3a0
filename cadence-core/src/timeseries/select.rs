use serde::{Deserialize, Serialize};

use crate::{AlignedRow, CadenceError, PeriodKey, SeriesId};

/// Whether a comparison tracks the latest data or a chosen historical period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodMode {
    /// Follow the most recent period that has data.
    #[default]
    Live,
    /// Pin the comparison to one period ("time travel").
    Frozen(PeriodKey),
}

impl PeriodMode {
    /// The pinned period, if any.
    #[must_use]
    pub const fn explicit(self) -> Option<PeriodKey> {
        match self {
            Self::Live => None,
            Self::Frozen(p) => Some(p),
        }
    }

    /// True when following the latest data.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// Resolve the index of the active row.
///
/// - With an `explicit` period, returns the index of the row for exactly that
///   period, or `CadenceError::NotFound` when no such row exists. Callers are
///   expected to drop the frozen period and resolve again in live mode.
/// - Without one, returns the last row in which at least one of `ids` has a
///   value, or `CadenceError::NoData` when there is none.
///
/// `rows` must be strictly ascending by period, as produced by
/// [`crate::align`].
///
/// # Errors
/// `NotFound` for an explicit period with no row, `NoData` when live
/// resolution finds no value.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "cadence_core::resolve",
        level = "trace",
        skip(rows, ids),
        fields(rows = rows.len(), ids = ids.len()),
    )
)]
pub fn resolve(
    rows: &[AlignedRow],
    explicit: Option<PeriodKey>,
    ids: &[SeriesId],
) -> Result<usize, CadenceError> {
    if let Some(period) = explicit {
        return rows
            .binary_search_by(|r| r.period.cmp(&period))
            .map_err(|_| CadenceError::not_found(format!("period {period}")));
    }
    rows.iter()
        .rposition(|r| r.has_any(ids))
        .ok_or_else(|| CadenceError::no_data("selected series have no values"))
}
