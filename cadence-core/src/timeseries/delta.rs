use crate::{AlignedRow, DerivedMetric, SeriesId};

/// Percentage change of `abs` relative to `reference`.
///
/// Returns `None` when either input is absent, when the reference is zero,
/// or when the result would not be finite.
#[must_use]
pub fn percent_change(abs: Option<f64>, reference: Option<f64>) -> Option<f64> {
    let (abs, reference) = (abs?, reference?);
    if reference == 0.0 {
        return None;
    }
    Some(abs / reference.abs() * 100.0).filter(|p| p.is_finite())
}

/// Derive period-over-period and year-over-year changes for `id` at row `at`.
///
/// The previous row is `at - 1` and the year-ago row is
/// `at - periods_per_year`, by row index. Aligned rows contain every period
/// any contributing series reported, so for regularly published data the
/// index distance matches the calendar distance.
///
/// Any reference index that falls outside `rows`, or any absent value, yields
/// `None` for the affected fields. An out-of-range `at` yields the default
/// (all `None`) metric.
#[must_use]
pub fn compute_deltas(
    rows: &[AlignedRow],
    id: &SeriesId,
    at: usize,
    periods_per_year: usize,
) -> DerivedMetric {
    let Some(latest) = rows.get(at).and_then(|r| r.value(id)) else {
        return DerivedMetric::default();
    };
    let value_at = |idx: Option<usize>| idx.and_then(|i| rows.get(i)).and_then(|r| r.value(id));

    let prev = value_at(at.checked_sub(1));
    let year_ago = if periods_per_year == 0 {
        None
    } else {
        value_at(at.checked_sub(periods_per_year))
    };

    let period_change_abs = prev.map(|p| latest - p);
    let year_change_abs = year_ago.map(|y| latest - y);

    DerivedMetric {
        latest: Some(latest),
        period_change_abs,
        period_change_pct: percent_change(period_change_abs, prev),
        year_change_abs,
        year_change_pct: percent_change(year_change_abs, year_ago),
    }
}

/// [`compute_deltas`] for every row, in row order.
#[must_use]
pub fn compute_series_deltas(
    rows: &[AlignedRow],
    id: &SeriesId,
    periods_per_year: usize,
) -> Vec<DerivedMetric> {
    (0..rows.len())
        .map(|at| compute_deltas(rows, id, at, periods_per_year))
        .collect()
}
