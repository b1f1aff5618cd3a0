use core::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use crate::{AlignedRow, Observation, PeriodKey, SeriesId};

/// Outer-join several observation lists onto one ascending period axis.
///
/// - Emits exactly one row per distinct period present in any input.
/// - Every input series appears in every row; where it has no observation
///   the value is `None`.
/// - The row label comes from the first series, in iteration order, that
///   carries a non-empty label for the period; otherwise the period's
///   canonical label is used.
/// - If the same identifier is passed twice, only its first list is used.
///
/// Each list must already be sorted ascending by period (the observation
/// store guarantees this). Unsorted input does not panic but the output is
/// then unspecified. Runs a k-way merge: `O(n log k)` for `n` observations
/// across `k` series.
///
/// ```
/// use cadence_core::{align, Observation, PeriodKey, SeriesId};
///
/// let m = |mo| PeriodKey::monthly(2023, mo).unwrap();
/// let a = vec![Observation::new(m(1), Some(100.0)), Observation::new(m(2), Some(102.0))];
/// let b = vec![Observation::new(m(2), Some(50.0))];
/// let (ida, idb) = (SeriesId::from("A"), SeriesId::from("B"));
///
/// let rows = align([(&ida, a.as_slice()), (&idb, b.as_slice())]);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].value(&ida), Some(100.0));
/// assert_eq!(rows[0].value(&idb), None);
/// assert_eq!(rows[1].value(&idb), Some(50.0));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "cadence_core::align", level = "trace", skip_all)
)]
pub fn align<'a, I>(series: I) -> Vec<AlignedRow>
where
    I: IntoIterator<Item = (&'a SeriesId, &'a [Observation])>,
{
    let mut seen: HashSet<&SeriesId> = HashSet::new();
    let inputs: Vec<(&SeriesId, &[Observation])> = series
        .into_iter()
        .filter(|(id, _)| seen.insert(*id))
        .collect();

    // Every row starts from the full set of identifiers so absence is explicit.
    let template: BTreeMap<SeriesId, Option<f64>> =
        inputs.iter().map(|(id, _)| ((*id).clone(), None)).collect();

    let mut cursors: Vec<usize> = vec![0; inputs.len()];
    let mut heap: BinaryHeap<Reverse<(PeriodKey, usize)>> = BinaryHeap::with_capacity(inputs.len());
    for (i, (_, obs)) in inputs.iter().enumerate() {
        if let Some(first) = obs.first() {
            heap.push(Reverse((first.period, i)));
        }
    }

    let mut rows: Vec<AlignedRow> = Vec::new();
    // Ties on period pop in ascending series index, i.e. iteration order.
    while let Some(&Reverse((period, _))) = heap.peek() {
        let mut values = template.clone();
        let mut label: Option<&str> = None;

        while let Some(&Reverse((p, i))) = heap.peek() {
            if p != period {
                break;
            }
            heap.pop();

            let (id, obs) = inputs[i];
            let mut cursor = cursors[i];
            let first = &obs[cursor];
            values.insert(id.clone(), first.value);
            if label.is_none() && !first.label.is_empty() {
                label = Some(first.label.as_str());
            }

            // Skip duplicates of this period within the same series.
            while cursor < obs.len() && obs[cursor].period == period {
                cursor += 1;
            }
            cursors[i] = cursor;
            if let Some(next) = obs.get(cursor) {
                heap.push(Reverse((next.period, i)));
            }
        }

        rows.push(AlignedRow {
            period,
            label: label.map_or_else(|| period.label(), str::to_string),
            values,
        });
    }

    rows
}

/// Like [`align`], but drops observations before `start` first.
///
/// With `start == None` this is exactly [`align`].
pub fn align_from<'a, I>(series: I, start: Option<PeriodKey>) -> Vec<AlignedRow>
where
    I: IntoIterator<Item = (&'a SeriesId, &'a [Observation])>,
{
    let Some(start) = start else {
        return align(series);
    };
    align(series.into_iter().map(|(id, obs)| {
        let from = obs.partition_point(|o| o.period < start);
        (id, &obs[from..])
    }))
}
