use cadence_core::{
    PeriodKey, PeriodMode, Periodicity, SelectionSet, SeriesId, TableOrder, Toggle,
};
use serde::{Deserialize, Serialize};

/// Per-page comparison context: which series are compared, at what
/// periodicity, from which period on, and whether the view is live or frozen.
///
/// A comparison holds no data; [`crate::Cadence::snapshot`] derives every
/// view from the engine's store on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    selection: SelectionSet,
    mode: PeriodMode,
    range_start: Option<PeriodKey>,
    periodicity: Periodicity,
    table_order: TableOrder,
}

impl Comparison {
    /// A live comparison over `selection`.
    #[must_use]
    pub fn new(periodicity: Periodicity, selection: SelectionSet) -> Self {
        Self {
            selection,
            mode: PeriodMode::Live,
            range_start: None,
            periodicity,
            table_order: TableOrder::default(),
        }
    }

    /// Builder-style [`Comparison::set_range_start`].
    #[must_use]
    pub const fn with_range_start(mut self, start: Option<PeriodKey>) -> Self {
        self.range_start = start;
        self
    }

    /// Builder-style [`Comparison::set_table_order`].
    #[must_use]
    pub const fn with_table_order(mut self, order: TableOrder) -> Self {
        self.table_order = order;
        self
    }

    /// Add or remove a series; see [`SelectionSet::toggle`].
    pub fn toggle(&mut self, id: &SeriesId) -> Toggle {
        self.selection.toggle(id)
    }

    /// Deselect every series.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Pin the comparison to `period`.
    pub const fn freeze(&mut self, period: PeriodKey) {
        self.mode = PeriodMode::Frozen(period);
    }

    /// Return to following the latest data.
    pub const fn unfreeze(&mut self) {
        self.mode = PeriodMode::Live;
    }

    /// Only consider observations from `start` onwards; also passed to providers.
    pub const fn set_range_start(&mut self, start: Option<PeriodKey>) {
        self.range_start = start;
    }

    /// Row order of table views.
    pub const fn set_table_order(&mut self, order: TableOrder) {
        self.table_order = order;
    }

    /// Selected series.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected identifiers in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[SeriesId] {
        self.selection.members()
    }

    /// Live or frozen.
    #[must_use]
    pub const fn mode(&self) -> PeriodMode {
        self.mode
    }

    /// First period considered, if restricted.
    #[must_use]
    pub const fn range_start(&self) -> Option<PeriodKey> {
        self.range_start
    }

    /// Periodicity used for year-over-year changes.
    #[must_use]
    pub const fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    /// Row order of table views.
    #[must_use]
    pub const fn table_order(&self) -> TableOrder {
        self.table_order
    }
}
