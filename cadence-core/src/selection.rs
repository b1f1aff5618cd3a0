use serde::{Deserialize, Serialize};

use crate::{CadenceConfig, CadenceError, Color, ColorAssignment, Palette, SeriesId};

/// Outcome of [`SelectionSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    /// The identifier was appended.
    Added,
    /// The identifier was present and has been removed.
    Removed,
    /// The set was full; nothing changed.
    Rejected,
}

/// Ordered set of chosen series, bounded by a capacity.
///
/// Insertion order is preserved and determines colours. In
/// [`ColorAssignment::Positional`] mode the `k`-th member is coloured
/// `palette[k mod len]`; in [`ColorAssignment::Sticky`] mode each member keeps
/// the slot it received when added.
///
/// Deserialisation rejects sets over capacity, duplicate members and a slot
/// list that does not match the members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct SelectionSet {
    members: Vec<SeriesId>,
    // Palette slot per member; only consulted in sticky mode.
    slots: Vec<usize>,
    capacity: usize,
    palette: Palette,
    assignment: ColorAssignment,
}

impl SelectionSet {
    /// Create an empty set with positional colouring.
    #[must_use]
    pub const fn new(capacity: usize, palette: Palette) -> Self {
        Self {
            members: Vec::new(),
            slots: Vec::new(),
            capacity,
            palette,
            assignment: ColorAssignment::Positional,
        }
    }

    /// Change the colour assignment mode.
    #[must_use]
    pub fn with_assignment(mut self, assignment: ColorAssignment) -> Self {
        self.assignment = assignment;
        self
    }

    /// Create an empty set from the engine configuration defaults.
    #[must_use]
    pub fn from_config(cfg: &CadenceConfig) -> Self {
        Self::new(cfg.selection_capacity, cfg.palette.clone()).with_assignment(cfg.color_assignment)
    }

    /// Remove `id` if present, otherwise append it if there is room.
    ///
    /// A full set is left unchanged and reports [`Toggle::Rejected`]. A
    /// removed member that is toggled back in is appended at the end.
    pub fn toggle(&mut self, id: &SeriesId) -> Toggle {
        if let Some(pos) = self.position(id) {
            self.members.remove(pos);
            self.slots.remove(pos);
            return Toggle::Removed;
        }
        if self.is_at_capacity() {
            return Toggle::Rejected;
        }
        let slot = self.next_slot();
        self.members.push(id.clone());
        self.slots.push(slot);
        Toggle::Added
    }

    /// Toggle on a copy, leaving `self` untouched.
    #[must_use]
    pub fn toggled(&self, id: &SeriesId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
        self.slots.clear();
    }

    /// True when no further member can be added.
    #[must_use]
    pub const fn is_at_capacity(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// True when `id` is a member.
    #[must_use]
    pub fn contains(&self, id: &SeriesId) -> bool {
        self.members.contains(id)
    }

    /// Insertion index of `id`.
    #[must_use]
    pub fn position(&self, id: &SeriesId) -> Option<usize> {
        self.members.iter().position(|m| m == id)
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// True when there are no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Maximum number of members.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Colour assignment mode.
    #[must_use]
    pub const fn assignment(&self) -> ColorAssignment {
        self.assignment
    }

    /// Members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[SeriesId] {
        &self.members
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesId> {
        self.members.iter()
    }

    /// Colour of `id`, recomputed from its current position or slot.
    ///
    /// `None` when `id` is not a member or the palette is empty.
    #[must_use]
    pub fn color_of(&self, id: &SeriesId) -> Option<&Color> {
        let pos = self.position(id)?;
        self.palette.get(self.slot_at(pos))
    }

    /// Members paired with their colours, in insertion order.
    pub fn colored(&self) -> impl Iterator<Item = (&SeriesId, Option<&Color>)> {
        self.members
            .iter()
            .enumerate()
            .map(|(pos, id)| (id, self.palette.get(self.slot_at(pos))))
    }

    fn slot_at(&self, pos: usize) -> usize {
        match self.assignment {
            ColorAssignment::Sticky => self.slots.get(pos).copied().unwrap_or(pos),
            _ => pos,
        }
    }

    fn next_slot(&self) -> usize {
        let n = self.palette.len();
        if n == 0 {
            return self.members.len();
        }
        // Lowest palette slot nobody holds; wrap positionally once all are taken.
        (0..n)
            .find(|s| !self.slots.contains(s))
            .unwrap_or(self.members.len() % n)
    }
}

/// Unchecked wire form of [`SelectionSet`].
#[derive(Deserialize)]
struct RawSelection {
    members: Vec<SeriesId>,
    slots: Vec<usize>,
    capacity: usize,
    palette: Palette,
    assignment: ColorAssignment,
}

impl TryFrom<RawSelection> for SelectionSet {
    type Error = CadenceError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        if raw.members.len() > raw.capacity {
            return Err(CadenceError::InvalidArg(format!(
                "selection holds {} members but capacity is {}",
                raw.members.len(),
                raw.capacity
            )));
        }
        if raw.slots.len() != raw.members.len() {
            return Err(CadenceError::InvalidArg(format!(
                "selection has {} slots for {} members",
                raw.slots.len(),
                raw.members.len()
            )));
        }
        if let Some((i, dup)) = raw
            .members
            .iter()
            .enumerate()
            .find(|(i, id)| raw.members[..*i].contains(id))
        {
            return Err(CadenceError::InvalidArg(format!(
                "selection member {dup} repeated at index {i}"
            )));
        }
        Ok(Self {
            members: raw.members,
            slots: raw.slots,
            capacity: raw.capacity,
            palette: raw.palette,
            assignment: raw.assignment,
        })
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a SeriesId;
    type IntoIter = std::slice::Iter<'a, SeriesId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
