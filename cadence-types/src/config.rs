//! Configuration types shared by the engine and comparison contexts.

use core::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A display colour, usually a `#rrggbb` hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a colour string.
    pub fn new(c: impl Into<String>) -> Self {
        Self(c.into())
    }

    /// Returns the inner colour string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of colours handed out to selected series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Build a palette from colour strings.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colors.into_iter().map(Color::new).collect())
    }

    /// Number of colours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the palette has no colours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Colour for slot `k`, wrapping around the palette.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<&Color> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(k % self.0.len())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            "#2563eb", "#dc2626", "#16a34a", "#d97706", "#7c3aed", "#0891b2", "#db2777",
            "#4b5563",
        ])
    }
}

/// How selected series are mapped onto palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ColorAssignment {
    /// Colour follows the member's current position in the selection.
    /// Removing an earlier member shifts the colours of later ones.
    #[default]
    Positional,
    /// Colour is fixed when the member is added and kept until it is removed.
    /// New members take the lowest free slot.
    Sticky,
}

/// Global configuration for the `Cadence` engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Timeout for individual connector requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for fan-out loads of a whole comparison.
    pub request_timeout: Option<Duration>,
    /// Default capacity of new selection sets.
    pub selection_capacity: usize,
    /// Default palette of new selection sets.
    pub palette: Palette,
    /// Default colour assignment mode of new selection sets.
    pub color_assignment: ColorAssignment,
    /// Default page size for catalog browse/filter helpers.
    pub catalog_page_limit: usize,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            selection_capacity: 5,
            palette: Palette::default(),
            color_assignment: ColorAssignment::default(),
            catalog_page_limit: 20,
        }
    }
}
