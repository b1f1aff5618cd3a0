//! Series identifiers, descriptive metadata and observations.

use core::fmt;
use std::borrow::{Borrow, Cow};
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PeriodKey, Periodicity};

/// Opaque series identifier (e.g. `"CUUR0000SA0"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    /// Wrap a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SeriesId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for SeriesId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Descriptive metadata for a series identifier.
///
/// Used for catalog queries and presentation only; alignment never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// Identifier the metadata describes.
    pub id: SeriesId,
    /// Display name, e.g. "All items in U.S. city average, all urban consumers".
    pub title: String,
    /// Unit of measure, if published.
    pub unit: Option<String>,
    /// Publication cadence.
    pub periodicity: Periodicity,
    /// Whether the series is seasonally adjusted upstream.
    pub seasonally_adjusted: bool,
    /// Free categorical fields such as `area_code` or `item_code`.
    #[serde(default)]
    pub dimensions: BTreeMap<String, String>,
}

impl SeriesMeta {
    /// Minimal metadata with no unit and no extra dimensions.
    pub fn new(id: impl Into<SeriesId>, title: impl Into<String>, periodicity: Periodicity) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            unit: None,
            periodicity,
            seasonally_adjusted: false,
            dimensions: BTreeMap::new(),
        }
    }

    /// Set the unit of measure.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Mark the series as seasonally adjusted.
    #[must_use]
    pub const fn seasonally_adjusted(mut self, yes: bool) -> Self {
        self.seasonally_adjusted = yes;
        self
    }

    /// Add a categorical dimension value.
    #[must_use]
    pub fn with_dimension(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(field.into(), value.into());
        self
    }

    /// Value of a categorical field.
    ///
    /// Besides the free `dimensions`, three built-in fields are addressable:
    /// `periodicity` (`"monthly"`, ...), `seasonal` (`"S"` adjusted / `"U"`
    /// unadjusted) and `id`.
    #[must_use]
    pub fn dimension(&self, field: &str) -> Option<Cow<'_, str>> {
        match field {
            "id" => Some(Cow::Borrowed(self.id.as_str())),
            "periodicity" => Some(Cow::Borrowed(self.periodicity.as_str())),
            "seasonal" => Some(Cow::Borrowed(if self.seasonally_adjusted {
                "S"
            } else {
                "U"
            })),
            other => self.dimensions.get(other).map(|v| Cow::Borrowed(v.as_str())),
        }
    }

    /// Case-insensitive substring match over the descriptive text fields.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_keyword(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(self.id.as_str())
            || hit(&self.title)
            || self.unit.as_deref().is_some_and(hit)
            || self.dimensions.values().any(|v| hit(v))
    }
}

/// One data point of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Period the value refers to.
    pub period: PeriodKey,
    /// Display label supplied by the backend; empty when none was given.
    #[serde(default)]
    pub label: String,
    /// Observed value; `None` when the agency published a placeholder.
    pub value: Option<f64>,
}

impl Observation {
    /// Observation without a backend label.
    #[must_use]
    pub const fn new(period: PeriodKey, value: Option<f64>) -> Self {
        Self {
            period,
            label: String::new(),
            value,
        }
    }

    /// Attach a backend-provided label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
