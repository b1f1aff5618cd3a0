//! Calendar periods as statistical agencies publish them: a year plus a
//! subperiod code such as `M01`, `Q03` or `A01`.

use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CadenceError;

/// Publication cadence of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Periodicity {
    /// Twelve periods per year (`M01`..`M12`).
    #[default]
    Monthly,
    /// Four periods per year (`Q01`..`Q04`).
    Quarterly,
    /// Two periods per year (`S01`..`S02`).
    Semiannual,
    /// One period per year (`A01`).
    Annual,
}

impl Periodicity {
    /// Number of regular periods in one calendar year.
    ///
    /// This is the look-back distance, in aligned rows, used for
    /// year-over-year deltas.
    #[must_use]
    pub const fn periods_per_year(self) -> usize {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Semiannual => 2,
            Self::Annual => 1,
        }
    }

    /// Stable lowercase name for logs and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a period within its year.
///
/// The derived ordering ranks subperiods of the same periodicity by ordinal,
/// so an annual-average marker (`M13`, `Q05`, `S03`) sorts after the last
/// regular period of its year. Subperiods of different periodicities still
/// compare deterministically but carry no calendar meaning relative to each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subperiod {
    /// `M01`..`M12`; `M13` is the annual average of a monthly series.
    Month(u8),
    /// `Q01`..`Q04`; `Q05` is the annual average of a quarterly series.
    Quarter(u8),
    /// `S01`..`S02`; `S03` is the annual average of a semiannual series.
    Half(u8),
    /// `A01`.
    Annual,
}

impl Subperiod {
    /// Build a monthly subperiod; `13` denotes the annual average.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `n` is outside `1..=13`.
    pub fn month(n: u8) -> Result<Self, CadenceError> {
        Self::checked('M', n)
    }

    /// Build a quarterly subperiod; `5` denotes the annual average.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `n` is outside `1..=5`.
    pub fn quarter(n: u8) -> Result<Self, CadenceError> {
        Self::checked('Q', n)
    }

    /// Build a semiannual subperiod; `3` denotes the annual average.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `n` is outside `1..=3`.
    pub fn half(n: u8) -> Result<Self, CadenceError> {
        Self::checked('S', n)
    }

    /// Periodicity this subperiod belongs to.
    #[must_use]
    pub const fn periodicity(self) -> Periodicity {
        match self {
            Self::Month(_) => Periodicity::Monthly,
            Self::Quarter(_) => Periodicity::Quarterly,
            Self::Half(_) => Periodicity::Semiannual,
            Self::Annual => Periodicity::Annual,
        }
    }

    /// Numeric part of the code (`M07` → 7, `A01` → 1).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Month(n) | Self::Quarter(n) | Self::Half(n) => n,
            Self::Annual => 1,
        }
    }

    /// True for the `M13`/`Q05`/`S03` annual-average markers.
    #[must_use]
    pub const fn is_annual_average(self) -> bool {
        matches!(self, Self::Month(13) | Self::Quarter(5) | Self::Half(3))
    }

    const fn prefix(self) -> char {
        match self {
            Self::Month(_) => 'M',
            Self::Quarter(_) => 'Q',
            Self::Half(_) => 'S',
            Self::Annual => 'A',
        }
    }

    /// Agency code, e.g. `"M01"`.
    #[must_use]
    pub fn code(self) -> String {
        self.to_string()
    }

    fn checked(prefix: char, n: u8) -> Result<Self, CadenceError> {
        let sub = match prefix {
            'M' if (1..=13).contains(&n) => Self::Month(n),
            'Q' if (1..=5).contains(&n) => Self::Quarter(n),
            'S' if (1..=3).contains(&n) => Self::Half(n),
            'A' if n == 1 => Self::Annual,
            _ => {
                return Err(CadenceError::InvalidArg(format!(
                    "invalid subperiod code {prefix}{n:02}"
                )));
            }
        };
        Ok(sub)
    }
}

impl fmt::Display for Subperiod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.prefix(), self.ordinal())
    }
}

impl FromStr for Subperiod {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let mut chars = code.chars();
        let prefix = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or_else(|| CadenceError::InvalidArg("empty subperiod code".into()))?;
        let n: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| CadenceError::InvalidArg(format!("invalid subperiod code '{code}'")))?;
        Self::checked(prefix, n)
    }
}

/// Totally ordered calendar period: year first, then subperiod rank.
///
/// Serialized as the compact string form `"2023-M01"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodKey {
    year: i32,
    subperiod: Subperiod,
}

impl PeriodKey {
    /// Construct a key from already-validated parts.
    #[must_use]
    pub const fn new(year: i32, subperiod: Subperiod) -> Self {
        Self { year, subperiod }
    }

    /// Monthly key; `month == 13` is the annual average.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `month` is outside `1..=13`.
    pub fn monthly(year: i32, month: u8) -> Result<Self, CadenceError> {
        Ok(Self::new(year, Subperiod::month(month)?))
    }

    /// Quarterly key; `quarter == 5` is the annual average.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `quarter` is outside `1..=5`.
    pub fn quarterly(year: i32, quarter: u8) -> Result<Self, CadenceError> {
        Ok(Self::new(year, Subperiod::quarter(quarter)?))
    }

    /// Annual key (`A01`).
    #[must_use]
    pub const fn annual(year: i32) -> Self {
        Self::new(year, Subperiod::Annual)
    }

    /// Parse the split `(year, "M01")` form that agency backends return.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the code is not a recognised subperiod.
    pub fn from_parts(year: i32, code: &str) -> Result<Self, CadenceError> {
        Ok(Self::new(year, code.parse()?))
    }

    /// Period of the given periodicity that contains `date`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_date(date: NaiveDate, periodicity: Periodicity) -> Self {
        let month = date.month() as u8;
        let subperiod = match periodicity {
            Periodicity::Monthly => Subperiod::Month(month),
            Periodicity::Quarterly => Subperiod::Quarter((month - 1) / 3 + 1),
            Periodicity::Semiannual => Subperiod::Half(if month <= 6 { 1 } else { 2 }),
            Periodicity::Annual => Subperiod::Annual,
        };
        Self::new(date.year(), subperiod)
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Subperiod within the year.
    #[must_use]
    pub const fn subperiod(&self) -> Subperiod {
        self.subperiod
    }

    /// Periodicity implied by the subperiod code.
    #[must_use]
    pub const fn periodicity(&self) -> Periodicity {
        self.subperiod.periodicity()
    }

    /// First calendar day covered by the period.
    ///
    /// Annual-average markers map to January 1st. Returns `None` only when the
    /// year is outside chrono's representable range.
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        let month: u32 = match self.subperiod {
            Subperiod::Month(m) if m <= 12 => u32::from(m),
            Subperiod::Quarter(q) if q <= 4 => u32::from(q.saturating_sub(1)) * 3 + 1,
            Subperiod::Half(2) => 7,
            _ => 1,
        };
        NaiveDate::from_ymd_opt(self.year, month, 1)
    }

    /// Human-readable label, e.g. `"Jan 2023"`, `"Q3 2023"`, `"Annual 2023"`.
    #[must_use]
    pub fn label(&self) -> String {
        let year = self.year;
        if self.subperiod.is_annual_average() {
            return format!("Annual {year}");
        }
        match self.subperiod {
            Subperiod::Month(m) => match Month::try_from(m) {
                Ok(month) => format!("{} {year}", &month.name()[..3]),
                Err(_) => format!("{year}-{}", self.subperiod),
            },
            Subperiod::Quarter(q) => format!("Q{q} {year}"),
            Subperiod::Half(h) => format!("H{h} {year}"),
            Subperiod::Annual => year.to_string(),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.subperiod)
    }
}

impl FromStr for PeriodKey {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, code) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| CadenceError::InvalidArg(format!("invalid period key '{s}'")))?;
        let year: i32 = year
            .parse()
            .map_err(|_| CadenceError::InvalidArg(format!("invalid period year in '{s}'")))?;
        Self::from_parts(year, code)
    }
}

impl TryFrom<String> for PeriodKey {
    type Error = CadenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PeriodKey> for String {
    fn from(p: PeriodKey) -> Self {
        p.to_string()
    }
}
