//! Re-export of foundational types from `cadence-types`.
// Consolidated re-exports so downstream crates can depend on `cadence-core` only

pub use cadence_types::{CadenceError, Capability};

pub use cadence_types::{CadenceConfig, Color, ColorAssignment, Palette};
pub use cadence_types::{CatalogPage, CatalogQuery, CatalogReport, Dimensions, LoadReport};

pub use cadence_types::{AlignedRow, DerivedMetric};
pub use cadence_types::{Observation, SeriesId, SeriesMeta};
pub use cadence_types::{PeriodKey, Periodicity, Subperiod};
