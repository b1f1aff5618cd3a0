//! Cadence data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod catalog;
mod config;
mod error;
mod period;
mod reports;
mod row;
mod series;

pub use capability::Capability;
pub use catalog::{CatalogPage, CatalogQuery, Dimensions};
pub use config::{CadenceConfig, Color, ColorAssignment, Palette};
pub use error::CadenceError;
pub use period::{PeriodKey, Periodicity, Subperiod};
pub use reports::{CatalogReport, LoadReport};
pub use row::{AlignedRow, DerivedMetric};
pub use series::{Observation, SeriesId, SeriesMeta};
