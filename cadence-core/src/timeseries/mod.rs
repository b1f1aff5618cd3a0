//! Time-series utilities shared by connectors and the engine.
//!
//! Modules include:
//! - `normalize`: sort and de-duplicate provider output at the fetch boundary
//! - `align`: outer-join several series onto one period axis
//! - `select`: resolve the active row in live or frozen mode
//! - `delta`: period-over-period and year-over-year changes
/// Outer-join alignment of multiple series.
pub mod align;
/// Period-over-period and year-over-year change computation.
pub mod delta;
/// Fetch-boundary normalisation of observation lists.
pub mod normalize;
/// Live / frozen resolution of the active aligned row.
pub mod select;
