pub mod catalog;
pub mod series;
