pub mod catalog;
pub mod load;
pub mod series;

pub mod util;
