//! Series preparation shared by every correlation stage.

mod series;

pub use series::{centered, validate_series};
pub(crate) use series::sum_of_squares;
