//! # Domain Types
//!
//! The beer record and its closed style vocabulary.

mod beer;
mod style;

pub use beer::Beer;
pub use style::BeerStyle;
