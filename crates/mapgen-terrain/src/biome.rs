//! Biome classification: terrain categories, altitude band tables, and the
//! display palette.
//!
//! Cells are classified from a normalized altitude and temperature sample
//! using ordered altitude bands, where the first matching band wins.

mod bands;
mod category;
mod palette;

pub use bands::{AltitudeBand, BandRule, BandTable, ClassifierError, classify};
pub use category::Category;
pub use palette::category_color;
