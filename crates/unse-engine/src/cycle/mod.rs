//! Gregorian → sexagenary cycle calculation.

mod sexagenary;

pub use sexagenary::{date_ganzhi, month_ganzhi, year_ganzhi};
