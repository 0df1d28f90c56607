//! Pure functions mapping Gregorian years, months and dates to their
//! sexagenary stem/branch pairs.
//!
//! All three functions are deterministic and total over valid calendar
//! input. Anchors:
//!
//! ```text
//! year  : 1984        = Gap-Ja  (cycle index 0), via (year - 4) mod 60
//! month : branch (month + 1) mod 12 (month 1 = In), stem by the
//!         five-tigers rule from the year stem
//! day   : 2000-01-01  = Mu-O    (cycle index 54), advancing one cycle
//!         position per calendar day
//! ```
//!
//! Because stem and branch advance together, consecutive calendar days
//! always differ in both halves and the generator reproduces the
//! canonical 60-pair sequence exactly.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use unse_core::error::{EngineError, EngineResult};
use unse_core::types::GanzhiPair;

/// Cycle index of the day anchor 2000-01-01 (Mu-O).
const DAY_ANCHOR_CYCLE_INDEX: i64 = 54;

static DAY_ANCHOR: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2000, 1, 1).expect("day anchor is a valid date"));

/// Sexagenary pair of a Gregorian year.
///
/// `year_ganzhi(1984)` is `Gap-Ja`, the start of the cycle.
pub fn year_ganzhi(year: i32) -> GanzhiPair {
    GanzhiPair::from_cycle_index(i64::from(year) - 4)
}

/// Sexagenary pair of a calendar month.
///
/// The month branch follows the civil approximation (month 1 = In); the
/// month stem is derived from the year stem by the five-tigers rule.
///
/// # Errors
///
/// `InvalidMonth` for a month outside 1-12. Callers are expected to
/// validate before reaching this layer; the check is defensive.
pub fn month_ganzhi(year: i32, month: u32) -> EngineResult<GanzhiPair> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    let year_stem = (i64::from(year) - 4).rem_euclid(10);
    // Five tigers: the first month's stem index is fixed per year-stem
    // group (Gap/Gi years open on Byeong-In, Eul/Gyeong on Mu-In, ...).
    let first_month_stem = (year_stem % 5) * 2 + 2;
    let month_offset = i64::from(month) - 1;

    let stem_index = (first_month_stem + month_offset).rem_euclid(10);
    let branch_index = (i64::from(month) + 1).rem_euclid(12);
    // Reconstruct the canonical cycle position from the two indices.
    let cycle_index = (stem_index * 6 - branch_index * 5).rem_euclid(60);
    Ok(GanzhiPair::from_cycle_index(cycle_index))
}

/// Sexagenary pair of a calendar date, anchored to 2000-01-01 = Mu-O.
pub fn date_ganzhi(date: NaiveDate) -> GanzhiPair {
    let delta = (date - *DAY_ANCHOR).num_days();
    GanzhiPair::from_cycle_index(DAY_ANCHOR_CYCLE_INDEX + delta)
}
