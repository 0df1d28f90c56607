//! Timeline points and calendar signal records.

use serde::{Deserialize, Serialize};

use super::domain::LifeDomain;

/// Discrete peak classification of an overlap-strength value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeakLevel {
    Normal,
    High,
    Peak,
}

impl PeakLevel {
    /// Classify an overlap strength:
    /// ≥ 0.75 → `Peak`, ≥ 0.60 → `High`, otherwise `Normal`.
    pub fn classify(overlap_strength: f64) -> PeakLevel {
        if overlap_strength >= 0.75 {
            Self::Peak
        } else if overlap_strength >= 0.60 {
            Self::High
        } else {
            Self::Normal
        }
    }
}

/// One month of the forward overlap series.
///
/// Sequences are ordered lexicographically increasing by `month`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOverlapPoint {
    /// Calendar month, `"YYYY-MM"` zero-padded.
    pub month: String,
    /// Overlap strength, bounded to [0, 1].
    pub overlap_strength: f64,
    /// Multiplier ≥ 1.
    pub time_overlap_weight: f64,
    pub peak_level: PeakLevel,
}

/// One year of the N-year overlap series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyOverlapPoint {
    /// Calendar year, `"YYYY"`.
    pub year: String,
    /// Overlap strength, bounded to [0, 1].
    pub overlap_strength: f64,
    pub peak_level: PeakLevel,
}

/// Discrete named event emitted by the calendar signal deriver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSignal {
    /// Display trigger, e.g. `"Peak Convergence Window (2026-03)"` or
    /// `"Peak career window (2026-05)"`.
    pub trigger: String,
    /// Month the signal fires in, `"YYYY-MM"`.
    pub month: String,
    /// `None` for global convergence signals.
    pub domain: Option<LifeDomain>,
}
