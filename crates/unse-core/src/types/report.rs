//! Report products returned by the engine facade.
//!
//! These are the cacheable value objects: one per cache map in
//! `unse-cache`. All are immutable once returned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::domain::{DomainScore, LifeDomain};
use super::ganzhi::GanzhiPair;
use super::interaction::MultiLayerAnalysis;
use super::score::LayerScores;

/// Event context for reason translation. The same raw factor key yields
/// different user-facing text under different event types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Investment,
    Marriage,
    Career,
    Health,
    Move,
    #[default]
    General,
}

/// Full day-level analysis: the primary product of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAnalysis {
    pub date: NaiveDate,
    pub day_pair: GanzhiPair,
    /// Normalized per-layer scores ([-1, 1] each).
    pub layer_scores: LayerScores,
    /// Global base score, 0-100.
    pub base_score: f64,
    /// Saju-derived component score, 0-100.
    pub saju_component_score: f64,
    /// Astrology-derived component score, 0-100.
    pub astro_component_score: f64,
    /// Agreement between the two systems, 0-1.
    pub alignment_score: f64,
    /// Overlap strength, 0-1.
    pub overlap_strength: f64,
    /// Multiplier ≥ 1.
    pub time_overlap_weight: f64,
    /// Input-data availability, 0-1.
    pub confidence_score: f64,
    pub multi_layer: MultiLayerAnalysis,
    /// Ordered union of factor keys across all layers.
    pub factors: Vec<String>,
    /// Aggregated marker recommendations (duplicates permitted).
    pub recommendations: Vec<String>,
    /// Aggregated marker warnings (duplicates permitted).
    pub warnings: Vec<String>,
    pub domains: BTreeMap<LifeDomain, DomainScore>,
}

/// Condensed daily fortune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFortune {
    pub date: NaiveDate,
    pub day_pair: GanzhiPair,
    /// Overall score, 0-100.
    pub overall_score: f64,
    /// Strongest domain of the day.
    pub top_domain: LifeDomain,
    /// Translated, user-facing reason strings.
    pub reasons: Vec<String>,
}

/// Monthly theme summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTheme {
    /// `"YYYY-MM"` zero-padded.
    pub month: String,
    pub month_pair: GanzhiPair,
    /// Theme score, 0-100.
    pub score: f64,
    /// Domain the month's strongest layer points at.
    pub focus_domain: LifeDomain,
    pub factors: Vec<String>,
}

/// Weekly theme summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTheme {
    pub week_start: NaiveDate,
    /// Averaged score over the seven days, 0-100.
    pub score: f64,
    /// Day of the week with the strongest daily cycle.
    pub best_day: NaiveDate,
    pub factors: Vec<String>,
}
