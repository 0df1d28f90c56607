//! Life domains and per-domain score records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five life domains fortune scores are projected onto.
///
/// Different domains weight different analysis layers: career leans on the
/// structural and decade-cycle layers, health on the daily cycle and
/// symbolic markers, and so on. The weight table lives in `unse-engine`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LifeDomain {
    Career,
    Love,
    Money,
    Health,
    Move,
}

impl LifeDomain {
    /// All five domains in projection order.
    pub fn all() -> [LifeDomain; 5] {
        [
            Self::Career,
            Self::Love,
            Self::Money,
            Self::Health,
            Self::Move,
        ]
    }

    /// Short description of what the domain covers.
    pub fn description(self) -> &'static str {
        match self {
            Self::Career => "Work, promotion, and structural standing",
            Self::Love => "Relationships, attraction, and partnership",
            Self::Money => "Wealth flow, investment, and material luck",
            Self::Health => "Physical condition and daily vitality",
            Self::Move => "Relocation, travel, and change of surroundings",
        }
    }
}

impl fmt::Display for LifeDomain {
    /// Lowercase name, used verbatim inside calendar signal triggers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Career => "career",
            Self::Love => "love",
            Self::Money => "money",
            Self::Health => "health",
            Self::Move => "move",
        };
        f.write_str(s)
    }
}

/// Score record for one life domain.
///
/// Derived, recomputed whenever inputs change; never persisted by the
/// engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    /// Weighted projection of the layer scores onto this domain, on the
    /// domain's base scale (0-100).
    pub base_final_score: f64,
    /// `base_final_score × alignment_score × time_overlap_weight`,
    /// clamped to 0-100.
    pub final_score_adjusted: f64,
    /// Saju-system component score (0-100).
    pub saju_component_score: f64,
    /// Astrology-system component score (0-100).
    pub astro_component_score: f64,
    /// Agreement between the two source systems (0-1).
    pub alignment_score: f64,
    /// Normalized overlap strength between the two systems (0-1).
    pub overlap_strength: f64,
    /// Multiplier ≥ 1, grows with coinciding independent signals.
    pub time_overlap_weight: f64,
    /// How much input data was available (0-1).
    pub confidence_score: f64,
    /// Layer keys driving the score upward, strongest first.
    pub drivers: Vec<String>,
    /// Layer keys dragging the score downward, strongest first.
    pub cautions: Vec<String>,
}
