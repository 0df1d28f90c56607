//! Branch-interaction and multi-layer analysis result types.

use serde::{Deserialize, Serialize};

use super::ganzhi::{Branch, Element};

/// Kind of a pairwise branch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairInteractionKind {
    /// 육합 - harmonizing pair.
    Yukhap,
    /// 충 - clash.
    Chung,
    /// 원진 - resentment pair.
    Wonjin,
}

/// One detected pairwise interaction with its signed score modifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairInteraction {
    pub kind: PairInteractionKind,
    pub first: Branch,
    pub second: Branch,
    pub score_modifier: f64,
}

/// One detected branch-group interaction (a harmonizing triad or its
/// half form), carrying its own score and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchGroupInteraction {
    /// Factor-style name, e.g. `samhap_wood` or `banhap_fire`.
    pub name: String,
    /// Element the group converges on.
    pub element: Element,
    pub score: f64,
    /// Korean display description.
    pub description: String,
}

/// Energy-stage classification of the day master, folded down from the
/// twelve life stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyStage {
    Rising,
    Peak,
    Declining,
    Dormant,
    Neutral,
}

/// Output of the multi-layer interaction analyzer.
///
/// This subsystem never propagates an error: malformed input or a failing
/// sub-classifier degrades to [`MultiLayerAnalysis::neutral`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLayerAnalysis {
    /// Composite score: pairwise sum × 0.3 + group sum × 0.25 + stage bonus.
    pub score: f64,
    /// Detected branch-group interactions.
    pub branch_interactions: Vec<BranchGroupInteraction>,
    /// Detected pairwise interactions.
    pub pair_interactions: Vec<PairInteraction>,
    /// Energy stage of the day master, when classification succeeded.
    pub energy_stage: Option<EnergyStage>,
}

impl MultiLayerAnalysis {
    /// Zero-effect analysis: score 0, no interactions, no stage.
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            branch_interactions: Vec::new(),
            pair_interactions: Vec::new(),
            energy_stage: None,
        }
    }
}
