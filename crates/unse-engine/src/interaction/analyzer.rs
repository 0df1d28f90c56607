//! Multi-layer interaction analyzer.
//!
//! Combines the day master's stem and branch with the active decade,
//! year and month cycles:
//!
//! 1. Select the decade-cycle entry for the target year.
//! 2. Detect pairwise and group branch interactions across
//!    {day, decade, year, month} branches.
//! 3. Aggregate: pairwise sum × 0.3 + group sum × 0.25.
//! 4. Classify the day master's energy stage at the month branch and add
//!    the fixed stage bonus.
//!
//! # Error policy
//!
//! This boundary never propagates an error. A missing day-master stem or
//! day branch, and any failure inside the delegated classifiers, degrade
//! to [`MultiLayerAnalysis::neutral`] with a warning log — a single bad
//! date or profile must not abort a batch calculation. Internally the
//! sub-steps report through `EngineResult`, making the collapse explicit
//! rather than a catch-all.

use tracing::warn;

use unse_core::error::EngineResult;
use unse_core::types::{Branch, MultiLayerAnalysis, SajuProfile, Stem};

use super::branch::{detect_groups, detect_pairs};
use super::stage::{energy_bonus, energy_stage, twelve_stage};
use crate::cycle::{month_ganzhi, year_ganzhi};

const PAIRWISE_WEIGHT: f64 = 0.3;
const GROUP_WEIGHT: f64 = 0.25;

/// Analyzer input. The day-master stem and day branch are optional to
/// make the malformed-input degradation explicit in the type.
#[derive(Debug, Clone, Copy)]
pub struct MultiLayerInput<'a> {
    pub day_master: Option<Stem>,
    pub day_branch: Option<Branch>,
    pub profile: &'a SajuProfile,
    pub target_year: i32,
    pub target_month: u32,
}

/// Run the multi-layer analysis, degrading to the neutral result on any
/// malformed input or classifier failure.
pub fn analyze_multi_layer(input: &MultiLayerInput<'_>) -> MultiLayerAnalysis {
    let (day_master, day_branch) = match (input.day_master, input.day_branch) {
        (Some(stem), Some(branch)) => (stem, branch),
        _ => {
            warn!(
                target_year = input.target_year,
                target_month = input.target_month,
                "MULTI_LAYER: missing day master or day branch, returning neutral"
            );
            return MultiLayerAnalysis::neutral();
        }
    };

    match compute(day_master, day_branch, input) {
        Ok(analysis) => analysis,
        Err(err) => {
            warn!(
                error = %err,
                target_year = input.target_year,
                target_month = input.target_month,
                "MULTI_LAYER: classifier failure, returning neutral"
            );
            MultiLayerAnalysis::neutral()
        }
    }
}

fn compute(
    day_master: Stem,
    day_branch: Branch,
    input: &MultiLayerInput<'_>,
) -> EngineResult<MultiLayerAnalysis> {
    let year_pair = year_ganzhi(input.target_year);
    let month_pair = month_ganzhi(input.target_year, input.target_month)?;

    let mut branches = vec![day_branch];
    if let Some(daeun) = input.profile.daeun_for_year(input.target_year) {
        branches.push(daeun.pair.branch);
    }
    branches.push(year_pair.branch);
    branches.push(month_pair.branch);

    let pair_interactions = detect_pairs(&branches);
    let branch_interactions = detect_groups(&branches);

    let pairwise_sum: f64 = pair_interactions.iter().map(|i| i.score_modifier).sum();
    let group_sum: f64 = branch_interactions.iter().map(|g| g.score).sum();

    let stage = energy_stage(twelve_stage(day_master, month_pair.branch));
    let score = pairwise_sum * PAIRWISE_WEIGHT + group_sum * GROUP_WEIGHT + energy_bonus(stage);

    Ok(MultiLayerAnalysis {
        score,
        branch_interactions,
        pair_interactions,
        energy_stage: Some(stage),
    })
}
