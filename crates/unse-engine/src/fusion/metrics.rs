//! Agreement metrics between the two source systems.

use unse_core::types::{AstroProfile, SajuProfile};

/// Cap on the time-overlap multiplier.
const MAX_TIME_OVERLAP_WEIGHT: f64 = 1.5;

/// Agreement between the Saju-derived and astrology-derived component
/// scores (both on 0-100), as 1 minus the normalized gap. Result in
/// [0, 1]; identical components score 1.
pub fn alignment_score(saju_component: f64, astro_component: f64) -> f64 {
    (1.0 - (saju_component - astro_component).abs() / 100.0).clamp(0.0, 1.0)
}

/// Normalized overlap strength: the geometric mean of the two component
/// scores (each mapped to 0-1), damped by disagreement. Result in [0, 1].
pub fn overlap_strength(saju_component: f64, astro_component: f64, alignment: f64) -> f64 {
    let sn = (saju_component / 100.0).clamp(0.0, 1.0);
    let an = (astro_component / 100.0).clamp(0.0, 1.0);
    ((sn * an).sqrt() * (0.5 + 0.5 * alignment)).clamp(0.0, 1.0)
}

/// Multiplier ≥ 1 growing with the number of independent signals that
/// coincide in the period (completed triads, affinity matches, a solar
/// return window, peak energy). Capped so the adjusted score stays in a
/// sane range.
pub fn time_overlap_weight(coinciding_signals: usize) -> f64 {
    (1.0 + 0.1 * coinciding_signals as f64).min(MAX_TIME_OVERLAP_WEIGHT)
}

/// How much input data was available, 0-1. Starts from a floor of 0.5
/// (the required fields alone) and grows with each optional field the
/// profiles carry.
pub fn confidence_score(saju: &SajuProfile, astro: &AstroProfile) -> f64 {
    let mut confidence: f64 = 0.5;
    if saju.pillars.hour.is_some() {
        confidence += 0.1;
    }
    if saju.yongsin.is_some() {
        confidence += 0.1;
    }
    if saju.geokguk.is_some() {
        confidence += 0.1;
    }
    if !saju.daeun.is_empty() {
        confidence += 0.1;
    }
    if astro.placements.len() >= 5 {
        confidence += 0.05;
    }
    if !astro.active_transits.is_empty() {
        confidence += 0.05;
    }
    confidence.min(1.0)
}
