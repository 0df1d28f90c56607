//! Overlap timeline generation.
//!
//! The monthly generator walks 12 consecutive calendar months from the
//! start month, modulating the base overlap strength with each month's
//! cycle relation to the day master and its branch interaction with the
//! natal day branch. Points are strictly increasing by `"YYYY-MM"`;
//! year rollover is handled by plain month arithmetic.

use std::collections::BTreeMap;

use unse_core::error::{EngineError, EngineResult};
use unse_core::types::{
    Branch, LifeDomain, DomainScore, MonthlyOverlapPoint, PairInteractionKind, PeakLevel,
    SajuProfile, Stem, YearlyOverlapPoint,
};

use crate::cycle::{month_ganzhi, year_ganzhi};
use crate::interaction::pair_between;
use crate::scoring::{daeun_score, seun_score, wolun_score};

/// Divisor mapping a cycle-layer score (±~12) onto overlap space (±0.3).
const SCORE_TO_OVERLAP: f64 = 40.0;

/// Inputs for the monthly timeline walk.
#[derive(Debug, Clone, Copy)]
pub struct TimelineInput {
    pub start_year: i32,
    /// Start month, 1-12.
    pub start_month: u32,
    /// Baseline overlap strength, 0-1.
    pub base_overlap_strength: f64,
    /// Multiplier ≥ 1 carried onto every point.
    pub time_overlap_weight: f64,
    pub day_master: Stem,
    pub natal_day_branch: Branch,
}

fn month_adjustment(input: &TimelineInput, year: i32, month: u32) -> EngineResult<f64> {
    let pair = month_ganzhi(year, month)?;
    let mut adjustment = wolun_score(input.day_master, pair).score / SCORE_TO_OVERLAP;
    if let Some(interaction) = pair_between(input.natal_day_branch, pair.branch) {
        adjustment += match interaction.kind {
            PairInteractionKind::Yukhap => 0.05,
            PairInteractionKind::Chung => -0.08,
            PairInteractionKind::Wonjin => -0.04,
        };
    }
    Ok(adjustment)
}

/// Produce the 12-point forward monthly overlap series.
///
/// # Errors
///
/// `InvalidMonth` when the start month is outside 1-12.
pub fn generate_monthly_overlap_timeline(
    input: &TimelineInput,
) -> EngineResult<Vec<MonthlyOverlapPoint>> {
    if !(1..=12).contains(&input.start_month) {
        return Err(EngineError::InvalidMonth {
            month: input.start_month,
        });
    }

    let time_overlap_weight = input.time_overlap_weight.max(1.0);
    let mut points = Vec::with_capacity(12);
    for offset in 0..12u32 {
        let absolute = (input.start_month - 1 + offset) % 12;
        let year = input.start_year + ((input.start_month - 1 + offset) / 12) as i32;
        let month = absolute + 1;

        let strength = (input.base_overlap_strength + month_adjustment(input, year, month)?)
            .clamp(0.0, 1.0);
        points.push(MonthlyOverlapPoint {
            month: format!("{year:04}-{month:02}"),
            overlap_strength: strength,
            time_overlap_weight,
            peak_level: PeakLevel::classify(strength),
        });
    }
    Ok(points)
}

/// Intensity factor for one domain, derived from its adjusted score:
/// domains with stronger signals show proportionally higher peaks.
/// Range [0.6, 1.2].
fn domain_intensity(score: &DomainScore) -> f64 {
    0.6 + 0.6 * (score.final_score_adjusted / 100.0).clamp(0.0, 1.0)
}

/// Scale the global timeline into one series per domain.
pub fn generate_timeline_by_domain(
    global: &[MonthlyOverlapPoint],
    domains: &BTreeMap<LifeDomain, DomainScore>,
) -> BTreeMap<LifeDomain, Vec<MonthlyOverlapPoint>> {
    let mut by_domain = BTreeMap::new();
    for (&domain, score) in domains {
        let intensity = domain_intensity(score);
        let series: Vec<MonthlyOverlapPoint> = global
            .iter()
            .map(|point| {
                let strength = (point.overlap_strength * intensity).clamp(0.0, 1.0);
                MonthlyOverlapPoint {
                    month: point.month.clone(),
                    overlap_strength: strength,
                    time_overlap_weight: point.time_overlap_weight,
                    peak_level: PeakLevel::classify(strength),
                }
            })
            .collect();
        by_domain.insert(domain, series);
    }
    by_domain
}

/// Produce the N-year forward overlap series, modulated per year by the
/// yearly cycle and the active decade cycle.
pub fn generate_yearly_overlap_series(
    profile: &SajuProfile,
    start_year: i32,
    span_years: usize,
    base_overlap_strength: f64,
) -> Vec<YearlyOverlapPoint> {
    (0..span_years)
        .map(|offset| {
            let year = start_year + offset as i32;
            let seun = seun_score(profile.day_master, year_ganzhi(year));
            let daeun = daeun_score(
                profile.day_master,
                profile.daeun_for_year(year).map(|e| e.pair),
            );
            let strength = (base_overlap_strength
                + seun.score / SCORE_TO_OVERLAP
                + daeun.score / (SCORE_TO_OVERLAP * 2.0))
                .clamp(0.0, 1.0);
            YearlyOverlapPoint {
                year: format!("{year:04}"),
                overlap_strength: strength,
                peak_level: PeakLevel::classify(strength),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use unse_core::types::{GanzhiPair, PillarSet};

    fn input(start_year: i32, start_month: u32, base: f64) -> TimelineInput {
        TimelineInput {
            start_year,
            start_month,
            base_overlap_strength: base,
            time_overlap_weight: 1.1,
            day_master: Stem::Gap,
            natal_day_branch: Branch::Ja,
        }
    }

    #[test]
    fn test_exactly_twelve_points() {
        let points = generate_monthly_overlap_timeline(&input(2026, 3, 0.5)).unwrap();
        assert_eq!(points.len(), 12);
    }

    #[test]
    fn test_starts_at_requested_month() {
        let points = generate_monthly_overlap_timeline(&input(2026, 3, 0.5)).unwrap();
        assert_eq!(points[0].month, "2026-03");
    }

    #[test]
    fn test_strictly_increasing_with_rollover() {
        let points = generate_monthly_overlap_timeline(&input(2026, 8, 0.5)).unwrap();
        for window in points.windows(2) {
            assert!(
                window[0].month < window[1].month,
                "months must increase lexicographically: {} vs {}",
                window[0].month,
                window[1].month
            );
        }
        assert_eq!(points[4].month, "2026-12");
        assert_eq!(points[5].month, "2027-01");
        assert_eq!(points[11].month, "2027-07");
    }

    #[test]
    fn test_strength_bounded() {
        for base in [0.0, 0.3, 0.7, 1.0] {
            let points = generate_monthly_overlap_timeline(&input(2026, 1, base)).unwrap();
            for p in &points {
                assert!(
                    (0.0..=1.0).contains(&p.overlap_strength),
                    "strength {} out of bounds",
                    p.overlap_strength
                );
            }
        }
    }

    #[test]
    fn test_peak_levels_match_strength() {
        let points = generate_monthly_overlap_timeline(&input(2026, 1, 0.68)).unwrap();
        for p in &points {
            assert_eq!(p.peak_level, PeakLevel::classify(p.overlap_strength));
        }
    }

    #[test]
    fn test_invalid_start_month_rejected() {
        assert!(matches!(
            generate_monthly_overlap_timeline(&input(2026, 0, 0.5)),
            Err(EngineError::InvalidMonth { month: 0 })
        ));
        assert!(generate_monthly_overlap_timeline(&input(2026, 13, 0.5)).is_err());
    }

    #[test]
    fn test_time_overlap_weight_floored_at_one() {
        let mut i = input(2026, 1, 0.5);
        i.time_overlap_weight = 0.4;
        let points = generate_monthly_overlap_timeline(&i).unwrap();
        assert!(points.iter().all(|p| p.time_overlap_weight == 1.0));
    }

    fn domain_score(final_adjusted: f64) -> DomainScore {
        DomainScore {
            base_final_score: final_adjusted,
            final_score_adjusted: final_adjusted,
            saju_component_score: 50.0,
            astro_component_score: 50.0,
            alignment_score: 1.0,
            overlap_strength: 0.5,
            time_overlap_weight: 1.0,
            confidence_score: 0.5,
            drivers: Vec::new(),
            cautions: Vec::new(),
        }
    }

    #[test]
    fn test_stronger_domain_scales_higher() {
        let global = generate_monthly_overlap_timeline(&input(2026, 1, 0.6)).unwrap();
        let mut domains = BTreeMap::new();
        domains.insert(LifeDomain::Career, domain_score(90.0));
        domains.insert(LifeDomain::Health, domain_score(20.0));
        let by_domain = generate_timeline_by_domain(&global, &domains);

        for (career, health) in by_domain[&LifeDomain::Career]
            .iter()
            .zip(&by_domain[&LifeDomain::Health])
        {
            assert!(career.overlap_strength >= health.overlap_strength);
        }
    }

    #[test]
    fn test_domain_series_reclassifies_peaks() {
        let global = generate_monthly_overlap_timeline(&input(2026, 1, 0.7)).unwrap();
        let mut domains = BTreeMap::new();
        domains.insert(LifeDomain::Move, domain_score(100.0));
        let by_domain = generate_timeline_by_domain(&global, &domains);
        for p in &by_domain[&LifeDomain::Move] {
            assert_eq!(p.peak_level, PeakLevel::classify(p.overlap_strength));
        }
    }

    #[test]
    fn test_yearly_series_span_and_keys() {
        let pair = GanzhiPair::from_cycle_index(0);
        let profile = SajuProfile {
            day_master: Stem::Gap,
            pillars: PillarSet {
                year: pair,
                month: pair,
                day: pair,
                hour: None,
            },
            daeun: Vec::new(),
            yongsin: None,
            geokguk: None,
            shinsal: Vec::new(),
            birth_year: 1990,
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        };
        let series = generate_yearly_overlap_series(&profile, 2026, 10, 0.5);
        assert_eq!(series.len(), 10);
        assert_eq!(series[0].year, "2026");
        assert_eq!(series[9].year, "2035");
        for window in series.windows(2) {
            assert!(window[0].year < window[1].year);
        }
        for p in &series {
            assert!((0.0..=1.0).contains(&p.overlap_strength));
        }
    }
}
