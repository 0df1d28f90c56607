//! Domain projection: per-layer scores → five `DomainScore` records.

use std::collections::BTreeMap;

use unse_core::types::{DomainScore, LayerScores, LifeDomain, ScoreLayer};

use super::weights::{domain_scale, layer_weight};

/// Inputs to the domain projection. Layer scores are normalized to
/// [-1, 1]; component scores to 0-100; alignment, overlap and confidence
/// to [0, 1]; the time-overlap weight is ≥ 1.
#[derive(Debug, Clone, Copy)]
pub struct DomainScoringInput<'a> {
    pub layers: &'a LayerScores,
    pub base_score: f64,
    pub saju_component: f64,
    pub astro_component: f64,
    pub alignment: f64,
    pub overlap_strength: f64,
    pub time_overlap_weight: f64,
    pub confidence: f64,
}

/// Number of driver/caution layer keys reported per domain.
const TOP_CONTRIBUTIONS: usize = 2;

/// Project the layer scores onto the five life domains.
///
/// For each domain the weighted average of the layer scores (weights
/// from the fixed per-domain table) is scaled onto the domain's base
/// range around the global base score, then
/// `final_score_adjusted = base × alignment × time_overlap_weight`,
/// clamped to 0-100. A zero-weight layer cannot change the score, and
/// raising a positively-weighted layer never lowers the base score.
pub fn score_domains(input: &DomainScoringInput<'_>) -> BTreeMap<LifeDomain, DomainScore> {
    let mut domains = BTreeMap::new();
    for domain in LifeDomain::all() {
        domains.insert(domain, score_one(domain, input));
    }
    domains
}

fn score_one(domain: LifeDomain, input: &DomainScoringInput<'_>) -> DomainScore {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut contributions: Vec<(ScoreLayer, f64)> = Vec::new();

    for layer in ScoreLayer::all() {
        let weight = layer_weight(domain, layer);
        if weight == 0.0 {
            continue;
        }
        let value = input.layers.get(layer);
        weighted_sum += weight * value;
        weight_total += weight;
        contributions.push((layer, weight * value));
    }

    let weighted_avg = if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        0.0
    };

    let midline = (input.base_score + input.saju_component + input.astro_component) / 3.0;
    let base_final_score = (midline + weighted_avg * domain_scale(domain)).clamp(0.0, 100.0);
    let final_score_adjusted =
        (base_final_score * input.alignment * input.time_overlap_weight).clamp(0.0, 100.0);

    contributions.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
    let drivers: Vec<String> = contributions
        .iter()
        .filter(|(_, c)| *c > 0.0)
        .take(TOP_CONTRIBUTIONS)
        .map(|(layer, _)| layer.key().to_string())
        .collect();
    let cautions: Vec<String> = contributions
        .iter()
        .filter(|(_, c)| *c < 0.0)
        .take(TOP_CONTRIBUTIONS)
        .map(|(layer, _)| layer.key().to_string())
        .collect();

    DomainScore {
        base_final_score,
        final_score_adjusted,
        saju_component_score: input.saju_component,
        astro_component_score: input.astro_component,
        alignment_score: input.alignment,
        overlap_strength: input.overlap_strength,
        time_overlap_weight: input.time_overlap_weight,
        confidence_score: input.confidence,
        drivers,
        cautions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input(layers: &LayerScores) -> DomainScoringInput<'_> {
        DomainScoringInput {
            layers,
            base_score: 55.0,
            saju_component: 60.0,
            astro_component: 50.0,
            alignment: 0.9,
            overlap_strength: 0.55,
            time_overlap_weight: 1.1,
            confidence: 0.7,
        }
    }

    #[test]
    fn test_all_five_domains_scored() {
        let layers = LayerScores::default();
        let domains = score_domains(&base_input(&layers));
        assert_eq!(domains.len(), 5);
        for domain in LifeDomain::all() {
            assert!(domains.contains_key(&domain));
        }
    }

    #[test]
    fn test_zero_layers_sit_at_midline() {
        let layers = LayerScores::default();
        let input = base_input(&layers);
        let domains = score_domains(&input);
        let midline = (55.0 + 60.0 + 50.0) / 3.0;
        for (domain, score) in &domains {
            assert!(
                (score.base_final_score - midline).abs() < 1e-9,
                "{domain} base must sit at the midline with all-zero layers"
            );
        }
    }

    #[test]
    fn test_raising_a_layer_never_lowers_base() {
        let mut low = LayerScores::default();
        low.geokguk = 0.1;
        let mut high = low;
        high.geokguk = 0.8;

        for domain in LifeDomain::all() {
            let input_low = base_input(&low);
            let input_high = base_input(&high);
            let a = score_one(domain, &input_low);
            let b = score_one(domain, &input_high);
            assert!(
                b.base_final_score >= a.base_final_score,
                "raising geokguk lowered {domain}"
            );
        }
    }

    #[test]
    fn test_scores_clamped_to_range() {
        let mut layers = LayerScores::default();
        for layer in ScoreLayer::all() {
            layers.set(layer, 1.0);
        }
        let mut input = base_input(&layers);
        input.base_score = 100.0;
        input.saju_component = 100.0;
        input.astro_component = 100.0;
        input.time_overlap_weight = 1.5;
        for score in score_domains(&input).values() {
            assert!(score.base_final_score <= 100.0);
            assert!(score.final_score_adjusted <= 100.0);
        }
    }

    #[test]
    fn test_adjustment_formula_when_unclamped() {
        let layers = LayerScores::default();
        let input = base_input(&layers);
        let score = score_one(LifeDomain::Career, &input);
        let expected = score.base_final_score * 0.9 * 1.1;
        assert!((score.final_score_adjusted - expected).abs() < 1e-9);
    }

    #[test]
    fn test_drivers_and_cautions_ranked() {
        let mut layers = LayerScores::default();
        layers.geokguk = 0.9; // career weight 1.6 → strongest driver
        layers.seun = 0.3;
        layers.iljin = -0.8;
        let input = base_input(&layers);
        let score = score_one(LifeDomain::Career, &input);
        assert_eq!(score.drivers[0], "geokguk");
        assert_eq!(score.cautions, vec!["iljin"]);
    }

    #[test]
    fn test_domains_differ_on_same_layers() {
        let mut layers = LayerScores::default();
        layers.geokguk = 1.0;
        let input = base_input(&layers);
        let domains = score_domains(&input);
        // The structural layer moves career more than health.
        assert!(
            domains[&LifeDomain::Career].base_final_score
                > domains[&LifeDomain::Health].base_final_score
        );
    }
}
