//! Fixed per-domain layer weight vectors.
//!
//! Distinct domains weight different layers: career leans on the
//! structural and decade-cycle layers, love on daily interactions and
//! markers, health on the daily cycle and elemental affinity, move on
//! multi-layer motion signals. All weights are non-negative, so a
//! zero-weight layer can never move a domain's score and raising any
//! weighted layer never lowers it.

use unse_core::types::{LifeDomain, ScoreLayer};

/// Weight of one layer inside one domain's projection.
pub fn layer_weight(domain: LifeDomain, layer: ScoreLayer) -> f64 {
    use LifeDomain::*;
    use ScoreLayer::*;
    match (domain, layer) {
        (Career, Seun) => 1.2,
        (Career, Wolun) => 0.8,
        (Career, Iljin) => 0.5,
        (Career, Yongsin) => 1.0,
        (Career, Geokguk) => 1.6,
        (Career, Daeun) => 1.5,
        (Career, MultiLayer) => 1.0,
        (Career, Shinsal) => 0.5,
        (Career, SolarReturn) => 0.6,
        (Career, Progression) => 0.8,

        (Love, Seun) => 0.8,
        (Love, Wolun) => 1.0,
        (Love, Iljin) => 1.2,
        (Love, Yongsin) => 0.8,
        (Love, Geokguk) => 0.5,
        (Love, Daeun) => 0.8,
        (Love, MultiLayer) => 1.2,
        (Love, Shinsal) => 1.4,
        (Love, SolarReturn) => 0.8,
        (Love, Progression) => 1.0,

        (Money, Seun) => 1.4,
        (Money, Wolun) => 1.2,
        (Money, Iljin) => 0.8,
        (Money, Yongsin) => 1.2,
        (Money, Geokguk) => 1.0,
        (Money, Daeun) => 1.2,
        (Money, MultiLayer) => 0.8,
        (Money, Shinsal) => 0.6,
        (Money, SolarReturn) => 0.5,
        (Money, Progression) => 0.5,

        (Health, Seun) => 0.6,
        (Health, Wolun) => 0.8,
        (Health, Iljin) => 1.6,
        (Health, Yongsin) => 1.4,
        (Health, Geokguk) => 0.4,
        (Health, Daeun) => 0.6,
        (Health, MultiLayer) => 0.8,
        (Health, Shinsal) => 1.2,
        (Health, SolarReturn) => 0.8,
        (Health, Progression) => 0.6,

        (Move, Seun) => 1.0,
        (Move, Wolun) => 1.0,
        (Move, Iljin) => 0.8,
        (Move, Yongsin) => 0.6,
        (Move, Geokguk) => 0.6,
        (Move, Daeun) => 1.0,
        (Move, MultiLayer) => 1.4,
        (Move, Shinsal) => 1.0,
        (Move, SolarReturn) => 1.0,
        (Move, Progression) => 0.6,
    }
}

/// Span of the domain's swing around the 50-point midline: a fully
/// saturated positive projection lands at 50 + scale.
pub fn domain_scale(domain: LifeDomain) -> f64 {
    match domain {
        LifeDomain::Career => 30.0,
        LifeDomain::Love => 32.0,
        LifeDomain::Money => 30.0,
        LifeDomain::Health => 28.0,
        LifeDomain::Move => 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_weights_non_negative() {
        for domain in LifeDomain::all() {
            for layer in ScoreLayer::all() {
                assert!(
                    layer_weight(domain, layer) >= 0.0,
                    "weight for {domain}/{layer} must be non-negative"
                );
            }
        }
    }

    #[test]
    fn test_domains_weight_layers_differently() {
        // Career leans on the structural layer harder than health does;
        // health leans on the daily cycle harder than career does.
        assert!(
            layer_weight(LifeDomain::Career, ScoreLayer::Geokguk)
                > layer_weight(LifeDomain::Health, ScoreLayer::Geokguk)
        );
        assert!(
            layer_weight(LifeDomain::Health, ScoreLayer::Iljin)
                > layer_weight(LifeDomain::Career, ScoreLayer::Iljin)
        );
    }

    #[test]
    fn test_scales_positive() {
        for domain in LifeDomain::all() {
            assert!(domain_scale(domain) > 0.0);
        }
    }
}
