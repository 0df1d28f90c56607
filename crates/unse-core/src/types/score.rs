//! Score containers produced by the layer scorers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed score contribution from one analytical layer, with tagged
/// factor keys and display snippets.
///
/// Produced fresh per call; never shared mutable state. A layer given
/// absent classification input returns [`ScoreResult::neutral`] instead of
/// an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Signed score, typically within -10..+15 per layer.
    pub score: f64,
    /// Ordered factor key identifiers (snake_case).
    pub factors: Vec<String>,
    /// Positive display snippets, ordered by insertion.
    pub positive: Vec<String>,
    /// Negative display snippets, ordered by insertion.
    pub negative: Vec<String>,
}

impl ScoreResult {
    /// Zero-effect result: score 0, all lists empty.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// True when the result carries no score and no factors.
    pub fn is_neutral(&self) -> bool {
        self.score == 0.0 && self.factors.is_empty()
    }

    /// Add a positive contribution: `points` is added to the score, the
    /// factor key and display note are appended in order.
    pub fn add_positive(
        &mut self,
        points: f64,
        factor: impl Into<String>,
        note: impl Into<String>,
    ) {
        self.score += points;
        self.factors.push(factor.into());
        self.positive.push(note.into());
    }

    /// Add a negative contribution: `points` (a positive magnitude) is
    /// subtracted from the score.
    pub fn add_negative(
        &mut self,
        points: f64,
        factor: impl Into<String>,
        note: impl Into<String>,
    ) {
        self.score -= points;
        self.factors.push(factor.into());
        self.negative.push(note.into());
    }

    /// Fold another result into this one, preserving list order.
    pub fn merge(&mut self, other: ScoreResult) {
        self.score += other.score;
        self.factors.extend(other.factors);
        self.positive.extend(other.positive);
        self.negative.extend(other.negative);
    }
}

/// The ten named analysis layers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLayer {
    /// Yearly cycle.
    Seun,
    /// Monthly cycle.
    Wolun,
    /// Daily cycle.
    Iljin,
    /// Elemental affinity.
    Yongsin,
    /// Structural pattern.
    Geokguk,
    /// Decade cycle.
    Daeun,
    /// Multi-layer branch interaction.
    MultiLayer,
    /// Symbolic markers.
    Shinsal,
    /// Solar return.
    SolarReturn,
    /// Secondary progression.
    Progression,
}

impl ScoreLayer {
    /// All ten layers in pipeline order.
    pub fn all() -> [ScoreLayer; 10] {
        [
            Self::Seun,
            Self::Wolun,
            Self::Iljin,
            Self::Yongsin,
            Self::Geokguk,
            Self::Daeun,
            Self::MultiLayer,
            Self::Shinsal,
            Self::SolarReturn,
            Self::Progression,
        ]
    }

    /// Snake_case identifier used in driver/caution strings.
    pub fn key(self) -> &'static str {
        match self {
            Self::Seun => "seun",
            Self::Wolun => "wolun",
            Self::Iljin => "iljin",
            Self::Yongsin => "yongsin",
            Self::Geokguk => "geokguk",
            Self::Daeun => "daeun",
            Self::MultiLayer => "multi_layer",
            Self::Shinsal => "shinsal",
            Self::SolarReturn => "solar_return",
            Self::Progression => "progression",
        }
    }
}

impl fmt::Display for ScoreLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-layer normalized scores (each in [-1, 1]) feeding domain scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerScores {
    pub seun: f64,
    pub wolun: f64,
    pub iljin: f64,
    pub yongsin: f64,
    pub geokguk: f64,
    pub daeun: f64,
    pub multi_layer: f64,
    pub shinsal: f64,
    pub solar_return: f64,
    pub progression: f64,
}

impl LayerScores {
    /// Value for one layer.
    pub fn get(&self, layer: ScoreLayer) -> f64 {
        match layer {
            ScoreLayer::Seun => self.seun,
            ScoreLayer::Wolun => self.wolun,
            ScoreLayer::Iljin => self.iljin,
            ScoreLayer::Yongsin => self.yongsin,
            ScoreLayer::Geokguk => self.geokguk,
            ScoreLayer::Daeun => self.daeun,
            ScoreLayer::MultiLayer => self.multi_layer,
            ScoreLayer::Shinsal => self.shinsal,
            ScoreLayer::SolarReturn => self.solar_return,
            ScoreLayer::Progression => self.progression,
        }
    }

    /// Set the value for one layer.
    pub fn set(&mut self, layer: ScoreLayer, value: f64) {
        match layer {
            ScoreLayer::Seun => self.seun = value,
            ScoreLayer::Wolun => self.wolun = value,
            ScoreLayer::Iljin => self.iljin = value,
            ScoreLayer::Yongsin => self.yongsin = value,
            ScoreLayer::Geokguk => self.geokguk = value,
            ScoreLayer::Daeun => self.daeun = value,
            ScoreLayer::MultiLayer => self.multi_layer = value,
            ScoreLayer::Shinsal => self.shinsal = value,
            ScoreLayer::SolarReturn => self.solar_return = value,
            ScoreLayer::Progression => self.progression = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_neutral_is_empty() {
        let r = ScoreResult::neutral();
        assert_eq!(r.score, 0.0);
        assert!(r.factors.is_empty());
        assert!(r.positive.is_empty());
        assert!(r.negative.is_empty());
        assert!(r.is_neutral());
    }

    #[test]
    fn test_add_positive_and_negative() {
        let mut r = ScoreResult::neutral();
        r.add_positive(8.0, "seun_resource", "supportive year");
        r.add_negative(4.0, "seun_pressure", "pressured year");
        assert_eq!(r.score, 4.0);
        assert_eq!(r.factors, vec!["seun_resource", "seun_pressure"]);
        assert_eq!(r.positive.len(), 1);
        assert_eq!(r.negative.len(), 1);
        assert!(!r.is_neutral());
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut a = ScoreResult::neutral();
        a.add_positive(2.0, "first", "a");
        let mut b = ScoreResult::neutral();
        b.add_negative(1.0, "second", "b");
        a.merge(b);
        assert_eq!(a.score, 1.0);
        assert_eq!(a.factors, vec!["first", "second"]);
    }

    #[test]
    fn test_layer_scores_get_set_roundtrip() {
        let mut scores = LayerScores::default();
        for (i, layer) in ScoreLayer::all().into_iter().enumerate() {
            scores.set(layer, i as f64 / 10.0);
        }
        for (i, layer) in ScoreLayer::all().into_iter().enumerate() {
            assert_eq!(scores.get(layer), i as f64 / 10.0, "layer {layer}");
        }
    }

    #[test]
    fn test_layer_keys_unique() {
        use std::collections::HashSet;
        let keys: HashSet<_> = ScoreLayer::all().iter().map(|l| l.key()).collect();
        assert_eq!(keys.len(), 10);
    }
}
