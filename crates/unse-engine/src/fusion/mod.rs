//! Cross-system fusion: domain projection and agreement metrics.

mod metrics;
mod scorer;
mod weights;

pub use metrics::{alignment_score, confidence_score, overlap_strength, time_overlap_weight};
pub use scorer::{score_domains, DomainScoringInput};
pub use weights::{domain_scale, layer_weight};
