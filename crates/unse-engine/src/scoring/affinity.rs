//! Affinity-layer scorers: elemental affinity (yongsin) and structural
//! pattern (geokguk).
//!
//! Both classifications are optional profile fields; an absent
//! classification yields a neutral zero-effect result.

use unse_core::types::{GanzhiPair, GeokgukInfo, ScoreResult, Stem, YongsinInfo};

/// Elemental-affinity score for a period pair.
///
/// The period's stem and branch elements are checked against the
/// subject's beneficial element: a primary match is worth +10, a
/// secondary match +5, and a period whose stem element controls the
/// primary costs -5.
pub fn yongsin_score(yongsin: Option<&YongsinInfo>, period: &GanzhiPair) -> ScoreResult {
    let Some(info) = yongsin else {
        return ScoreResult::neutral();
    };
    let mut result = ScoreResult::neutral();
    let period_elements = [period.stem_element(), period.branch_element()];

    if period_elements.contains(&info.primary) {
        result.add_positive(
            10.0,
            format!("yongsin_match_{}", info.primary.key()),
            format!(
                "용신 {}의 기운이 이 시기에 흐르니 큰 힘이 됩니다",
                info.primary.korean()
            ),
        );
    } else if let Some(secondary) = info.secondary {
        if period_elements.contains(&secondary) {
            result.add_positive(
                5.0,
                format!("yongsin_secondary_{}", secondary.key()),
                format!("보조 용신 {}의 기운이 은은하게 돕습니다", secondary.korean()),
            );
        }
    }

    if period.stem_element().controls() == info.primary {
        result.add_negative(
            5.0,
            format!("yongsin_conflict_{}", info.primary.key()),
            format!(
                "이 시기의 기운이 용신 {}을 누르니 기세가 꺾입니다",
                info.primary.korean()
            ),
        );
    }

    result
}

/// Structural-pattern score for a period pair.
///
/// A period whose element relation to the day master matches the
/// pattern's favorable relation supports the structure (+6); a pressure
/// period that the pattern does not feed on undermines it (-4).
pub fn geokguk_score(
    geokguk: Option<&GeokgukInfo>,
    day_master: Stem,
    period: &GanzhiPair,
) -> ScoreResult {
    let Some(info) = geokguk else {
        return ScoreResult::neutral();
    };
    let mut result = ScoreResult::neutral();
    let favored = info.pattern.favorable_relation();
    let rel = day_master.element().relation_to(period.stem_element());

    if rel == favored {
        result.add_positive(
            6.0,
            "geokguk_support",
            "격국을 살리는 기운이 들어와 구조가 단단해집니다",
        );
    } else if rel == unse_core::types::ElementRelation::ControlledBy {
        result.add_negative(
            4.0,
            "geokguk_pressure",
            "격국이 눌리는 시기이니 방어적으로 움직이세요",
        );
    }

    result
}
