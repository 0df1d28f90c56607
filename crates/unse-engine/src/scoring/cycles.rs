//! Cycle-layer scorers: yearly (seun), monthly (wolun), daily (iljin)
//! and decade (daeun).
//!
//! All four derive their contribution from the element relation between
//! the day master and the period's stem, with the branch relation at
//! half weight. Relation weights:
//!
//! ```text
//! GeneratedBy (resource) +8    Controls (wealth)   +6
//! Same        (peer)     +5    Generates (output)  +3
//! ControlledBy (pressure) -4
//! ```

use unse_core::types::{
    Branch, Element, ElementRelation, GanzhiPair, PairInteractionKind, ScoreResult, Stem,
};

use crate::interaction::pair_between;

/// Month branches that open a season (saengji).
const SEASONAL_OPENERS: [Branch; 4] = [Branch::In, Branch::Sa, Branch::Sin, Branch::Hae];

/// Full-weight points, factor suffix and polarity for one relation.
fn relation_points(rel: ElementRelation) -> (f64, &'static str, bool) {
    match rel {
        ElementRelation::GeneratedBy => (8.0, "resource", true),
        ElementRelation::Same => (5.0, "peer", true),
        ElementRelation::Controls => (6.0, "wealth", true),
        ElementRelation::Generates => (3.0, "output", true),
        ElementRelation::ControlledBy => (4.0, "pressure", false),
    }
}

fn relation_note(prefix: &str, rel: ElementRelation, element: Element) -> String {
    let flow = match rel {
        ElementRelation::GeneratedBy => "기운이 일간을 생조하여 든든합니다",
        ElementRelation::Same => "일간과 같은 기운이 어깨를 나란히 합니다",
        ElementRelation::Controls => "재물의 기운을 거머쥘 수 있습니다",
        ElementRelation::Generates => "표현과 활동의 기운이 살아납니다",
        ElementRelation::ControlledBy => "기운이 일간을 압박하니 무리는 금물입니다",
    };
    let period = match prefix {
        "seun" => "올해",
        "wolun" => "이달",
        "iljin" => "오늘",
        "daeun" => "이 대운",
        _ => "이 시기",
    };
    format!("{period} {}의 {flow}", element.korean())
}

/// Score the relation of one cycle pair to the day master, with the
/// stated weight applied to the stem relation and half of it to the
/// branch relation.
fn cycle_relation_score(
    day_master: Stem,
    pair: GanzhiPair,
    prefix: &str,
    weight: f64,
) -> ScoreResult {
    let mut result = ScoreResult::neutral();
    let dm = day_master.element();

    let stem_rel = dm.relation_to(pair.stem_element());
    let (points, suffix, positive) = relation_points(stem_rel);
    let factor = format!("{prefix}_{suffix}");
    let note = relation_note(prefix, stem_rel, pair.stem_element());
    if positive {
        result.add_positive(points * weight, factor, note);
    } else {
        result.add_negative(points * weight, factor, note);
    }

    let branch_rel = dm.relation_to(pair.branch_element());
    let (points, suffix, positive) = relation_points(branch_rel);
    let factor = format!("{prefix}_branch_{suffix}");
    let note = relation_note(prefix, branch_rel, pair.branch_element());
    if positive {
        result.add_positive(points * weight * 0.5, factor, note);
    } else {
        result.add_negative(points * weight * 0.5, factor, note);
    }

    result
}

/// Yearly-cycle score for the day master against the year pair.
pub fn seun_score(day_master: Stem, year_pair: GanzhiPair) -> ScoreResult {
    cycle_relation_score(day_master, year_pair, "seun", 1.0)
}

/// Monthly-cycle score. Months opening a season carry an extra
/// transition factor.
pub fn wolun_score(day_master: Stem, month_pair: GanzhiPair) -> ScoreResult {
    let mut result = cycle_relation_score(day_master, month_pair, "wolun", 0.8);
    if SEASONAL_OPENERS.contains(&month_pair.branch) {
        result.add_positive(
            1.0,
            "seasonal_transition",
            "계절이 바뀌는 길목이라 변화의 기운이 감돕니다",
        );
    }
    result
}

/// Daily-cycle score: day-master relation to today's pair plus today's
/// branch interaction with the natal day branch.
pub fn iljin_score(day_master: Stem, day_pair: GanzhiPair, natal_day_branch: Branch) -> ScoreResult {
    let mut result = cycle_relation_score(day_master, day_pair, "iljin", 0.6);
    if let Some(interaction) = pair_between(natal_day_branch, day_pair.branch) {
        match interaction.kind {
            PairInteractionKind::Yukhap => result.add_positive(
                4.0,
                "iljin_yukhap",
                "오늘의 지지가 일지와 합을 이루어 순조롭습니다",
            ),
            PairInteractionKind::Chung => result.add_negative(
                5.0,
                "iljin_chung",
                "오늘의 지지가 일지와 충돌하니 한 템포 쉬어가세요",
            ),
            PairInteractionKind::Wonjin => result.add_negative(
                2.0,
                "iljin_wonjin",
                "미묘한 어긋남이 있는 날이니 오해를 줄이세요",
            ),
        }
    }
    result
}

/// Decade-cycle score. Absent entry (before the first cycle or an empty
/// list) yields the neutral result.
pub fn daeun_score(day_master: Stem, daeun_pair: Option<GanzhiPair>) -> ScoreResult {
    match daeun_pair {
        Some(pair) => cycle_relation_score(day_master, pair, "daeun", 0.5),
        None => ScoreResult::neutral(),
    }
}
