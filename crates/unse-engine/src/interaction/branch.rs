//! Pairwise and group branch-interaction detection.
//!
//! Pairwise: the six harmonizing pairs (yukhap, +5), the six clashes
//! (chung, -6) and the six resentment pairs (wonjin, -3). Groups: the
//! four harmonizing triads (samhap, +12 complete); two triad members
//! including the peak branch form the half triad (banhap, +6).

use unse_core::types::{
    Branch, BranchGroupInteraction, Element, PairInteraction, PairInteractionKind,
};

const YUKHAP: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Chuk),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::Sul),
    (Branch::Jin, Branch::Yu),
    (Branch::Sa, Branch::Sin),
    (Branch::O, Branch::Mi),
];

const CHUNG: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

const WONJIN: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Yu),
    (Branch::Myo, Branch::Sin),
    (Branch::Jin, Branch::Hae),
    (Branch::Sa, Branch::Sul),
];

/// The four samhap triads as (members, peak member, element).
const SAMHAP: [([Branch; 3], Branch, Element); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], Branch::Ja, Element::Water),
    ([Branch::In, Branch::O, Branch::Sul], Branch::O, Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Branch::Yu, Element::Metal),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Branch::Myo, Element::Wood),
];

fn matches_pair(table: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Interaction between two branches, if any. Order-insensitive; a branch
/// never interacts with itself.
pub fn pair_between(a: Branch, b: Branch) -> Option<PairInteraction> {
    if a == b {
        return None;
    }
    let (kind, score_modifier) = if matches_pair(&YUKHAP, a, b) {
        (PairInteractionKind::Yukhap, 5.0)
    } else if matches_pair(&CHUNG, a, b) {
        (PairInteractionKind::Chung, -6.0)
    } else if matches_pair(&WONJIN, a, b) {
        (PairInteractionKind::Wonjin, -3.0)
    } else {
        return None;
    };
    Some(PairInteraction {
        kind,
        first: a,
        second: b,
        score_modifier,
    })
}

/// Unique branches in first-seen order.
fn unique(branches: &[Branch]) -> Vec<Branch> {
    let mut seen = Vec::new();
    for &b in branches {
        if !seen.contains(&b) {
            seen.push(b);
        }
    }
    seen
}

/// All pairwise interactions among the distinct branches of the slice.
pub fn detect_pairs(branches: &[Branch]) -> Vec<PairInteraction> {
    let distinct = unique(branches);
    let mut found = Vec::new();
    for (i, &a) in distinct.iter().enumerate() {
        for &b in &distinct[i + 1..] {
            if let Some(interaction) = pair_between(a, b) {
                found.push(interaction);
            }
        }
    }
    found
}

/// All triad (samhap) and half-triad (banhap) groups among the distinct
/// branches of the slice.
pub fn detect_groups(branches: &[Branch]) -> Vec<BranchGroupInteraction> {
    let distinct = unique(branches);
    let mut found = Vec::new();
    for (members, peak, element) in SAMHAP {
        let present: Vec<Branch> = members
            .iter()
            .copied()
            .filter(|m| distinct.contains(m))
            .collect();
        if present.len() == 3 {
            found.push(BranchGroupInteraction {
                name: format!("samhap_{}", element.key()),
                element,
                score: 12.0,
                description: format!(
                    "{}·{}·{} 삼합이 완성되어 {} 기운이 크게 모입니다",
                    members[0], members[1], members[2], element.korean()
                ),
            });
        } else if present.len() == 2 && present.contains(&peak) {
            found.push(BranchGroupInteraction {
                name: format!("banhap_{}", element.key()),
                element,
                score: 6.0,
                description: format!(
                    "{}·{} 반합으로 {} 기운이 절반쯤 모입니다",
                    present[0], present[1], element.korean()
                ),
            });
        }
    }
    found
}
