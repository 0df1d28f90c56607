//! Twelve-stage life-cycle classification of a stem at a branch.
//!
//! Each stem has a birth branch (jangsaeng); yang stems walk the twelve
//! stages forward around the branch cycle, yin stems walk backward. The
//! twelve stages fold down to five energy stages with fixed score
//! bonuses:
//!
//! ```text
//! Peak +8   Rising +4   Neutral +0   Declining -2   Dormant -5
//! ```

use serde::{Deserialize, Serialize};

use unse_core::types::{Branch, EnergyStage, Stem};

/// The twelve life stages in cycle order from birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// 장생 - birth
    Jangsaeng,
    /// 목욕 - bathing
    Mokyok,
    /// 관대 - capping
    Gwandae,
    /// 건록 - prosperity
    Geonrok,
    /// 제왕 - imperial peak
    Jewang,
    /// 쇠 - waning
    Soe,
    /// 병 - sickness
    Byeong,
    /// 사 - death
    Sa,
    /// 묘 - tomb
    Myo,
    /// 절 - severance
    Jeol,
    /// 태 - conception
    Tae,
    /// 양 - nurture
    Yang,
}

impl LifeStage {
    fn from_offset(offset: i64) -> LifeStage {
        match offset.rem_euclid(12) {
            0 => Self::Jangsaeng,
            1 => Self::Mokyok,
            2 => Self::Gwandae,
            3 => Self::Geonrok,
            4 => Self::Jewang,
            5 => Self::Soe,
            6 => Self::Byeong,
            7 => Self::Sa,
            8 => Self::Myo,
            9 => Self::Jeol,
            10 => Self::Tae,
            _ => Self::Yang,
        }
    }
}

/// Birth branch (jangsaeng position) of a stem.
fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Hae,
        Stem::Eul => Branch::O,
        Stem::Byeong | Stem::Mu => Branch::In,
        Stem::Jeong | Stem::Gi => Branch::Yu,
        Stem::Gyeong => Branch::Sa,
        Stem::Sin => Branch::Ja,
        Stem::Im => Branch::Sin,
        Stem::Gye => Branch::Myo,
    }
}

/// Life stage of `stem` at `branch`.
pub fn twelve_stage(stem: Stem, branch: Branch) -> LifeStage {
    let birth = birth_branch(stem).index() as i64;
    let at = branch.index() as i64;
    let offset = if stem.is_yang() { at - birth } else { birth - at };
    LifeStage::from_offset(offset)
}

/// Fold a life stage down to its energy stage.
pub fn energy_stage(stage: LifeStage) -> EnergyStage {
    match stage {
        LifeStage::Jangsaeng | LifeStage::Gwandae | LifeStage::Yang => EnergyStage::Rising,
        LifeStage::Geonrok | LifeStage::Jewang => EnergyStage::Peak,
        LifeStage::Soe | LifeStage::Byeong | LifeStage::Sa => EnergyStage::Declining,
        LifeStage::Myo | LifeStage::Jeol => EnergyStage::Dormant,
        LifeStage::Mokyok | LifeStage::Tae => EnergyStage::Neutral,
    }
}

/// Fixed score bonus per energy stage.
pub fn energy_bonus(stage: EnergyStage) -> f64 {
    match stage {
        EnergyStage::Peak => 8.0,
        EnergyStage::Rising => 4.0,
        EnergyStage::Declining => -2.0,
        EnergyStage::Dormant => -5.0,
        EnergyStage::Neutral => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yang_stem_classic_positions() {
        // Gap: birth at Hae, prosperity at In, peak at Myo.
        assert_eq!(twelve_stage(Stem::Gap, Branch::Hae), LifeStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Gap, Branch::In), LifeStage::Geonrok);
        assert_eq!(twelve_stage(Stem::Gap, Branch::Myo), LifeStage::Jewang);
    }

    #[test]
    fn test_yin_stem_walks_backward() {
        // Eul: birth at O, walking backward reaches Geonrok at Myo.
        assert_eq!(twelve_stage(Stem::Eul, Branch::O), LifeStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Myo), LifeStage::Geonrok);
    }

    #[test]
    fn test_each_stem_hits_all_twelve_stages() {
        use std::collections::HashSet;
        for stem in Stem::all() {
            let stages: HashSet<_> = Branch::all()
                .into_iter()
                .map(|b| twelve_stage(stem, b))
                .collect();
            assert_eq!(stages.len(), 12, "stem {stem} must cover all 12 stages");
        }
    }

    #[test]
    fn test_energy_stage_fold_covers_all() {
        // Two peak stages, three rising, three declining, two dormant,
        // two neutral.
        let all = [
            LifeStage::Jangsaeng,
            LifeStage::Mokyok,
            LifeStage::Gwandae,
            LifeStage::Geonrok,
            LifeStage::Jewang,
            LifeStage::Soe,
            LifeStage::Byeong,
            LifeStage::Sa,
            LifeStage::Myo,
            LifeStage::Jeol,
            LifeStage::Tae,
            LifeStage::Yang,
        ];
        let peaks = all.iter().filter(|&&s| energy_stage(s) == EnergyStage::Peak).count();
        let rising = all.iter().filter(|&&s| energy_stage(s) == EnergyStage::Rising).count();
        assert_eq!(peaks, 2);
        assert_eq!(rising, 3);
    }

    #[test]
    fn test_bonus_values() {
        assert_eq!(energy_bonus(EnergyStage::Peak), 8.0);
        assert_eq!(energy_bonus(EnergyStage::Rising), 4.0);
        assert_eq!(energy_bonus(EnergyStage::Declining), -2.0);
        assert_eq!(energy_bonus(EnergyStage::Dormant), -5.0);
        assert_eq!(energy_bonus(EnergyStage::Neutral), 0.0);
    }
}
