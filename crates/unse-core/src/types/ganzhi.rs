//! Sexagenary cycle value types: stems, branches, elements and pairs.
//!
//! The 60-term Jiazi cycle combines 10 heavenly stems with 12 earthly
//! branches. Stem and branch indices always advance together, so only 60
//! of the 120 combinatorial pairs are canonical:
//!
//! ```text
//! cycle_index = (stem_index * 6 - branch_index * 5) mod 60
//! ```
//!
//! A pair is canonical exactly when stem and branch indices share parity.
//! Generators in `unse-engine` only ever produce canonical pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five symbolic elements (oheng).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// All five elements in generating-cycle order.
    #[inline]
    pub fn all() -> [Element; 5] {
        [
            Self::Wood,
            Self::Fire,
            Self::Earth,
            Self::Metal,
            Self::Water,
        ]
    }

    /// The element this one generates (sangsaeng cycle):
    /// Wood → Fire → Earth → Metal → Water → Wood.
    #[inline]
    pub fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls (sanggeuk cycle):
    /// Wood → Earth → Water → Fire → Metal → Wood.
    #[inline]
    pub fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Relation of `other` as seen from `self`.
    ///
    /// `Generates` means self produces other (output); `GeneratedBy` means
    /// other produces self (resource); `Controls` means self controls other
    /// (wealth); `ControlledBy` means other controls self (pressure).
    pub fn relation_to(self, other: Element) -> ElementRelation {
        if self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == self {
            ElementRelation::GeneratedBy
        } else if self.controls() == other {
            ElementRelation::Controls
        } else {
            ElementRelation::ControlledBy
        }
    }

    /// Lowercase snake_case identifier used in factor keys.
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Korean display name.
    #[inline]
    pub fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목(木)",
            Self::Fire => "화(火)",
            Self::Earth => "토(土)",
            Self::Metal => "금(金)",
            Self::Water => "수(水)",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Pairwise relation between two elements, seen from the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// Same element (peer).
    Same,
    /// Self produces other (output).
    Generates,
    /// Other produces self (resource).
    GeneratedBy,
    /// Self controls other (wealth).
    Controls,
    /// Other controls self (pressure).
    ControlledBy,
}

/// The 10 heavenly stems, Korean romanization, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    /// 갑 (甲) - yang Wood
    Gap,
    /// 을 (乙) - yin Wood
    Eul,
    /// 병 (丙) - yang Fire
    Byeong,
    /// 정 (丁) - yin Fire
    Jeong,
    /// 무 (戊) - yang Earth
    Mu,
    /// 기 (己) - yin Earth
    Gi,
    /// 경 (庚) - yang Metal
    Gyeong,
    /// 신 (辛) - yin Metal
    Sin,
    /// 임 (壬) - yang Water
    Im,
    /// 계 (癸) - yin Water
    Gye,
}

impl Stem {
    /// Cycle index 0-9 in canonical order (Gap = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at the given cycle position; any integer is folded mod 10.
    pub fn from_index(index: i64) -> Stem {
        match index.rem_euclid(10) {
            0 => Self::Gap,
            1 => Self::Eul,
            2 => Self::Byeong,
            3 => Self::Jeong,
            4 => Self::Mu,
            5 => Self::Gi,
            6 => Self::Gyeong,
            7 => Self::Sin,
            8 => Self::Im,
            _ => Self::Gye,
        }
    }

    /// All ten stems in cycle order.
    pub fn all() -> [Stem; 10] {
        [
            Self::Gap,
            Self::Eul,
            Self::Byeong,
            Self::Jeong,
            Self::Mu,
            Self::Gi,
            Self::Gyeong,
            Self::Sin,
            Self::Im,
            Self::Gye,
        ]
    }

    /// Element of this stem.
    #[inline]
    pub fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Yang stems sit at even cycle positions.
    #[inline]
    pub fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Romanized name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hanja glyph.
    pub fn hanja(self) -> char {
        match self {
            Self::Gap => '甲',
            Self::Eul => '乙',
            Self::Byeong => '丙',
            Self::Jeong => '丁',
            Self::Mu => '戊',
            Self::Gi => '己',
            Self::Gyeong => '庚',
            Self::Sin => '辛',
            Self::Im => '壬',
            Self::Gye => '癸',
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 12 earthly branches, Korean romanization, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// 자 (子) - Water, rat
    Ja,
    /// 축 (丑) - Earth, ox
    Chuk,
    /// 인 (寅) - Wood, tiger
    In,
    /// 묘 (卯) - Wood, rabbit
    Myo,
    /// 진 (辰) - Earth, dragon
    Jin,
    /// 사 (巳) - Fire, snake
    Sa,
    /// 오 (午) - Fire, horse
    O,
    /// 미 (未) - Earth, goat
    Mi,
    /// 신 (申) - Metal, monkey
    Sin,
    /// 유 (酉) - Metal, rooster
    Yu,
    /// 술 (戌) - Earth, dog
    Sul,
    /// 해 (亥) - Water, pig
    Hae,
}

impl Branch {
    /// Cycle index 0-11 in canonical order (Ja = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at the given cycle position; any integer is folded mod 12.
    pub fn from_index(index: i64) -> Branch {
        match index.rem_euclid(12) {
            0 => Self::Ja,
            1 => Self::Chuk,
            2 => Self::In,
            3 => Self::Myo,
            4 => Self::Jin,
            5 => Self::Sa,
            6 => Self::O,
            7 => Self::Mi,
            8 => Self::Sin,
            9 => Self::Yu,
            10 => Self::Sul,
            _ => Self::Hae,
        }
    }

    /// All twelve branches in cycle order.
    pub fn all() -> [Branch; 12] {
        [
            Self::Ja,
            Self::Chuk,
            Self::In,
            Self::Myo,
            Self::Jin,
            Self::Sa,
            Self::O,
            Self::Mi,
            Self::Sin,
            Self::Yu,
            Self::Sul,
            Self::Hae,
        ]
    }

    /// Element of this branch.
    #[inline]
    pub fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    /// Romanized name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Hanja glyph.
    pub fn hanja(self) -> char {
        match self {
            Self::Ja => '子',
            Self::Chuk => '丑',
            Self::In => '寅',
            Self::Myo => '卯',
            Self::Jin => '辰',
            Self::Sa => '巳',
            Self::O => '午',
            Self::Mi => '未',
            Self::Sin => '申',
            Self::Yu => '酉',
            Self::Sul => '戌',
            Self::Hae => '亥',
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stem/branch pair of the sexagenary cycle.
///
/// Pure value type; computed, never mutated. Pairs built through
/// [`GanzhiPair::from_cycle_index`] are always canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanzhiPair {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanzhiPair {
    /// Build the pair at a cycle position; any integer is folded mod 60.
    pub fn from_cycle_index(index: i64) -> GanzhiPair {
        GanzhiPair {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    /// Element of the stem half.
    #[inline]
    pub fn stem_element(&self) -> Element {
        self.stem.element()
    }

    /// Element of the branch half.
    #[inline]
    pub fn branch_element(&self) -> Element {
        self.branch.element()
    }

    /// Whether stem and branch indices share parity, i.e. the pair is one
    /// of the canonical 60 Jiazi combinations.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        (self.stem.index() % 2) == (self.branch.index() % 2)
    }

    /// Position 0-59 in the canonical cycle, or `None` for a pair that is
    /// not part of the cycle.
    pub fn cycle_index(&self) -> Option<usize> {
        if !self.is_canonical() {
            return None;
        }
        let n = (self.stem.index() as i64 * 6 - self.branch.index() as i64 * 5).rem_euclid(60);
        Some(n as usize)
    }
}

impl fmt::Display for GanzhiPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}
