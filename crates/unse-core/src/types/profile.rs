//! Immutable input profiles consumed by the scoring pipeline.
//!
//! Both profiles are constructed by an external profile-extraction
//! collaborator and never mutated by the engine. Optional classification
//! fields (`yongsin`, `geokguk`, an empty `daeun` list) are modeled as
//! `Option`/empty collections so every scorer's "absent input → neutral
//! result" branch is enforced by the type system.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ganzhi::{Branch, Element, ElementRelation, GanzhiPair, Stem};

/// The four birth pillars. The hour pillar is absent when the birth time
/// is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarSet {
    pub year: GanzhiPair,
    pub month: GanzhiPair,
    pub day: GanzhiPair,
    pub hour: Option<GanzhiPair>,
}

/// One decade-cycle (daeun) entry: the pair active from `start_age`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaeunEntry {
    pub start_age: u8,
    pub pair: GanzhiPair,
}

/// Elemental-affinity classification: the element that most benefits the
/// subject, with an optional secondary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YongsinInfo {
    pub primary: Element,
    pub secondary: Option<Element>,
}

/// The ten classical structural patterns (geokguk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeokgukPattern {
    /// 정관격 - proper officer
    Jeonggwan,
    /// 편관격 - seventh killer
    Pyeongwan,
    /// 정인격 - proper resource
    Jeongin,
    /// 편인격 - indirect resource
    Pyeonin,
    /// 식신격 - gourmet output
    Siksin,
    /// 상관격 - hurting officer
    Sanggwan,
    /// 정재격 - proper wealth
    Jeongjae,
    /// 편재격 - windfall wealth
    Pyeonjae,
    /// 건록격 - peer prosperity
    Geonrok,
    /// 양인격 - yang blade
    Yangin,
}

impl GeokgukPattern {
    /// The element relation (seen from the day master) that feeds this
    /// pattern. A period whose element stands in this relation to the day
    /// master supports the structure; the pressure relation undermines it.
    pub fn favorable_relation(self) -> ElementRelation {
        match self {
            Self::Jeonggwan | Self::Pyeongwan => ElementRelation::ControlledBy,
            Self::Jeongin | Self::Pyeonin => ElementRelation::GeneratedBy,
            Self::Siksin | Self::Sanggwan => ElementRelation::Generates,
            Self::Jeongjae | Self::Pyeonjae => ElementRelation::Controls,
            Self::Geonrok | Self::Yangin => ElementRelation::Same,
        }
    }
}

/// Structural-pattern classification of the birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeokgukInfo {
    pub pattern: GeokgukPattern,
}

/// A named symbolic marker (shinsal) attached to the chart by the
/// external profile extractor. Unrecognized names are skipped silently
/// during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShinsalMarker {
    pub name: String,
}

/// Four-Pillars profile. Immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SajuProfile {
    /// Day-master stem (the day pillar's stem).
    pub day_master: Stem,
    pub pillars: PillarSet,
    /// Decade-cycle entries, ascending by start age. May be empty.
    pub daeun: Vec<DaeunEntry>,
    pub yongsin: Option<YongsinInfo>,
    pub geokguk: Option<GeokgukInfo>,
    /// Chart-level symbolic markers. May be empty.
    pub shinsal: Vec<ShinsalMarker>,
    pub birth_year: i32,
    pub birth_date: NaiveDate,
}

impl SajuProfile {
    /// Element of the day master.
    #[inline]
    pub fn day_master_element(&self) -> Element {
        self.day_master.element()
    }

    /// The decade-cycle entry active in `year`: the entry with the greatest
    /// start age that is ≤ the subject's age in that year. `None` when no
    /// entry qualifies (before the first cycle, or an empty list).
    pub fn daeun_for_year(&self, year: i32) -> Option<&DaeunEntry> {
        let age = year - self.birth_year;
        if age < 0 {
            return None;
        }
        self.daeun
            .iter()
            .filter(|e| i32::from(e.start_age) <= age)
            .max_by_key(|e| e.start_age)
    }
}

/// Classical seven planets used in placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Western-astrology elements (distinct from the five-element system).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AstroElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl AstroElement {
    /// Fire harmonizes with Air, Earth with Water.
    pub fn harmonizes_with(self, other: AstroElement) -> bool {
        matches!(
            (self, other),
            (Self::Fire, Self::Air)
                | (Self::Air, Self::Fire)
                | (Self::Earth, Self::Water)
                | (Self::Water, Self::Earth)
        )
    }
}

/// The twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Sign containing the given calendar date (tropical boundaries).
    pub fn from_date(date: NaiveDate) -> ZodiacSign {
        match (date.month(), date.day()) {
            (3, 21..=31) | (4, 1..=19) => Self::Aries,
            (4, 20..=30) | (5, 1..=20) => Self::Taurus,
            (5, 21..=31) | (6, 1..=21) => Self::Gemini,
            (6, 22..=30) | (7, 1..=22) => Self::Cancer,
            (7, 23..=31) | (8, 1..=22) => Self::Leo,
            (8, 23..=31) | (9, 1..=22) => Self::Virgo,
            (9, 23..=30) | (10, 1..=23) => Self::Libra,
            (10, 24..=31) | (11, 1..=22) => Self::Scorpio,
            (11, 23..=30) | (12, 1..=21) => Self::Sagittarius,
            (12, 22..=31) | (1, 1..=19) => Self::Capricorn,
            (1, 20..=31) | (2, 1..=18) => Self::Aquarius,
            _ => Self::Pisces,
        }
    }

    /// Element of this sign.
    pub fn element(self) -> AstroElement {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => AstroElement::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => AstroElement::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => AstroElement::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => AstroElement::Water,
        }
    }
}

/// One planetary placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub planet: Planet,
    pub sign: ZodiacSign,
    pub house: Option<u8>,
}

/// Western-astrology profile. Immutable input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroProfile {
    pub placements: Vec<Placement>,
    /// Active transit labels, as emitted by the external transit scanner.
    pub active_transits: Vec<String>,
    pub birth_date: NaiveDate,
}
