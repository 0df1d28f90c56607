//! Fixed table of symbolic markers and their signed effects.
//!
//! Markers arrive as names emitted by the external profile extractor
//! (Korean, e.g. "천을귀인"). Unknown names resolve to `None` from
//! [`map_shinsal`] and are skipped silently by [`process_shinsals`] —
//! aggregation is accumulation, not deduplication, so a repeated marker
//! reinforces its effect.

use serde::{Deserialize, Serialize};

use unse_core::types::ShinsalMarker;

/// Marker category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShinsalCategory {
    Lucky,
    Unlucky,
    Special,
}

/// Enumerated marker space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShinsalKind {
    /// 천을귀인 - noble helper
    CheoneulGwiin,
    /// 천덕귀인 - heavenly virtue
    CheondeokGwiin,
    /// 월덕귀인 - monthly virtue
    WoldeokGwiin,
    /// 문창귀인 - literary star
    MunchangGwiin,
    /// 금여 - golden carriage
    Geumyeo,
    /// 암록 - hidden prosperity
    Amrok,
    /// 백호살 - white tiger
    Baekho,
    /// 괴강살 - commanding star
    Goegang,
    /// 양인살 - yang blade
    Yangin,
    /// 귀문관살 - ghost gate
    Gwimun,
    /// 원진살 - resentment
    Wonjin,
    /// 공망 - emptiness
    Gongmang,
    /// 역마살 - travel horse
    Yeokma,
    /// 도화살 - peach blossom
    Dohwa,
    /// 화개살 - canopy of art
    Hwagae,
}

impl ShinsalKind {
    /// Resolve a marker name. Accepts the Korean names the profile
    /// extractor emits, with or without the trailing 살/귀인 suffix where
    /// usage varies.
    pub fn from_name(name: &str) -> Option<ShinsalKind> {
        match name.trim() {
            "천을귀인" | "천을" => Some(Self::CheoneulGwiin),
            "천덕귀인" | "천덕" => Some(Self::CheondeokGwiin),
            "월덕귀인" | "월덕" => Some(Self::WoldeokGwiin),
            "문창귀인" | "문창" => Some(Self::MunchangGwiin),
            "금여" => Some(Self::Geumyeo),
            "암록" => Some(Self::Amrok),
            "백호살" | "백호" => Some(Self::Baekho),
            "괴강살" | "괴강" => Some(Self::Goegang),
            "양인살" | "양인" => Some(Self::Yangin),
            "귀문관살" | "귀문" => Some(Self::Gwimun),
            "원진살" | "원진" => Some(Self::Wonjin),
            "공망" => Some(Self::Gongmang),
            "역마살" | "역마" => Some(Self::Yeokma),
            "도화살" | "도화" => Some(Self::Dohwa),
            "화개살" | "화개" => Some(Self::Hwagae),
            _ => None,
        }
    }

    pub fn category(self) -> ShinsalCategory {
        match self {
            Self::CheoneulGwiin
            | Self::CheondeokGwiin
            | Self::WoldeokGwiin
            | Self::MunchangGwiin
            | Self::Geumyeo
            | Self::Amrok => ShinsalCategory::Lucky,
            Self::Baekho | Self::Goegang | Self::Yangin | Self::Gwimun | Self::Wonjin
            | Self::Gongmang => ShinsalCategory::Unlucky,
            Self::Yeokma | Self::Dohwa | Self::Hwagae => ShinsalCategory::Special,
        }
    }

    /// Factor key identifier.
    pub fn factor_key(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "shinsal_cheoneul",
            Self::CheondeokGwiin => "shinsal_cheondeok",
            Self::WoldeokGwiin => "shinsal_woldeok",
            Self::MunchangGwiin => "shinsal_munchang",
            Self::Geumyeo => "shinsal_geumyeo",
            Self::Amrok => "shinsal_amrok",
            Self::Baekho => "shinsal_baekho",
            Self::Goegang => "shinsal_goegang",
            Self::Yangin => "shinsal_yangin",
            Self::Gwimun => "shinsal_gwimun",
            Self::Wonjin => "shinsal_wonjin",
            Self::Gongmang => "shinsal_gongmang",
            Self::Yeokma => "shinsal_yeokma",
            Self::Dohwa => "shinsal_dohwa",
            Self::Hwagae => "shinsal_hwagae",
        }
    }

    /// Signed layer contribution.
    pub fn score(self) -> f64 {
        match self.category() {
            ShinsalCategory::Lucky => 3.0,
            ShinsalCategory::Unlucky => -3.0,
            ShinsalCategory::Special => 1.0,
        }
    }

    fn recommendations(self) -> Vec<String> {
        let lines: &[&str] = match self {
            Self::CheoneulGwiin => &["귀인의 도움을 기대해도 좋은 자리입니다"],
            Self::CheondeokGwiin => &["덕을 베풀면 두 배로 돌아옵니다"],
            Self::WoldeokGwiin => &["주변의 신망이 쌓이는 때이니 관계에 공을 들이세요"],
            Self::MunchangGwiin => &["공부와 문서운이 밝으니 시험과 계약에 유리합니다"],
            Self::Geumyeo => &["품위 있는 처신이 재물과 인연을 부릅니다"],
            Self::Amrok => &["보이지 않는 곳에서 재물길이 열려 있습니다"],
            Self::Yeokma => &["이동과 출장, 새로운 환경이 기회가 됩니다"],
            Self::Dohwa => &["매력이 빛나는 때이니 만남의 자리를 피하지 마세요"],
            Self::Hwagae => &["예술적 감각과 몰입이 깊어지는 시기입니다"],
            _ => &[],
        };
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn warnings(self) -> Vec<String> {
        let lines: &[&str] = match self {
            Self::Baekho => &["급한 일과 날카로운 물건을 조심하세요"],
            Self::Goegang => &["강한 기운이 넘치니 독단적인 결정을 삼가세요"],
            Self::Yangin => &["경쟁이 격해질 수 있으니 한 발 물러서는 지혜가 필요합니다"],
            Self::Gwimun => &["생각이 깊어져 잠을 설칠 수 있으니 마음을 덜어내세요"],
            Self::Wonjin => &["가까운 사람과의 어긋남을 말로 풀어내세요"],
            Self::Gongmang => &["헛걸음이 생기기 쉬우니 약속과 일정을 재확인하세요"],
            Self::Yeokma => &["분주함이 지나치면 실속이 빠질 수 있습니다"],
            Self::Dohwa => &["구설이 따를 수 있으니 처신을 분명히 하세요"],
            _ => &[],
        };
        lines.iter().map(|s| s.to_string()).collect()
    }
}

/// Effect of one recognized marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShinsalEffect {
    pub factor_key: String,
    pub score: f64,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

/// Accumulated effect of a marker list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregatedShinsalEffect {
    pub score: f64,
    pub factor_keys: Vec<String>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

/// Look up a single marker by name. Unknown names return `None`.
pub fn map_shinsal(name: &str) -> Option<ShinsalEffect> {
    let kind = ShinsalKind::from_name(name)?;
    Some(ShinsalEffect {
        factor_key: kind.factor_key().to_string(),
        score: kind.score(),
        recommendations: kind.recommendations(),
        warnings: kind.warnings(),
    })
}

/// Classify a marker name without computing its effect.
pub fn shinsal_type(name: &str) -> Option<ShinsalCategory> {
    ShinsalKind::from_name(name).map(ShinsalKind::category)
}

/// Fold a marker list into one accumulated effect, silently skipping
/// unrecognized names. Duplicates are kept: repeated markers reinforce.
pub fn process_shinsals(markers: &[ShinsalMarker]) -> AggregatedShinsalEffect {
    let mut agg = AggregatedShinsalEffect::default();
    for marker in markers {
        let Some(effect) = map_shinsal(&marker.name) else {
            continue;
        };
        agg.score += effect.score;
        agg.factor_keys.push(effect.factor_key);
        agg.recommendations.extend(effect.recommendations);
        agg.warnings.extend(effect.warnings);
    }
    agg
}
