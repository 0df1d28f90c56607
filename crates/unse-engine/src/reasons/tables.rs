//! Phrasing tables for reason translation.
//!
//! The event-specific tables override individual keys per event type;
//! the common table is event-agnostic. Partial matching scans the common
//! table in order, so more specific entries come first and bare stems
//! (`resource`, `chung`, ...) sit at the end as catch-alls for compound
//! keys. Triad (`samhap`/`banhap`) keys are deliberately absent from the
//! common table — they are resolved by the element-specific strategy.

use unse_core::types::EventType;

/// Event-specific phrasing. The same raw key reads differently for an
/// investment than for a marriage consultation.
pub(crate) fn event_phrase(key: &str, event: EventType) -> Option<&'static str> {
    match event {
        EventType::Investment => match key {
            "seun_wealth" => Some("투자 기회가 무르익는 해이니 공부한 종목부터 차근차근 접근하세요"),
            "daeun_wealth" => Some("대운이 재물을 향해 흐르니 장기 투자의 씨앗을 심을 때입니다"),
            "iljin_chung" => Some("충이 드는 날의 투자 결정은 하루 미루는 편이 좋습니다"),
            "solar_return_window" => Some("태양회귀 구간은 한 해 투자 전략을 다시 세우기 좋은 때입니다"),
            _ => None,
        },
        EventType::Marriage => match key {
            "seun_wealth" => Some("물질적 안정이 혼담에 힘을 싣는 해입니다"),
            "iljin_yukhap" => Some("혼담에 합이 드는 날이라 이야기가 순조롭게 풀립니다"),
            "shinsal_dohwa" => Some("도화의 매력이 빛나니 인연의 자리가 기대됩니다"),
            "iljin_chung" => Some("상견례나 중요한 약속은 충이 없는 날로 고르세요"),
            _ => None,
        },
        EventType::Career => match key {
            "geokguk_support" => Some("격국이 힘을 받는 시기라 승진과 이직 모두 해볼 만합니다"),
            "seun_pressure" => Some("직장의 압박이 크지만 관운의 관문이기도 한 해입니다"),
            "seun_wealth" => Some("성과가 보상으로 이어지는 해이니 연봉 협상에 유리합니다"),
            "daeun_resource" => Some("귀인의 후원이 커리어를 밀어주는 대운입니다"),
            _ => None,
        },
        EventType::Health => match key {
            "iljin_chung" => Some("기운이 부딪히는 날이니 무리한 일정과 과로를 피하세요"),
            "shinsal_baekho" => Some("백호의 기운이 있으니 안전사고에 특히 유의하세요"),
            "seun_pressure" => Some("올해는 체력 관리가 운의 절반이니 휴식을 우선하세요"),
            _ => None,
        },
        EventType::Move => match key {
            "shinsal_yeokma" => Some("역마가 움직이니 이사와 이동에 더없이 좋은 흐름입니다"),
            "iljin_chung" => Some("이사 날짜로는 충이 드는 날을 피하는 것이 좋습니다"),
            "seasonal_transition" => Some("계절이 바뀌는 길목이라 터를 옮기기에 자연스러운 때입니다"),
            _ => None,
        },
        EventType::General => None,
    }
}

/// Event-agnostic phrasing. Scanned in order for partial matches, so the
/// specific compound keys precede the bare-stem catch-alls.
pub(crate) const COMMON: &[(&str, &str)] = &[
    ("seun_resource", "한 해의 기운이 당신을 든든하게 받쳐줍니다"),
    ("seun_peer", "같은 기운의 동료들이 힘을 보태는 해입니다"),
    ("seun_wealth", "한 해 재물의 흐름이 당신 쪽으로 기웁니다"),
    ("seun_output", "재능을 드러낼수록 운이 트이는 해입니다"),
    ("seun_pressure", "책임이 무거워지는 해이니 속도를 조절하세요"),
    ("iljin_yukhap", "오늘의 기운이 일지와 합을 이루어 순조롭습니다"),
    ("iljin_chung", "기운이 부딪히는 날이니 중요한 결정은 미루세요"),
    ("iljin_wonjin", "미묘한 어긋남이 있는 날이니 오해를 줄이세요"),
    ("geokguk_support", "타고난 구조가 힘을 받아 단단해지는 시기입니다"),
    ("geokguk_pressure", "구조가 눌리는 시기이니 방어적으로 움직이세요"),
    ("solar_return_window", "태양회귀 구간이라 한 해의 테마가 새로 깨어납니다"),
    ("solar_return_near", "태양회귀가 가까워 새 흐름의 예열이 시작됩니다"),
    ("progression_element_match", "진행 태양이 본래의 원소 위를 걸어 안정적입니다"),
    ("progression_harmonious", "진행 태양이 조화로운 원소를 지나 순풍이 붑니다"),
    ("progression_tension", "진행 태양이 긴장 원소를 지나니 속도를 조절하세요"),
    ("shinsal_cheoneul", "천을귀인이 함께하니 귀인의 도움을 기대하세요"),
    ("shinsal_yeokma", "역마의 기운으로 이동과 변화가 활발해집니다"),
    ("shinsal_dohwa", "도화의 매력이 사람을 끌어들이는 때입니다"),
    // Bare stems: catch-alls for compound keys via partial matching.
    ("resource", "기운을 생조받아 든든한 흐름입니다"),
    ("peer", "어깨를 나란히 하는 기운이 함께합니다"),
    ("wealth", "재물의 기운이 가까이 있습니다"),
    ("output", "표현과 활동의 기운이 살아납니다"),
    ("pressure", "압박의 기운이 있으니 무리하지 마세요"),
    ("yukhap", "합이 드는 흐름이라 일이 순조롭습니다"),
    ("chung", "충이 드는 흐름이니 한 템포 쉬어가세요"),
    ("wonjin", "어긋나기 쉬운 흐름이니 말수를 줄이세요"),
    ("yongsin", "용신의 기운이 이 시기를 비춥니다"),
    ("shinsal", "신살의 기운이 이 시기에 작용합니다"),
];

/// Exact common-table lookup.
pub(crate) fn common_phrase(key: &str) -> Option<&'static str> {
    COMMON
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, phrase)| *phrase)
}

/// Element-specific phrasing for triad keys.
pub(crate) fn samhap_phrase(element_korean: &str, complete: bool) -> String {
    if complete {
        format!("{element_korean}의 기운이 삼합으로 크게 모여 흐름을 끌어올립니다")
    } else {
        format!("{element_korean}의 기운이 반합으로 절반쯤 모이고 있습니다")
    }
}

/// Seasonal-transition phrasing.
pub(crate) const SEASONAL: &str = "계절의 기운이 바뀌는 전환점이라 변화가 자연스럽습니다";
