//! Reason translation: an explicit ordered chain of match strategies.
//!
//! Resolution order per key:
//!
//! 1. event-type-specific phrasing table
//! 2. common (event-agnostic) phrasing table, exact match
//! 3. partial match against the common table (compound keys)
//! 4. element-specific phrasing for triad (`samhap`/`banhap`) keys
//! 5. seasonal-transition phrasing
//! 6. generic fallback: strip any leading decorative marker and prefix
//!    the raw text with "✨"
//!
//! The chain never fails and never returns an empty string for a
//! non-empty input.

use unse_core::types::{Element, EventType};

use super::tables::{common_phrase, event_phrase, samhap_phrase, COMMON, SEASONAL};

type Strategy = fn(&str, EventType) -> Option<String>;

/// The ordered strategy chain; the fallback runs when every strategy
/// declines.
const STRATEGIES: &[Strategy] = &[
    strategy_event,
    strategy_common_exact,
    strategy_common_partial,
    strategy_samhap_element,
    strategy_seasonal,
];

fn strategy_event(key: &str, event: EventType) -> Option<String> {
    event_phrase(key, event).map(str::to_string)
}

fn strategy_common_exact(key: &str, _event: EventType) -> Option<String> {
    common_phrase(key).map(str::to_string)
}

/// Compound keys resolve through the first common entry whose key is
/// contained in the raw key (or contains it).
fn strategy_common_partial(key: &str, _event: EventType) -> Option<String> {
    COMMON
        .iter()
        .find(|(k, _)| key.contains(k) || k.contains(key))
        .map(|(_, phrase)| (*phrase).to_string())
}

/// Triad keys embed an element name (`samhap_wood`, `banhap_fire`).
fn strategy_samhap_element(key: &str, _event: EventType) -> Option<String> {
    if !key.contains("samhap") && !key.contains("banhap") {
        return None;
    }
    let element = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ]
    .into_iter()
    .find(|e| key.contains(e.key()))?;
    Some(samhap_phrase(element.korean(), key.contains("samhap")))
}

fn strategy_seasonal(key: &str, _event: EventType) -> Option<String> {
    if key.contains("seasonal") {
        Some(SEASONAL.to_string())
    } else {
        None
    }
}

/// Generic fallback: drop a leading decorative marker, pass the raw text
/// through behind a "✨" prefix. Never empty for non-empty input.
fn fallback(key: &str) -> String {
    let stripped = key
        .trim_start_matches(|c: char| !c.is_alphanumeric() && !is_hangul(c))
        .trim();
    if stripped.is_empty() {
        format!("✨ {}", key.trim())
    } else {
        format!("✨ {stripped}")
    }
}

fn is_hangul(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

/// Translate one raw factor key for an event context.
pub fn translate_one(key: &str, event: EventType) -> String {
    for strategy in STRATEGIES {
        if let Some(text) = strategy(key, event) {
            return text;
        }
    }
    fallback(key)
}

/// Translate a list of raw factor keys, preserving order.
pub fn translate_reasons(raw_keys: &[String], event: EventType) -> Vec<String> {
    raw_keys
        .iter()
        .map(|key| translate_one(key, event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_override_beats_common() {
        let investment = translate_one("seun_wealth", EventType::Investment);
        let general = translate_one("seun_wealth", EventType::General);
        assert_ne!(investment, general);
        assert!(investment.contains("투자"));
    }

    #[test]
    fn test_wealth_key_differs_across_event_types() {
        let investment = translate_one("seun_wealth", EventType::Investment);
        let marriage = translate_one("seun_wealth", EventType::Marriage);
        assert_ne!(investment, marriage);
    }

    #[test]
    fn test_common_exact_match() {
        let text = translate_one("solar_return_window", EventType::General);
        assert!(text.contains("태양회귀"));
    }

    #[test]
    fn test_partial_match_for_compound_key() {
        // No exact entry for the branch variant; the bare stem catches it.
        let text = translate_one("seun_branch_resource", EventType::General);
        assert!(!text.starts_with('✨'), "compound key must not fall through: {text}");
    }

    #[test]
    fn test_samhap_key_selects_element_phrasing() {
        let wood = translate_one("samhap_wood", EventType::General);
        let water = translate_one("samhap_water", EventType::General);
        assert!(wood.contains("목(木)"));
        assert!(water.contains("수(水)"));
        assert_ne!(wood, water);
    }

    #[test]
    fn test_banhap_key_reads_differently() {
        let full = translate_one("samhap_fire", EventType::General);
        let half = translate_one("banhap_fire", EventType::General);
        assert_ne!(full, half);
        assert!(half.contains("반합"));
    }

    #[test]
    fn test_seasonal_key() {
        // The common table carries no seasonal entry; the dedicated
        // strategy resolves it for every event type.
        let text = translate_one("seasonal_shift_marker", EventType::General);
        assert_eq!(text, SEASONAL);
    }

    #[test]
    fn test_fallback_prefixes_and_strips_marker() {
        let text = translate_one("★특이한_기운", EventType::General);
        assert!(text.starts_with("✨ "));
        assert!(!text.contains('★'));
        assert!(text.contains("특이한_기운"));
    }

    #[test]
    fn test_never_empty_for_non_empty_key() {
        let keys = [
            "seun_wealth",
            "totally_unknown_key",
            "samhap_metal",
            "★",
            "seasonal_transition",
            "x",
        ];
        for key in keys {
            for event in [
                EventType::Investment,
                EventType::Marriage,
                EventType::Career,
                EventType::Health,
                EventType::Move,
                EventType::General,
            ] {
                let text = translate_one(key, event);
                assert!(!text.is_empty(), "empty translation for {key:?}/{event:?}");
            }
        }
    }

    #[test]
    fn test_translate_list_preserves_order_and_length() {
        let keys = vec![
            "seun_resource".to_string(),
            "unknown_one".to_string(),
            "iljin_chung".to_string(),
        ];
        let texts = translate_reasons(&keys, EventType::General);
        assert_eq!(texts.len(), 3);
        assert!(texts[0].contains("든든"));
        assert!(texts[1].starts_with("✨ "));
    }
}
