//! End-to-end verification of the scoring pipeline.
//!
//! Exercises the published behavioral contract across six scenarios:
//! 1. Cycle determinism and the 1984 = Gap-Ja anchor
//! 2. Graceful degradation (absent classifications, empty inputs)
//! 3. Marker aggregation identities
//! 4. Timeline shape, ordering and peak boundaries
//! 5. Cache hit/expiry/eviction behavior through the facade
//! 6. Reason translation fallback chain

use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use unse_cache::{CacheConfig, CacheKeyParts, ResultCache};
use unse_core::types::{
    AstroProfile, Branch, DaeunEntry, Element, EventType, GanzhiPair, GeokgukInfo, GeokgukPattern,
    PeakLevel, PillarSet, Placement, Planet, SajuProfile, ShinsalMarker, Stem, YongsinInfo,
    ZodiacSign,
};
use unse_engine::cycle::{date_ganzhi, year_ganzhi};
use unse_engine::engine::compute_day_analysis;
use unse_engine::interaction::{analyze_multi_layer, MultiLayerInput};
use unse_engine::reasons::translate_one;
use unse_engine::shinsal::process_shinsals;
use unse_engine::FortuneEngine;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn full_saju() -> SajuProfile {
    SajuProfile {
        day_master: Stem::Byeong,
        pillars: PillarSet {
            year: year_ganzhi(1991),
            month: GanzhiPair::from_cycle_index(27),
            day: GanzhiPair {
                stem: Stem::Byeong,
                branch: Branch::O,
            },
            hour: Some(GanzhiPair::from_cycle_index(33)),
        },
        daeun: vec![
            DaeunEntry {
                start_age: 7,
                pair: GanzhiPair::from_cycle_index(28),
            },
            DaeunEntry {
                start_age: 27,
                pair: GanzhiPair::from_cycle_index(30),
            },
        ],
        yongsin: Some(YongsinInfo {
            primary: Element::Wood,
            secondary: Some(Element::Fire),
        }),
        geokguk: Some(GeokgukInfo {
            pattern: GeokgukPattern::Jeonggwan,
        }),
        shinsal: vec![
            ShinsalMarker {
                name: "문창귀인".to_string(),
            },
            ShinsalMarker {
                name: "도화살".to_string(),
            },
        ],
        birth_year: 1991,
        birth_date: date(1991, 8, 20),
    }
}

fn bare_saju() -> SajuProfile {
    SajuProfile {
        day_master: Stem::Byeong,
        pillars: PillarSet {
            year: year_ganzhi(1991),
            month: GanzhiPair::from_cycle_index(27),
            day: GanzhiPair {
                stem: Stem::Byeong,
                branch: Branch::O,
            },
            hour: None,
        },
        daeun: Vec::new(),
        yongsin: None,
        geokguk: None,
        shinsal: Vec::new(),
        birth_year: 1991,
        birth_date: date(1991, 8, 20),
    }
}

fn astro() -> AstroProfile {
    AstroProfile {
        placements: vec![Placement {
            planet: Planet::Sun,
            sign: ZodiacSign::Leo,
            house: Some(1),
        }],
        active_transits: vec!["saturn_square_moon".to_string()],
        birth_date: date(1991, 8, 20),
    }
}

// =============================================================================
// Scenario 1: cycle determinism
// =============================================================================

#[test]
fn test_cycle_anchor_and_determinism() {
    let pair = year_ganzhi(1984);
    assert_eq!((pair.stem, pair.branch), (Stem::Gap, Branch::Ja));

    let d = date(2026, 7, 1);
    assert_eq!(date_ganzhi(d), date_ganzhi(d));

    let mut day = date(2026, 1, 1);
    for _ in 0..400 {
        let next = day.succ_opt().unwrap();
        assert_ne!(date_ganzhi(day), date_ganzhi(next));
        day = next;
    }
}

// =============================================================================
// Scenario 2: graceful degradation
// =============================================================================

#[test]
fn test_bare_profile_degrades_not_errors() {
    let analysis = compute_day_analysis(&bare_saju(), &astro(), date(2026, 4, 10));
    // Absent classifications zero their layers without touching the rest.
    assert_eq!(analysis.layer_scores.yongsin, 0.0);
    assert_eq!(analysis.layer_scores.geokguk, 0.0);
    assert_eq!(analysis.layer_scores.daeun, 0.0);
    assert_eq!(analysis.layer_scores.shinsal, 0.0);
    assert_eq!(analysis.domains.len(), 5);
}

#[test]
fn test_multi_layer_neutral_on_missing_input() {
    let saju = full_saju();
    for (day_master, day_branch) in [
        (None, Some(Branch::O)),
        (Some(Stem::Byeong), None),
        (None, None),
    ] {
        let result = analyze_multi_layer(&MultiLayerInput {
            day_master,
            day_branch,
            profile: &saju,
            target_year: 2026,
            target_month: 6,
        });
        assert_eq!(result.score, 0.0);
        assert!(result.branch_interactions.is_empty());
    }
}

#[test]
fn test_confidence_reflects_missing_data() {
    let rich = compute_day_analysis(&full_saju(), &astro(), date(2026, 4, 10));
    let poor = compute_day_analysis(&bare_saju(), &astro(), date(2026, 4, 10));
    assert!(rich.confidence_score > poor.confidence_score);
}

// =============================================================================
// Scenario 3: marker aggregation
// =============================================================================

#[test]
fn test_marker_identities() {
    let empty = process_shinsals(&[]);
    assert!(empty.factor_keys.is_empty());
    assert!(empty.recommendations.is_empty());
    assert!(empty.warnings.is_empty());

    let known = vec![
        ShinsalMarker {
            name: "천을귀인".to_string(),
        },
        ShinsalMarker {
            name: "백호살".to_string(),
        },
    ];
    let mut with_noise = known.clone();
    with_noise.insert(
        1,
        ShinsalMarker {
            name: "알수없는살".to_string(),
        },
    );
    assert_eq!(process_shinsals(&known), process_shinsals(&with_noise));
}

// =============================================================================
// Scenario 4: timeline shape
// =============================================================================

#[test]
fn test_calendar_outlook_contract() {
    let engine = FortuneEngine::new(Arc::new(ResultCache::default()));
    let key = CacheKeyParts::new("s", "a");
    let outlook = engine
        .calendar_outlook(&full_saju(), &astro(), 2026, 10, &key)
        .unwrap();

    assert_eq!(outlook.global.len(), 12);
    assert_eq!(outlook.global[0].month, "2026-10");
    for window in outlook.global.windows(2) {
        assert!(window[0].month < window[1].month);
    }
    for point in &outlook.global {
        assert!((0.0..=1.0).contains(&point.overlap_strength));
        assert_eq!(point.peak_level, PeakLevel::classify(point.overlap_strength));
    }
    // Every signal points at a peak-classified month in its own series.
    for signal in &outlook.signals {
        let series = match signal.domain {
            Some(domain) => &outlook.by_domain[&domain],
            None => &outlook.global,
        };
        let point = series.iter().find(|p| p.month == signal.month).unwrap();
        assert_eq!(point.peak_level, PeakLevel::Peak);
    }
}

// =============================================================================
// Scenario 5: cache behavior through the facade
// =============================================================================

#[test]
fn test_cache_hits_and_clear() {
    let cache = Arc::new(ResultCache::new(CacheConfig::default()));
    let engine = FortuneEngine::new(Arc::clone(&cache));
    let key = CacheKeyParts::new("fp-saju", "fp-astro");
    let saju = full_saju();
    let a = astro();

    let first = engine.analyze_day(&saju, &a, date(2026, 2, 2), &key);
    let second = engine.analyze_day(&saju, &a, date(2026, 2, 2), &key);
    assert!(Arc::ptr_eq(&first, &second));

    engine.daily_fortune(&saju, &a, date(2026, 2, 2), &key);
    engine
        .monthly_theme(&saju, &a, 2026, 2, &key)
        .unwrap();
    engine.weekly_theme(&saju, &a, date(2026, 2, 2), &key);

    let stats = cache.stats();
    assert_eq!(stats.analysis_entries, 1);
    assert_eq!(stats.daily_entries, 1);
    assert_eq!(stats.monthly_entries, 1);
    assert_eq!(stats.weekly_entries, 1);

    cache.clear();
    assert_eq!(cache.stats().total(), 0);
}

#[test]
fn test_distinct_dates_fill_distinct_slots() {
    let cache = Arc::new(ResultCache::default());
    let engine = FortuneEngine::new(Arc::clone(&cache));
    let key = CacheKeyParts::new("fp-saju", "fp-astro");
    let saju = full_saju();
    let a = astro();
    for offset in 0..10 {
        engine.analyze_day(&saju, &a, date(2026, 3, 1 + offset), &key);
    }
    assert_eq!(cache.stats().analysis_entries, 10);
}

// =============================================================================
// Scenario 6: reason translation
// =============================================================================

#[test]
fn test_reason_chain_end_to_end() {
    // Event-specific override.
    assert_ne!(
        translate_one("seun_wealth", EventType::Investment),
        translate_one("seun_wealth", EventType::Marriage)
    );
    // Triad keys resolve per element.
    assert_ne!(
        translate_one("samhap_wood", EventType::General),
        translate_one("samhap_metal", EventType::General)
    );
    // Unknown keys pass through behind the generic marker.
    let fallback = translate_one("정체불명의_요인", EventType::General);
    assert!(fallback.starts_with("✨ "));
    assert!(fallback.contains("정체불명의_요인"));
}

#[test]
fn test_analysis_serde_roundtrip() {
    let analysis = compute_day_analysis(&full_saju(), &astro(), date(2026, 4, 10));
    let json = serde_json::to_string(&analysis).unwrap();
    assert!(json.contains("\"domains\""));
    let restored: unse_core::types::DayAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, analysis);
}

#[test]
fn test_daily_reasons_translated_for_full_profile() {
    let engine = FortuneEngine::new(Arc::new(ResultCache::default()));
    let key = CacheKeyParts::new("s", "a");
    let fortune = engine.daily_fortune(&full_saju(), &astro(), date(2026, 6, 6), &key);
    assert!(!fortune.reasons.is_empty());
    for reason in fortune.reasons.iter() {
        assert!(!reason.is_empty());
    }
}
