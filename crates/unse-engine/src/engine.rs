//! The engine facade: full pipeline assembly plus cache wiring.
//!
//! [`FortuneEngine`] owns a handle to the [`ResultCache`] injected by the
//! host's composition root — there is no module-level global. Each
//! operation checks its cache map first, computes on a miss, and stores
//! the fresh value. All computation stays synchronous and pure; a bad
//! date or profile degrades to neutral contributions instead of aborting
//! a batch.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use unse_cache::{CacheKeyParts, ResultCache};
use unse_core::error::{EngineError, EngineResult};
use unse_core::types::{
    AstroProfile, CalendarSignal, DailyFortune, DayAnalysis, EnergyStage, EventType, LayerScores,
    LifeDomain, MonthlyOverlapPoint, MonthlyTheme, MultiLayerAnalysis, SajuProfile, ScoreLayer,
    ScoreResult, WeeklyTheme, YearlyOverlapPoint,
};

use crate::cycle::{date_ganzhi, month_ganzhi, year_ganzhi};
use crate::fusion::{
    alignment_score, confidence_score, overlap_strength, score_domains, time_overlap_weight,
    DomainScoringInput,
};
use crate::interaction::{analyze_multi_layer, MultiLayerInput};
use crate::reasons::translate_reasons;
use crate::scoring::{
    daeun_score, geokguk_score, iljin_score, progression_score, seun_score, solar_return_score,
    wolun_score, yongsin_score,
};
use crate::shinsal::process_shinsals;
use crate::timeline::{
    derive_calendar_signals, generate_monthly_overlap_timeline, generate_timeline_by_domain,
    generate_yearly_overlap_series, TimelineInput,
};

/// Scale mapping a raw layer score (±~15) onto the normalized [-1, 1]
/// band consumed by domain scoring.
const LAYER_NORMALIZATION: f64 = 15.0;

/// How many leading factors feed the daily-fortune reason list.
const DAILY_REASON_LIMIT: usize = 5;

/// Combined calendar view: the global monthly series, one series per
/// domain, and the derived peak-window signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarOutlook {
    pub global: Vec<MonthlyOverlapPoint>,
    pub by_domain: BTreeMap<LifeDomain, Vec<MonthlyOverlapPoint>>,
    pub signals: Vec<CalendarSignal>,
}

/// Engine facade wiring the scoring pipeline to the result cache.
#[derive(Debug, Clone)]
pub struct FortuneEngine {
    cache: Arc<ResultCache>,
}

impl FortuneEngine {
    /// Build an engine around a cache handle owned by the composition
    /// root.
    pub fn new(cache: Arc<ResultCache>) -> Self {
        Self { cache }
    }

    /// Full day-level analysis, cached per (profiles, date).
    pub fn analyze_day(
        &self,
        saju: &SajuProfile,
        astro: &AstroProfile,
        date: NaiveDate,
        key: &CacheKeyParts,
    ) -> Arc<DayAnalysis> {
        let cache_key = key.day_key(date);
        if let Some(hit) = self.cache.get_analysis(&cache_key) {
            debug!(%date, "ENGINE: analysis cache hit");
            return hit;
        }
        debug!(%date, "ENGINE: analysis cache miss, computing");
        self.cache
            .put_analysis(cache_key, compute_day_analysis(saju, astro, date))
    }

    /// Condensed daily fortune, cached separately from the analysis.
    pub fn daily_fortune(
        &self,
        saju: &SajuProfile,
        astro: &AstroProfile,
        date: NaiveDate,
        key: &CacheKeyParts,
    ) -> Arc<DailyFortune> {
        let cache_key = key.daily_key(date);
        if let Some(hit) = self.cache.get_daily(&cache_key) {
            return hit;
        }
        let analysis = self.analyze_day(saju, astro, date, key);
        let (top_domain, overall_score) = top_domain_of(&analysis);
        let reason_keys: Vec<String> = analysis
            .factors
            .iter()
            .take(DAILY_REASON_LIMIT)
            .cloned()
            .collect();
        let fortune = DailyFortune {
            date,
            day_pair: analysis.day_pair,
            overall_score,
            top_domain,
            reasons: translate_reasons(&reason_keys, EventType::General),
        };
        self.cache.put_daily(cache_key, fortune)
    }

    /// Monthly theme, cached per (profiles, year, month).
    ///
    /// # Errors
    ///
    /// `InvalidMonth` when `month` is outside 1-12.
    pub fn monthly_theme(
        &self,
        saju: &SajuProfile,
        astro: &AstroProfile,
        year: i32,
        month: u32,
        key: &CacheKeyParts,
    ) -> EngineResult<Arc<MonthlyTheme>> {
        let cache_key = key.monthly_key(year, month);
        if let Some(hit) = self.cache.get_monthly(&cache_key) {
            return Ok(hit);
        }
        let theme = compute_monthly_theme(saju, astro, year, month)?;
        Ok(self.cache.put_monthly(cache_key, theme))
    }

    /// Weekly theme for the seven days starting at `week_start`, cached
    /// per (profiles, week start).
    pub fn weekly_theme(
        &self,
        saju: &SajuProfile,
        astro: &AstroProfile,
        week_start: NaiveDate,
        key: &CacheKeyParts,
    ) -> Arc<WeeklyTheme> {
        let cache_key = key.weekly_key(week_start);
        if let Some(hit) = self.cache.get_weekly(&cache_key) {
            return hit;
        }
        let theme = compute_weekly_theme(saju, week_start);
        self.cache.put_weekly(cache_key, theme)
    }

    /// Twelve-month calendar outlook from the given start month:
    /// global series, per-domain series and peak-window signals.
    /// Uncached — callers batch it behind the day-analysis cache.
    ///
    /// # Errors
    ///
    /// `InvalidMonth` when `start_month` is outside 1-12.
    pub fn calendar_outlook(
        &self,
        saju: &SajuProfile,
        astro: &AstroProfile,
        start_year: i32,
        start_month: u32,
        key: &CacheKeyParts,
    ) -> EngineResult<CalendarOutlook> {
        let first_day = NaiveDate::from_ymd_opt(start_year, start_month, 1)
            .ok_or(EngineError::InvalidMonth { month: start_month })?;
        let analysis = self.analyze_day(saju, astro, first_day, key);

        let input = TimelineInput {
            start_year,
            start_month,
            base_overlap_strength: analysis.overlap_strength,
            time_overlap_weight: analysis.time_overlap_weight,
            day_master: saju.day_master,
            natal_day_branch: saju.pillars.day.branch,
        };
        let global = generate_monthly_overlap_timeline(&input)?;
        let by_domain = generate_timeline_by_domain(&global, &analysis.domains);
        let signals = derive_calendar_signals(&global, &by_domain);
        Ok(CalendarOutlook {
            global,
            by_domain,
            signals,
        })
    }

    /// N-year forward overlap series. Uncached.
    pub fn year_outlook(
        &self,
        saju: &SajuProfile,
        start_year: i32,
        span_years: usize,
    ) -> Vec<YearlyOverlapPoint> {
        generate_yearly_overlap_series(saju, start_year, span_years, 0.5)
    }

    /// Handle to the underlying cache (stats, clearing).
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }
}

/// Strongest domain by adjusted score, plus the mean adjusted score.
fn top_domain_of(analysis: &DayAnalysis) -> (LifeDomain, f64) {
    let mut best = (LifeDomain::Career, f64::MIN);
    let mut sum = 0.0;
    for (&domain, score) in &analysis.domains {
        sum += score.final_score_adjusted;
        if score.final_score_adjusted > best.1 {
            best = (domain, score.final_score_adjusted);
        }
    }
    let mean = if analysis.domains.is_empty() {
        50.0
    } else {
        sum / analysis.domains.len() as f64
    };
    (best.0, mean)
}

/// Run the full day pipeline: cycles → layer scorers → marker fold →
/// multi-layer analysis → metrics → domain projection.
pub fn compute_day_analysis(
    saju: &SajuProfile,
    astro: &AstroProfile,
    date: NaiveDate,
) -> DayAnalysis {
    let day_pair = date_ganzhi(date);
    let year_pair = year_ganzhi(date.year());
    let month_pair = month_ganzhi(date.year(), date.month())
        .expect("calendar dates carry a month in 1-12");

    let seun = seun_score(saju.day_master, year_pair);
    let wolun = wolun_score(saju.day_master, month_pair);
    let iljin = iljin_score(saju.day_master, day_pair, saju.pillars.day.branch);
    let yongsin = yongsin_score(saju.yongsin.as_ref(), &day_pair);
    let geokguk = geokguk_score(saju.geokguk.as_ref(), saju.day_master, &day_pair);
    let daeun = daeun_score(
        saju.day_master,
        saju.daeun_for_year(date.year()).map(|e| e.pair),
    );
    let multi = analyze_multi_layer(&MultiLayerInput {
        day_master: Some(saju.day_master),
        day_branch: Some(saju.pillars.day.branch),
        profile: saju,
        target_year: date.year(),
        target_month: date.month(),
    });
    let markers = process_shinsals(&saju.shinsal);
    let solar = solar_return_score(astro.birth_date, date);
    let progression = progression_score(astro.birth_date, date);

    let transit_lift = astro.active_transits.len().min(3) as f64;
    let saju_raw = seun.score
        + wolun.score
        + iljin.score
        + yongsin.score
        + geokguk.score
        + daeun.score
        + multi.score
        + markers.score;
    let astro_raw = solar.result.score + progression.score + transit_lift;

    let mut layer_scores = LayerScores::default();
    layer_scores.set(ScoreLayer::Seun, normalize_layer(seun.score));
    layer_scores.set(ScoreLayer::Wolun, normalize_layer(wolun.score));
    layer_scores.set(ScoreLayer::Iljin, normalize_layer(iljin.score));
    layer_scores.set(ScoreLayer::Yongsin, normalize_layer(yongsin.score));
    layer_scores.set(ScoreLayer::Geokguk, normalize_layer(geokguk.score));
    layer_scores.set(ScoreLayer::Daeun, normalize_layer(daeun.score));
    layer_scores.set(ScoreLayer::MultiLayer, normalize_layer(multi.score));
    layer_scores.set(ScoreLayer::Shinsal, normalize_layer(markers.score));
    layer_scores.set(ScoreLayer::SolarReturn, normalize_layer(solar.result.score));
    layer_scores.set(ScoreLayer::Progression, normalize_layer(progression.score));

    let base_score = (50.0 + (saju_raw + astro_raw) * 0.8).clamp(0.0, 100.0);
    let saju_component = (50.0 + saju_raw * 1.2).clamp(0.0, 100.0);
    let astro_component = (50.0 + astro_raw * 2.5).clamp(0.0, 100.0);

    let alignment = alignment_score(saju_component, astro_component);
    let coinciding = coinciding_signals(&multi, &yongsin, &solar.result);
    let tow = time_overlap_weight(coinciding);
    let overlap = overlap_strength(saju_component, astro_component, alignment);
    let confidence = confidence_score(saju, astro);

    let domains = score_domains(&DomainScoringInput {
        layers: &layer_scores,
        base_score,
        saju_component,
        astro_component,
        alignment,
        overlap_strength: overlap,
        time_overlap_weight: tow,
        confidence,
    });

    let mut factors = Vec::new();
    for result in [&seun, &wolun, &iljin, &yongsin, &geokguk, &daeun] {
        factors.extend(result.factors.iter().cloned());
    }
    factors.extend(multi.branch_interactions.iter().map(|g| g.name.clone()));
    factors.extend(markers.factor_keys.iter().cloned());
    factors.extend(solar.result.factors.iter().cloned());
    factors.extend(progression.factors.iter().cloned());

    DayAnalysis {
        date,
        day_pair,
        layer_scores,
        base_score,
        saju_component_score: saju_component,
        astro_component_score: astro_component,
        alignment_score: alignment,
        overlap_strength: overlap,
        time_overlap_weight: tow,
        confidence_score: confidence,
        multi_layer: multi,
        factors,
        recommendations: markers.recommendations,
        warnings: markers.warnings,
        domains,
    }
}

fn normalize_layer(raw: f64) -> f64 {
    (raw / LAYER_NORMALIZATION).clamp(-1.0, 1.0)
}

/// Count the independent signals coinciding on the day: completed or
/// half triads, an affinity match, the solar-return window, peak energy.
fn coinciding_signals(
    multi: &MultiLayerAnalysis,
    yongsin: &ScoreResult,
    solar: &ScoreResult,
) -> usize {
    let mut count = multi.branch_interactions.len();
    if yongsin.factors.iter().any(|f| f.starts_with("yongsin_match")) {
        count += 1;
    }
    if solar.factors.iter().any(|f| f == "solar_return_window") {
        count += 1;
    }
    if multi.energy_stage == Some(EnergyStage::Peak) {
        count += 1;
    }
    count
}

fn compute_monthly_theme(
    saju: &SajuProfile,
    astro: &AstroProfile,
    year: i32,
    month: u32,
) -> EngineResult<MonthlyTheme> {
    let month_pair = month_ganzhi(year, month)?;
    let wolun = wolun_score(saju.day_master, month_pair);
    let yongsin = yongsin_score(saju.yongsin.as_ref(), &month_pair);
    let geokguk = geokguk_score(saju.geokguk.as_ref(), saju.day_master, &month_pair);
    // Mid-month stands in for the whole month on the astrology side.
    let mid_month = NaiveDate::from_ymd_opt(year, month, 15)
        .ok_or(EngineError::InvalidMonth { month })?;
    let solar = solar_return_score(astro.birth_date, mid_month);

    let raw = wolun.score + yongsin.score + geokguk.score + solar.result.score * 0.5;
    let score = (50.0 + raw * 1.5).clamp(0.0, 100.0);

    let strongest = [
        (ScoreLayer::Wolun, wolun.score),
        (ScoreLayer::Yongsin, yongsin.score),
        (ScoreLayer::Geokguk, geokguk.score),
    ]
    .into_iter()
    .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
    .map(|(layer, _)| layer)
    .unwrap_or(ScoreLayer::Wolun);
    let focus_domain = LifeDomain::all()
        .into_iter()
        .max_by(|&a, &b| {
            crate::fusion::layer_weight(a, strongest)
                .total_cmp(&crate::fusion::layer_weight(b, strongest))
        })
        .unwrap_or(LifeDomain::Career);

    let mut factors = wolun.factors;
    factors.extend(yongsin.factors);
    factors.extend(geokguk.factors);
    factors.extend(solar.result.factors);

    Ok(MonthlyTheme {
        month: format!("{year:04}-{month:02}"),
        month_pair,
        score,
        focus_domain,
        factors,
    })
}

fn compute_weekly_theme(saju: &SajuProfile, week_start: NaiveDate) -> WeeklyTheme {
    let mut best: (NaiveDate, f64) = (week_start, f64::MIN);
    let mut sum = 0.0;
    let mut best_factors: Vec<String> = Vec::new();

    for offset in 0..7 {
        let day = week_start + Duration::days(offset);
        let pair = date_ganzhi(day);
        let result = iljin_score(saju.day_master, pair, saju.pillars.day.branch);
        sum += result.score;
        if result.score > best.1 {
            best = (day, result.score);
            best_factors = result.factors;
        }
    }

    WeeklyTheme {
        week_start,
        score: (50.0 + (sum / 7.0) * 2.0).clamp(0.0, 100.0),
        best_day: best.0,
        factors: best_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unse_core::types::{
        Branch, DaeunEntry, Element, GanzhiPair, GeokgukInfo, GeokgukPattern, PillarSet, Placement,
        Planet, ShinsalMarker, Stem, YongsinInfo, ZodiacSign,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_saju() -> SajuProfile {
        SajuProfile {
            day_master: Stem::Gap,
            pillars: PillarSet {
                year: GanzhiPair::from_cycle_index(6),
                month: GanzhiPair::from_cycle_index(14),
                day: GanzhiPair {
                    stem: Stem::Gap,
                    branch: Branch::In,
                },
                hour: Some(GanzhiPair::from_cycle_index(20)),
            },
            daeun: vec![
                DaeunEntry {
                    start_age: 4,
                    pair: GanzhiPair::from_cycle_index(15),
                },
                DaeunEntry {
                    start_age: 34,
                    pair: GanzhiPair {
                        stem: Stem::Im,
                        branch: Branch::Sul,
                    },
                },
            ],
            yongsin: Some(YongsinInfo {
                primary: Element::Water,
                secondary: Some(Element::Wood),
            }),
            geokguk: Some(GeokgukInfo {
                pattern: GeokgukPattern::Siksin,
            }),
            shinsal: vec![
                ShinsalMarker {
                    name: "천을귀인".to_string(),
                },
                ShinsalMarker {
                    name: "역마살".to_string(),
                },
            ],
            birth_year: 1990,
            birth_date: date(1990, 6, 15),
        }
    }

    fn sample_astro() -> AstroProfile {
        AstroProfile {
            placements: vec![
                Placement {
                    planet: Planet::Sun,
                    sign: ZodiacSign::Gemini,
                    house: Some(10),
                },
                Placement {
                    planet: Planet::Moon,
                    sign: ZodiacSign::Pisces,
                    house: Some(7),
                },
            ],
            active_transits: vec!["jupiter_trine_sun".to_string()],
            birth_date: date(1990, 6, 15),
        }
    }

    fn engine() -> FortuneEngine {
        FortuneEngine::new(Arc::new(ResultCache::default()))
    }

    fn parts() -> CacheKeyParts {
        CacheKeyParts::new("saju-fp", "astro-fp")
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = compute_day_analysis(&sample_saju(), &sample_astro(), date(2026, 3, 15));
        let b = compute_day_analysis(&sample_saju(), &sample_astro(), date(2026, 3, 15));
        assert_eq!(a, b);
    }

    #[test]
    fn test_analysis_ranges() {
        let a = compute_day_analysis(&sample_saju(), &sample_astro(), date(2026, 3, 15));
        assert!((0.0..=100.0).contains(&a.base_score));
        assert!((0.0..=1.0).contains(&a.alignment_score));
        assert!((0.0..=1.0).contains(&a.overlap_strength));
        assert!((0.0..=1.0).contains(&a.confidence_score));
        assert!(a.time_overlap_weight >= 1.0);
        assert_eq!(a.domains.len(), 5);
        assert!(!a.factors.is_empty());
    }

    #[test]
    fn test_marker_effects_surface() {
        let a = compute_day_analysis(&sample_saju(), &sample_astro(), date(2026, 3, 15));
        assert!(a.factors.iter().any(|f| f == "shinsal_cheoneul"));
        assert!(!a.recommendations.is_empty());
    }

    #[test]
    fn test_batch_scan_survives_every_day_of_year() {
        // A full-year scan must never panic; each day yields 5 domains.
        let saju = sample_saju();
        let astro = sample_astro();
        let mut day = date(2026, 1, 1);
        while day < date(2027, 1, 1) {
            let a = compute_day_analysis(&saju, &astro, day);
            assert_eq!(a.domains.len(), 5, "failed on {day}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_analyze_day_caches() {
        let engine = engine();
        let saju = sample_saju();
        let astro = sample_astro();
        let key = parts();
        let first = engine.analyze_day(&saju, &astro, date(2026, 3, 15), &key);
        let second = engine.analyze_day(&saju, &astro, date(2026, 3, 15), &key);
        assert!(Arc::ptr_eq(&first, &second), "second read must hit the cache");
        assert_eq!(engine.cache().stats().analysis_entries, 1);
    }

    #[test]
    fn test_distinct_fingerprints_compute_separately() {
        let engine = engine();
        let saju = sample_saju();
        let astro = sample_astro();
        let first = engine.analyze_day(&saju, &astro, date(2026, 3, 15), &parts());
        let other_key = CacheKeyParts::new("other-saju", "astro-fp");
        let second = engine.analyze_day(&saju, &astro, date(2026, 3, 15), &other_key);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache().stats().analysis_entries, 2);
    }

    #[test]
    fn test_daily_fortune_shape() {
        let engine = engine();
        let fortune = engine.daily_fortune(&sample_saju(), &sample_astro(), date(2026, 3, 15), &parts());
        assert!((0.0..=100.0).contains(&fortune.overall_score));
        assert!(!fortune.reasons.is_empty());
        assert!(fortune.reasons.iter().all(|r| !r.is_empty()));
        // Daily fortune caches into its own map alongside the analysis.
        let stats = engine.cache().stats();
        assert_eq!(stats.daily_entries, 1);
        assert_eq!(stats.analysis_entries, 1);
    }

    #[test]
    fn test_monthly_theme_valid_and_invalid() {
        let engine = engine();
        let theme = engine
            .monthly_theme(&sample_saju(), &sample_astro(), 2026, 5, &parts())
            .unwrap();
        assert_eq!(theme.month, "2026-05");
        assert!((0.0..=100.0).contains(&theme.score));

        assert!(engine
            .monthly_theme(&sample_saju(), &sample_astro(), 2026, 13, &parts())
            .is_err());
    }

    #[test]
    fn test_weekly_theme_best_day_within_week() {
        let engine = engine();
        let start = date(2026, 3, 16);
        let theme = engine.weekly_theme(&sample_saju(), &sample_astro(), start, &parts());
        assert!(theme.best_day >= start);
        assert!(theme.best_day < start + Duration::days(7));
        assert!((0.0..=100.0).contains(&theme.score));
    }

    #[test]
    fn test_calendar_outlook_shape() {
        let engine = engine();
        let outlook = engine
            .calendar_outlook(&sample_saju(), &sample_astro(), 2026, 4, &parts())
            .unwrap();
        assert_eq!(outlook.global.len(), 12);
        assert_eq!(outlook.global[0].month, "2026-04");
        assert_eq!(outlook.by_domain.len(), 5);
        for signal in &outlook.signals {
            assert!(signal.trigger.contains(&signal.month));
        }
    }

    #[test]
    fn test_year_outlook_span() {
        let engine = engine();
        let series = engine.year_outlook(&sample_saju(), 2026, 8);
        assert_eq!(series.len(), 8);
        assert_eq!(series[0].year, "2026");
    }
}
