//! The four-map result cache.

use std::sync::Arc;

use parking_lot::RwLock;

use unse_core::types::{DailyFortune, DayAnalysis, MonthlyTheme, WeeklyTheme};

use crate::config::CacheConfig;
use crate::store::TtlCache;

/// Per-map entry counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub analysis_entries: usize,
    pub daily_entries: usize,
    pub monthly_entries: usize,
    pub weekly_entries: usize,
}

impl CacheStats {
    /// Total entries across the four maps.
    pub fn total(&self) -> usize {
        self.analysis_entries + self.daily_entries + self.monthly_entries + self.weekly_entries
    }
}

/// Process-lifetime cache holding four independent TTL maps: day-level
/// analysis, daily fortune, monthly theme, and weekly theme.
///
/// Owned by the host's composition root and passed by handle into the
/// engine facade; there is no module-level global. Entries keyed by
/// distinct fingerprints never interact.
#[derive(Debug)]
pub struct ResultCache {
    analysis: RwLock<TtlCache<DayAnalysis>>,
    daily: RwLock<TtlCache<DailyFortune>>,
    monthly: RwLock<TtlCache<MonthlyTheme>>,
    weekly: RwLock<TtlCache<WeeklyTheme>>,
}

impl ResultCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            analysis: RwLock::new(TtlCache::new(config)),
            daily: RwLock::new(TtlCache::new(config)),
            monthly: RwLock::new(TtlCache::new(config)),
            weekly: RwLock::new(TtlCache::new(config)),
        }
    }

    pub fn get_analysis(&self, key: &str) -> Option<Arc<DayAnalysis>> {
        self.analysis.write().get(key)
    }

    pub fn put_analysis(&self, key: impl Into<String>, value: DayAnalysis) -> Arc<DayAnalysis> {
        self.analysis.write().insert(key, value)
    }

    pub fn get_daily(&self, key: &str) -> Option<Arc<DailyFortune>> {
        self.daily.write().get(key)
    }

    pub fn put_daily(&self, key: impl Into<String>, value: DailyFortune) -> Arc<DailyFortune> {
        self.daily.write().insert(key, value)
    }

    pub fn get_monthly(&self, key: &str) -> Option<Arc<MonthlyTheme>> {
        self.monthly.write().get(key)
    }

    pub fn put_monthly(&self, key: impl Into<String>, value: MonthlyTheme) -> Arc<MonthlyTheme> {
        self.monthly.write().insert(key, value)
    }

    pub fn get_weekly(&self, key: &str) -> Option<Arc<WeeklyTheme>> {
        self.weekly.write().get(key)
    }

    pub fn put_weekly(&self, key: impl Into<String>, value: WeeklyTheme) -> Arc<WeeklyTheme> {
        self.weekly.write().insert(key, value)
    }

    /// Empty all four maps.
    pub fn clear(&self) {
        self.analysis.write().clear();
        self.daily.write().clear();
        self.monthly.write().clear();
        self.weekly.write().clear();
        tracing::debug!("RESULT_CACHE: cleared all maps");
    }

    /// Per-map entry counts.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            analysis_entries: self.analysis.read().len(),
            daily_entries: self.daily.read().len(),
            monthly_entries: self.monthly.read().len(),
            weekly_entries: self.weekly.read().len(),
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
