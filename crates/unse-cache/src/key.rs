//! Cache key construction.
//!
//! Profile fingerprints are stable strings pre-computed by the caller
//! (e.g. a hash of the profile's significant fields); the engine never
//! derives them itself. Keys combine the fingerprints with the target
//! date or period, so entries keyed by distinct profiles or periods never
//! interact.

use chrono::NaiveDate;

/// Caller-supplied profile fingerprints used to build cache keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeyParts {
    pub saju_fingerprint: String,
    pub astro_fingerprint: String,
}

impl CacheKeyParts {
    pub fn new(saju_fingerprint: impl Into<String>, astro_fingerprint: impl Into<String>) -> Self {
        Self {
            saju_fingerprint: saju_fingerprint.into(),
            astro_fingerprint: astro_fingerprint.into(),
        }
    }

    /// Key for a day-level analysis entry.
    pub fn day_key(&self, date: NaiveDate) -> String {
        format!(
            "analysis:{}:{}:{}",
            self.saju_fingerprint, self.astro_fingerprint, date
        )
    }

    /// Key for a daily-fortune entry.
    pub fn daily_key(&self, date: NaiveDate) -> String {
        format!(
            "daily:{}:{}:{}",
            self.saju_fingerprint, self.astro_fingerprint, date
        )
    }

    /// Key for a monthly-theme entry.
    pub fn monthly_key(&self, year: i32, month: u32) -> String {
        format!(
            "monthly:{}:{}:{year:04}-{month:02}",
            self.saju_fingerprint, self.astro_fingerprint
        )
    }

    /// Key for a weekly-theme entry.
    pub fn weekly_key(&self, week_start: NaiveDate) -> String {
        format!(
            "weekly:{}:{}:{week_start}",
            self.saju_fingerprint, self.astro_fingerprint
        )
    }
}
