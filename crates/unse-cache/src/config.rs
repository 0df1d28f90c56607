//! Cache configuration.

use std::time::Duration;

/// Entry lifetime for all four cache maps.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Entry count past which a map triggers a batch eviction pass.
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// Configuration shared by the four cache maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time an entry stays readable after insertion.
    pub ttl: Duration,
    /// Entry count past which the oldest half is evicted in one pass.
    pub max_entries: usize,
}

impl CacheConfig {
    /// Config with an explicit TTL and the default capacity.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy() {
        let c = CacheConfig::default();
        assert_eq!(c.ttl, Duration::from_secs(3600), "TTL must be one hour");
        assert_eq!(c.max_entries, 500);
    }

    #[test]
    fn test_with_ttl_keeps_capacity() {
        let c = CacheConfig::with_ttl(Duration::from_secs(60));
        assert_eq!(c.ttl, Duration::from_secs(60));
        assert_eq!(c.max_entries, 500);
    }
}
