//! In-process TTL result cache for the destiny scoring engine.
//!
//! The engine is pure computation except for this crate: a single
//! process-lifetime [`ResultCache`] holding four independent maps
//! (day analysis, daily fortune, monthly theme, weekly theme), each entry
//! carrying its own expiry timestamp.
//!
//! # Semantics
//!
//! - TTL is 1 hour for all four maps (configurable via [`CacheConfig`]).
//! - Reads check expiry and report a miss once past TTL; invalidation is
//!   pull-based, there is no background sweep.
//! - Writes upsert; entries are immutable value objects handed out as
//!   `Arc<V>`.
//! - Once any single map exceeds its capacity (default 500 entries), one
//!   maintenance pass evicts the oldest half by insertion order.
//!
//! # Concurrency
//!
//! The four maps are each wrapped in a `parking_lot::RwLock`; everything
//! else in the workspace is pure and freely shareable across threads. The
//! cache instance is owned by the host's composition root and passed by
//! handle — there is no global singleton.

mod config;
mod key;
mod result_cache;
mod store;

pub use config::CacheConfig;
pub use key::CacheKeyParts;
pub use result_cache::{CacheStats, ResultCache};
pub use store::TtlCache;
