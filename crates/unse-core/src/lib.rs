//! Core domain types for the unse destiny scoring engine.
//!
//! This crate defines the value types shared by the scoring pipeline:
//! - Sexagenary cycle types (`Stem`, `Branch`, `Element`, `GanzhiPair`)
//! - Immutable input profiles (`SajuProfile`, `AstroProfile`)
//! - Score containers (`ScoreResult`, `LayerScores`, `DomainScore`)
//! - Timeline and calendar types (`MonthlyOverlapPoint`, `CalendarSignal`)
//! - Report products (`DayAnalysis`, `DailyFortune`, `MonthlyTheme`, `WeeklyTheme`)
//! - Error types and result alias (`EngineError`, `EngineResult`)
//!
//! All types are immutable value objects. Nothing in this crate performs
//! computation beyond trivial accessors; the scoring pipeline lives in
//! `unse-engine` and the only stateful component lives in `unse-cache`.
//!
//! # Example
//!
//! ```
//! use unse_core::types::{Stem, Branch, GanzhiPair};
//!
//! let pair = GanzhiPair::from_cycle_index(0);
//! assert_eq!(pair.stem, Stem::Gap);
//! assert_eq!(pair.branch, Branch::Ja);
//! ```

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::{EngineError, EngineResult};
