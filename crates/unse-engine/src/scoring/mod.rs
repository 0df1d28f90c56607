//! Independent per-layer scoring functions.
//!
//! Each scorer is a pure function from cycle/element inputs to a
//! [`ScoreResult`](unse_core::types::ScoreResult). Scorers taking an
//! optional classification return a neutral zero-effect result when the
//! classification is absent — unknown inputs degrade gracefully instead
//! of failing.

mod affinity;
mod astro;
mod cycles;

pub use affinity::{geokguk_score, yongsin_score};
pub use astro::{progression_score, solar_return_score, SolarReturnScore};
pub use cycles::{daeun_score, iljin_score, seun_score, wolun_score};
