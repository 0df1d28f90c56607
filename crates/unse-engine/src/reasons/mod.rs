//! Factor-key → user-facing explanation translation.

mod tables;
mod translator;

pub use translator::{translate_one, translate_reasons};
