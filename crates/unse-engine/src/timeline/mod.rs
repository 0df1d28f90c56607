//! Forward overlap series and calendar signal derivation.

mod generator;
mod signals;

pub use generator::{
    generate_monthly_overlap_timeline, generate_timeline_by_domain, generate_yearly_overlap_series,
    TimelineInput,
};
pub use signals::derive_calendar_signals;
