//! Symbolic marker (shinsal) lookup and aggregation.

mod table;

pub use table::{
    map_shinsal, process_shinsals, shinsal_type, AggregatedShinsalEffect, ShinsalCategory,
    ShinsalEffect, ShinsalKind,
};
