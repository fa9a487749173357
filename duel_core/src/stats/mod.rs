//! Stat system - Collections, capping and in-place edits

mod collection;
mod edit;

pub use collection::StatCollection;
pub use edit::{cap_stat, edit_stat};

/// Stat bound constants
pub mod constants {
    /// Upper bound for defence stats (100 = full mitigation)
    pub const MAX_DEFENCE: f64 = 100.0;

    /// Lower bound for every stat
    pub const MIN_STAT: f64 = 0.0;
}
