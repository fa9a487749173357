//! Mitigation system - Armour reduction of attack damage

mod engine;
mod rounding;

pub use engine::{compute_effective_damage, compute_mitigation};
pub use rounding::round_effective_damage;
