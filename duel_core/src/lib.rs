//! duel_core - Core duel evaluation library
//!
//! This library provides:
//! - StatCollection: Named stat values for weapons and armour
//! - Talent application: Flat/percent effects applied to entity stats
//! - Mitigation: Sequential armour mitigation (chest, then head)
//! - Duel evaluation: Raw and effective damage for one attacker/defender pair

pub mod config;
pub mod duel;
pub mod error;
pub mod mitigation;
pub mod prelude;
pub mod stats;
pub mod talent;
pub mod types;

// Re-export core types for convenience
pub use duel::{evaluate_duel, DuelRecord, Entity, ResultRecord};
pub use error::DuelError;
pub use mitigation::{compute_effective_damage, compute_mitigation, round_effective_damage};
pub use stats::{cap_stat, edit_stat, StatCollection};
pub use talent::{apply_effect, apply_talent, Effect, EffectKind, EffectValue, Talent, TalentCatalog};
pub use types::{ArmourScope, ArmourSlot, StatRole};
