//! Prelude module for convenient imports
//!
//! ```rust
//! use duel_core::prelude::*;
//! ```

// Core types
pub use crate::stats::StatCollection;
pub use crate::types::{ArmourScope, ArmourSlot, StatRole};

// Talent system
pub use crate::talent::{Effect, EffectKind, EffectValue, Talent, TalentCatalog};

// Duel evaluation
pub use crate::duel::{evaluate_duel, Armour, DuelRecord, Entity, ResultRecord, Weapon};

// Mitigation
pub use crate::mitigation::{compute_effective_damage, compute_mitigation, round_effective_damage};

// Errors and config
pub use crate::config::{load_duel_record, load_talent_catalog, CatalogError};
pub use crate::error::DuelError;
