//! Duel evaluation - Entities, records and the single-turn orchestrator

mod entity;
mod evaluate;
mod record;

pub use entity::{Armour, Entity, Weapon};
pub use evaluate::evaluate_duel;
pub use record::{DuelRecord, ResultRecord};
