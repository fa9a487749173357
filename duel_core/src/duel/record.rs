//! DuelRecord and ResultRecord - The evaluation boundary data shapes

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::stats::StatCollection;

/// The two participants of a duel, as received from the collaborator
///
/// "myself" is the attacker, "enemy" the defender. The record is never
/// mutated by an evaluation; working copies are cloned from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelRecord {
    pub myself: Entity,
    pub enemy: Entity,
}

/// Outcome of one duel evaluation
///
/// The entity snapshots reflect state before any talent was applied, so the
/// collaborator gets back exactly what it sent. Raw damage is the sum of the
/// attacker's unmodified weapon attack values; effective damage is post-talent,
/// post-mitigation and rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub enemy: Entity,
    pub myself: Entity,
    #[serde(rename = "rawDamage")]
    pub raw_damage: f64,
    #[serde(rename = "effectiveDamage")]
    pub effective_damage: StatCollection,
}
