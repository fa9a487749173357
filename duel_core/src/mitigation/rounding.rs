//! Rounding of effective damage

use crate::stats::StatCollection;

/// Round every value of a damage collection to the nearest integer
///
/// Ties round half-to-even (banker's rounding): 12.5 rounds to 12, 23.75
/// rounds to 24. This is observable at damage boundaries, so the convention is
/// fixed here rather than left to the caller. Idempotent.
pub fn round_effective_damage(damage: &StatCollection) -> StatCollection {
    damage
        .iter()
        .map(|(stat_type, value)| (stat_type.clone(), value.round_ties_even()))
        .collect()
}
