//! Stat capping and single-stat edits

use super::constants::{MAX_DEFENCE, MIN_STAT};
use super::StatCollection;
use crate::error::DuelError;
use crate::talent::{EffectKind, EffectValue};
use crate::types::StatRole;

/// Clamp a stat value to its valid bounds
///
/// Every stat is floored at 0; defence stats are additionally capped at 100.
/// Attack stats have no upper bound.
pub fn cap_stat(value: f64, role: StatRole) -> f64 {
    if value > MAX_DEFENCE && role == StatRole::Defence {
        MAX_DEFENCE
    } else if value < MIN_STAT {
        MIN_STAT
    } else {
        value
    }
}

/// Apply one flat or percent modification to one stat, in place
///
/// The percent path rounds (half-to-even) before capping; the flat path is
/// not pre-rounded. The stat type must already exist in the collection.
pub fn edit_stat(
    stat_type: &str,
    stats: &mut StatCollection,
    effect: &EffectValue,
    role: StatRole,
) -> Result<(), DuelError> {
    let old = stats.get(stat_type).ok_or_else(|| DuelError::UnknownStatType {
        stat: stat_type.to_string(),
    })?;

    let new = match effect.kind {
        EffectKind::Flat => cap_stat(old + effect.value, role),
        EffectKind::Percent => cap_stat((old + old * effect.value).round_ties_even(), role),
    };

    stats.set(stat_type, new);
    Ok(())
}
