//! Mitigation passes - Per-stat percentage reduction, chest then head

use crate::error::DuelError;
use crate::stats::{cap_stat, StatCollection};
use crate::types::StatRole;

/// Compute the damage left after one armour's mitigation
///
/// For each stat type in the attack collection:
/// `result = cap(attack - attack * defence / 100)`, floored at 0. A defence
/// stat of 100 fully mitigates its type. The defence collection must carry
/// every attack stat type.
pub fn compute_mitigation(
    attack: &StatCollection,
    defence: &StatCollection,
) -> Result<StatCollection, DuelError> {
    let mut mitigated = StatCollection::new();
    for (stat_type, raw) in attack.iter() {
        let reduction = defence.get(stat_type).ok_or_else(|| DuelError::UnknownStatType {
            stat: stat_type.clone(),
        })?;
        mitigated.set(
            stat_type.clone(),
            cap_stat(raw - raw * reduction / 100.0, StatRole::Attack),
        );
    }
    Ok(mitigated)
}

/// Compute effective damage: chest mitigation first, then head mitigation on
/// what is left
///
/// The order is fixed and observable: mitigation is a sequential percentage
/// reduction, not an additive one.
pub fn compute_effective_damage(
    attack: &StatCollection,
    chest_defence: &StatCollection,
    head_defence: &StatCollection,
) -> Result<StatCollection, DuelError> {
    let after_chest = compute_mitigation(attack, chest_defence)?;
    compute_mitigation(&after_chest, head_defence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack() -> StatCollection {
        StatCollection::from([("physical", 100.0), ("lightning", 50.0), ("fire", 10.0)])
    }

    #[test]
    fn test_single_pass() {
        let defence =
            StatCollection::from([("physical", 75.0), ("lightning", 50.0), ("fire", 100.0)]);
        let result = compute_mitigation(&attack(), &defence).unwrap();

        let expected =
            StatCollection::from([("physical", 25.0), ("lightning", 25.0), ("fire", 0.0)]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let original = attack();
        let defence =
            StatCollection::from([("physical", 75.0), ("lightning", 50.0), ("fire", 100.0)]);
        compute_mitigation(&original, &defence).unwrap();
        assert_eq!(original, attack());
    }

    #[test]
    fn test_two_stage_order_is_chest_then_head() {
        let chest =
            StatCollection::from([("physical", 75.0), ("lightning", 50.0), ("fire", 100.0)]);
        let head = StatCollection::from([("physical", 50.0), ("lightning", 5.0), ("fire", 100.0)]);

        let result = compute_effective_damage(&attack(), &chest, &head).unwrap();

        // intermediate after chest: {physical: 25, lightning: 25, fire: 0}
        let expected =
            StatCollection::from([("physical", 12.5), ("lightning", 23.75), ("fire", 0.0)]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_missing_defence_stat() {
        let defence = StatCollection::from([("physical", 75.0), ("lightning", 50.0)]);
        let err = compute_mitigation(&attack(), &defence).unwrap_err();
        assert_eq!(
            err,
            DuelError::UnknownStatType {
                stat: "fire".to_string()
            }
        );
    }

    #[test]
    fn test_zero_defence_passes_through() {
        let defence =
            StatCollection::from([("physical", 0.0), ("lightning", 0.0), ("fire", 0.0)]);
        let result = compute_mitigation(&attack(), &defence).unwrap();
        assert_eq!(result, attack());
    }
}
