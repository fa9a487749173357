//! Duel orchestration - Snapshot, apply talents, mitigate, round

use super::{DuelRecord, ResultRecord};
use crate::error::DuelError;
use crate::mitigation::{compute_effective_damage, round_effective_damage};
use crate::talent::{apply_talent, TalentCatalog};

/// Evaluate one duel turn
///
/// 1. Snapshot both entities before anything mutates.
/// 2. Raw damage is the attacker's weapon attack total, pre-talent.
/// 3. Each entity's listed talents are applied in order to a working copy;
///    talents mutate the copies only, never the input record.
/// 4. The attacker's (now talented) weapon attack is mitigated by the
///    defender's chest and then head armour, and the result rounded.
///
/// Fails on the first data-integrity violation: unknown talent name, unknown
/// stat type, or a catalog that slipped past load-time validation.
pub fn evaluate_duel(
    duel: &DuelRecord,
    catalog: &TalentCatalog,
) -> Result<ResultRecord, DuelError> {
    let myself_snapshot = duel.myself.clone();
    let enemy_snapshot = duel.enemy.clone();

    let raw_damage = duel.myself.weapon.attack.total();

    let mut myself = duel.myself.clone();
    let mut enemy = duel.enemy.clone();

    for name in &myself_snapshot.talents {
        apply_talent(&mut myself, catalog.get(name)?)?;
    }
    for name in &enemy_snapshot.talents {
        apply_talent(&mut enemy, catalog.get(name)?)?;
    }

    let effective = compute_effective_damage(
        &myself.weapon.attack,
        &enemy.chest_armour.defence,
        &enemy.head_armour.defence,
    )?;
    let effective_damage = round_effective_damage(&effective);

    Ok(ResultRecord {
        enemy: enemy_snapshot,
        myself: myself_snapshot,
        raw_damage,
        effective_damage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::{Armour, Entity, Weapon};
    use crate::stats::StatCollection;
    use crate::talent::{Effect, EffectValue, Talent};

    fn attacker() -> Entity {
        Entity {
            weapon: Weapon {
                attack: StatCollection::from([
                    ("physical", 100.0),
                    ("lightning", 50.0),
                    ("fire", 10.0),
                ]),
            },
            head_armour: Armour::default(),
            chest_armour: Armour::default(),
            talents: Vec::new(),
        }
    }

    fn defender() -> Entity {
        Entity {
            weapon: Weapon::default(),
            head_armour: Armour {
                defence: StatCollection::from([
                    ("physical", 50.0),
                    ("lightning", 5.0),
                    ("fire", 100.0),
                ]),
            },
            chest_armour: Armour {
                defence: StatCollection::from([
                    ("physical", 75.0),
                    ("lightning", 50.0),
                    ("fire", 100.0),
                ]),
            },
            talents: Vec::new(),
        }
    }

    #[test]
    fn test_evaluation_without_talents() {
        let duel = DuelRecord {
            myself: attacker(),
            enemy: defender(),
        };
        let result = evaluate_duel(&duel, &TalentCatalog::new()).unwrap();

        assert!((result.raw_damage - 160.0).abs() < f64::EPSILON);
        // chest pass: {25, 25, 0}; head pass: {12.5, 23.75, 0}; rounded
        let expected =
            StatCollection::from([("physical", 12.0), ("lightning", 24.0), ("fire", 0.0)]);
        assert_eq!(result.effective_damage, expected);
    }

    #[test]
    fn test_snapshots_are_pre_talent() {
        let mut myself = attacker();
        myself.talents = vec!["frenzy".to_string()];
        let duel = DuelRecord {
            myself,
            enemy: defender(),
        };

        let mut catalog = TalentCatalog::new();
        catalog.insert(
            "frenzy",
            Talent {
                attack: Some(vec![Effect::AllStats(EffectValue::percent(1.0))]),
                defence: None,
            },
        );

        let result = evaluate_duel(&duel, &catalog).unwrap();
        // the snapshot still shows the unbuffed weapon, and the input record
        // was never touched
        assert_eq!(result.myself, duel.myself);
        assert_eq!(result.enemy, duel.enemy);
        assert_eq!(duel.myself.weapon.attack.get("physical"), Some(100.0));
        // raw damage is pre-talent even though the live attack was doubled
        assert!((result.raw_damage - 160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_talent_fails_evaluation() {
        let mut myself = attacker();
        myself.talents = vec!["ghost".to_string()];
        let duel = DuelRecord {
            myself,
            enemy: defender(),
        };
        let err = evaluate_duel(&duel, &TalentCatalog::new()).unwrap_err();
        assert_eq!(
            err,
            DuelError::UnknownTalent {
                name: "ghost".to_string()
            }
        );
    }
}
