//! Talent application - Walk a talent and apply its effects to an entity

use super::{apply_effect, Talent};
use crate::duel::Entity;
use crate::error::DuelError;
use crate::types::{ArmourScope, ArmourSlot, StatRole};

/// Apply a talent to an entity, in place
///
/// Attack effects target the weapon's attack stats; defence effects target the
/// armour slot(s) named by the talent's scope (the "all" scope walks head then
/// chest). Effects run strictly in sequence, so later effects observe the
/// cumulative result of earlier ones. The first failing effect aborts the
/// whole application.
pub fn apply_talent(entity: &mut Entity, talent: &Talent) -> Result<(), DuelError> {
    if let Some(effects) = &talent.attack {
        for effect in effects {
            apply_effect(effect, &mut entity.weapon.attack, StatRole::Attack)?;
        }
    }

    if let Some(defence) = &talent.defence {
        match defence.scope {
            ArmourScope::All => {
                for slot in ArmourSlot::all() {
                    for effect in &defence.effects {
                        apply_effect(effect, &mut entity.armour_mut(*slot).defence, StatRole::Defence)?;
                    }
                }
            }
            ArmourScope::Slot(slot) => {
                for effect in &defence.effects {
                    apply_effect(effect, &mut entity.armour_mut(slot).defence, StatRole::Defence)?;
                }
            }
        }
    }

    Ok(())
}
