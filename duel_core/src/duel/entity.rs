//! Entity - A duel participant with weapon, armour and talents

use serde::{Deserialize, Serialize};

use crate::stats::StatCollection;
use crate::types::ArmourSlot;

/// A weapon carrying attack stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub attack: StatCollection,
}

/// An armour piece carrying defence stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Armour {
    pub defence: StatCollection,
}

/// A duel participant
///
/// Field names follow the wire format of the duel record; the whole struct
/// round-trips through JSON unchanged, which the result record relies on for
/// its pre-talent snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub weapon: Weapon,
    #[serde(rename = "headArmour")]
    pub head_armour: Armour,
    #[serde(rename = "chestArmour")]
    pub chest_armour: Armour,
    #[serde(default)]
    pub talents: Vec<String>,
}

impl Entity {
    /// The armour piece in the given slot
    pub fn armour(&self, slot: ArmourSlot) -> &Armour {
        match slot {
            ArmourSlot::Head => &self.head_armour,
            ArmourSlot::Chest => &self.chest_armour,
        }
    }

    /// Mutable access to the armour piece in the given slot
    pub fn armour_mut(&mut self, slot: ArmourSlot) -> &mut Armour {
        match slot {
            ArmourSlot::Head => &mut self.head_armour,
            ArmourSlot::Chest => &mut self.chest_armour,
        }
    }
}
