//! Core types specific to duel evaluation

use serde::{Deserialize, Serialize};

use crate::error::DuelError;

/// Role of a stat collection during an edit or mitigation pass
///
/// Attack stats are floored at 0 with no upper bound; defence stats are
/// clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatRole {
    Attack,
    Defence,
}

/// Armour slot on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmourSlot {
    #[serde(rename = "headArmour")]
    Head,
    #[serde(rename = "chestArmour")]
    Chest,
}

impl ArmourSlot {
    /// Get all armour slots, in mitigation-independent but fixed order
    pub fn all() -> &'static [ArmourSlot] {
        &[ArmourSlot::Head, ArmourSlot::Chest]
    }

    /// Wire name of this slot
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmourSlot::Head => "headArmour",
            ArmourSlot::Chest => "chestArmour",
        }
    }
}

/// Armour selector in a talent's defence part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmourScope {
    /// Defence effects apply to every armour slot
    All,
    /// Defence effects apply to a single armour slot
    Slot(ArmourSlot),
}

impl ArmourScope {
    /// Resolve a wire selector ("all" | "headArmour" | "chestArmour")
    pub fn parse(selector: &str) -> Result<Self, DuelError> {
        match selector {
            "all" => Ok(ArmourScope::All),
            "headArmour" => Ok(ArmourScope::Slot(ArmourSlot::Head)),
            "chestArmour" => Ok(ArmourScope::Slot(ArmourSlot::Chest)),
            other => Err(DuelError::MissingArmourSlot {
                selector: other.to_string(),
            }),
        }
    }
}
