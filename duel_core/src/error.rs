//! Evaluation errors
//!
//! All variants are data-integrity failures in talent or entity definitions.
//! An evaluation fails as a whole on the first one; a partially-applied talent
//! would leave entity state in a non-reproducible configuration.

use thiserror::Error;

/// Error raised while applying talents or computing mitigation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuelError {
    /// Effect type is neither "flat" nor "percent"
    #[error("effect type not recognized: {found:?}")]
    UnrecognizedEffectType { found: String },

    /// An effect or mitigation lookup references a stat type absent from the
    /// target collection
    #[error("unknown stat type: {stat:?}")]
    UnknownStatType { stat: String },

    /// Defence selector resolves to neither "headArmour", "chestArmour" nor
    /// "all"
    #[error("unknown armour slot selector: {selector:?}")]
    MissingArmourSlot { selector: String },

    /// An effect object must modify exactly one target (a stat type or "all")
    #[error("effect must have exactly one target, found {keys}")]
    MalformedEffect { keys: usize },

    /// An entity references a talent name absent from the catalog
    #[error("talent not found in catalog: {name:?}")]
    UnknownTalent { name: String },
}
