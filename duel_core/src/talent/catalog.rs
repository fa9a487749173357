//! TalentCatalog - Named talent definitions, read-only per evaluation

use std::collections::HashMap;

use super::Effect;
use crate::error::DuelError;
use crate::types::ArmourScope;

/// The defence half of a talent: which armour slot(s) to touch, and the
/// effects to apply there
#[derive(Debug, Clone, PartialEq)]
pub struct DefencePart {
    pub scope: ArmourScope,
    pub effects: Vec<Effect>,
}

/// A talent definition
///
/// Either part may be absent; effects within a part are applied strictly in
/// sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Talent {
    /// Effects applied to the entity's weapon attack stats
    pub attack: Option<Vec<Effect>>,
    /// Effects applied to the selected armour defence stats
    pub defence: Option<DefencePart>,
}

/// Mapping from talent name to definition
///
/// Loaded once (see [`crate::config`]) and treated as immutable for the
/// lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct TalentCatalog {
    talents: HashMap<String, Talent>,
}

impl TalentCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        TalentCatalog {
            talents: HashMap::new(),
        }
    }

    /// Register a talent under a name
    pub fn insert(&mut self, name: impl Into<String>, talent: Talent) {
        self.talents.insert(name.into(), talent);
    }

    /// Look up a talent by name
    pub fn get(&self, name: &str) -> Result<&Talent, DuelError> {
        self.talents.get(name).ok_or_else(|| DuelError::UnknownTalent {
            name: name.to_string(),
        })
    }

    /// Whether the catalog defines the given talent
    pub fn contains(&self, name: &str) -> bool {
        self.talents.contains_key(name)
    }

    /// Number of talents defined
    pub fn len(&self) -> usize {
        self.talents.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.talents.is_empty()
    }
}

impl FromIterator<(String, Talent)> for TalentCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Talent)>>(iter: I) -> Self {
        TalentCatalog {
            talents: iter.into_iter().collect(),
        }
    }
}
