//! Talent catalog loading

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::CatalogError;
use crate::error::DuelError;
use crate::talent::{DefencePart, Effect, EffectKind, EffectValue, Talent, TalentCatalog};
use crate::types::ArmourScope;

/// Wire shape of an effect's magnitude: {"type": "flat", "value": 10}
#[derive(Debug, Deserialize)]
struct RawEffectValue {
    #[serde(rename = "type")]
    kind: String,
    value: f64,
}

/// Wire shape of an effect: a one-key object, the key being "all" or a
/// stat-type name
type RawEffect = BTreeMap<String, RawEffectValue>;

/// Wire shape of a talent's defence part
#[derive(Debug, Deserialize)]
struct RawDefencePart {
    #[serde(rename = "armour-type")]
    armour_type: String,
    effects: Vec<RawEffect>,
}

/// Wire shape of a talent
#[derive(Debug, Deserialize)]
struct RawTalent {
    attack: Option<Vec<RawEffect>>,
    defence: Option<RawDefencePart>,
}

fn resolve_effect(raw: RawEffect) -> Result<Effect, DuelError> {
    if raw.len() != 1 {
        return Err(DuelError::MalformedEffect { keys: raw.len() });
    }
    // len() == 1 just checked
    let (target, raw_value) = raw.into_iter().next().unwrap();
    let value = EffectValue {
        kind: EffectKind::parse(&raw_value.kind)?,
        value: raw_value.value,
    };
    Ok(match target.as_str() {
        "all" => Effect::AllStats(value),
        _ => Effect::SingleStat(target, value),
    })
}

fn resolve_effects(raw: Vec<RawEffect>) -> Result<Vec<Effect>, DuelError> {
    raw.into_iter().map(resolve_effect).collect()
}

fn resolve_talent(raw: RawTalent) -> Result<Talent, DuelError> {
    let attack = raw.attack.map(resolve_effects).transpose()?;
    let defence = raw
        .defence
        .map(|part| {
            Ok::<_, DuelError>(DefencePart {
                scope: ArmourScope::parse(&part.armour_type)?,
                effects: resolve_effects(part.effects)?,
            })
        })
        .transpose()?;
    Ok(Talent { attack, defence })
}

/// Load a talent catalog from a JSON file
pub fn load_talent_catalog(path: &Path) -> Result<TalentCatalog, CatalogError> {
    let raw: BTreeMap<String, RawTalent> = super::load_json(path)?;
    build_catalog(raw)
}

/// Parse a talent catalog from a JSON string
pub fn parse_talent_catalog(content: &str) -> Result<TalentCatalog, CatalogError> {
    let raw: BTreeMap<String, RawTalent> = super::parse_json(content)?;
    build_catalog(raw)
}

fn build_catalog(raw: BTreeMap<String, RawTalent>) -> Result<TalentCatalog, CatalogError> {
    let mut catalog = TalentCatalog::new();
    for (name, talent) in raw {
        catalog.insert(name, resolve_talent(talent)?);
    }
    Ok(catalog)
}
