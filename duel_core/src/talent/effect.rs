//! Effect - A single stat modification request

use crate::error::DuelError;
use crate::stats::{edit_stat, StatCollection};
use crate::types::StatRole;

/// How an effect value modifies a stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Added to the stat as-is
    Flat,
    /// Stat grows (or shrinks) by a fraction of itself, rounded before capping
    Percent,
}

impl EffectKind {
    /// Resolve a wire effect type ("flat" | "percent")
    pub fn parse(kind: &str) -> Result<Self, DuelError> {
        match kind {
            "flat" => Ok(EffectKind::Flat),
            "percent" => Ok(EffectKind::Percent),
            other => Err(DuelError::UnrecognizedEffectType {
                found: other.to_string(),
            }),
        }
    }

    /// Wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Flat => "flat",
            EffectKind::Percent => "percent",
        }
    }
}

/// The magnitude of an effect: a kind plus a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectValue {
    pub kind: EffectKind,
    pub value: f64,
}

impl EffectValue {
    /// A flat buff/debuff of the given size
    pub fn flat(value: f64) -> Self {
        EffectValue {
            kind: EffectKind::Flat,
            value,
        }
    }

    /// A percent buff/debuff of the given fraction (0.5 = +50%)
    pub fn percent(value: f64) -> Self {
        EffectValue {
            kind: EffectKind::Percent,
            value,
        }
    }
}

/// One modification, scoped either to every stat in the target collection or
/// to a single named stat
///
/// On the wire an effect is a one-key object whose key is either the literal
/// "all" or a stat-type name; the scope is resolved once at catalog load time.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AllStats(EffectValue),
    SingleStat(String, EffectValue),
}

/// Apply one effect to a stat collection, in place
///
/// `AllStats` edits every stat type currently present, in the collection's
/// natural key order; `SingleStat` edits exactly one. Editing a stat type the
/// collection does not carry is an error.
pub fn apply_effect(
    effect: &Effect,
    stats: &mut StatCollection,
    role: StatRole,
) -> Result<(), DuelError> {
    match effect {
        Effect::AllStats(value) => {
            let stat_types: Vec<String> = stats.stat_types().cloned().collect();
            for stat_type in &stat_types {
                edit_stat(stat_type, stats, value, role)?;
            }
            Ok(())
        }
        Effect::SingleStat(stat_type, value) => edit_stat(stat_type, stats, value, role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> StatCollection {
        StatCollection::from([("physical", 10.0), ("lightning", 20.0), ("fire", 30.0)])
    }

    #[test]
    fn test_effect_kind_parse() {
        assert_eq!(EffectKind::parse("flat").unwrap(), EffectKind::Flat);
        assert_eq!(EffectKind::parse("percent").unwrap(), EffectKind::Percent);

        let err = EffectKind::parse("multiplicative").unwrap_err();
        assert_eq!(
            err,
            DuelError::UnrecognizedEffectType {
                found: "multiplicative".to_string()
            }
        );
    }

    #[test]
    fn test_all_stats_percent() {
        let mut stats = sample_stats();
        let effect = Effect::AllStats(EffectValue::percent(0.5));
        apply_effect(&effect, &mut stats, StatRole::Defence).unwrap();

        let expected =
            StatCollection::from([("physical", 15.0), ("lightning", 30.0), ("fire", 45.0)]);
        assert_eq!(stats, expected);
    }

    #[test]
    fn test_all_stats_flat() {
        let mut stats = sample_stats();
        let effect = Effect::AllStats(EffectValue::flat(5.0));
        apply_effect(&effect, &mut stats, StatRole::Attack).unwrap();

        let expected =
            StatCollection::from([("physical", 15.0), ("lightning", 25.0), ("fire", 35.0)]);
        assert_eq!(stats, expected);
    }

    #[test]
    fn test_single_stat() {
        let mut stats = sample_stats();
        let effect = Effect::SingleStat("lightning".to_string(), EffectValue::flat(-5.0));
        apply_effect(&effect, &mut stats, StatRole::Attack).unwrap();

        let expected =
            StatCollection::from([("physical", 10.0), ("lightning", 15.0), ("fire", 30.0)]);
        assert_eq!(stats, expected);
    }

    #[test]
    fn test_single_stat_unknown() {
        let mut stats = sample_stats();
        let effect = Effect::SingleStat("cold".to_string(), EffectValue::flat(1.0));
        let err = apply_effect(&effect, &mut stats, StatRole::Attack).unwrap_err();
        assert_eq!(
            err,
            DuelError::UnknownStatType {
                stat: "cold".to_string()
            }
        );
        // the failed apply must not have touched anything
        assert_eq!(stats, sample_stats());
    }
}
