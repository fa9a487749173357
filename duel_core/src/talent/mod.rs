//! Talent system - Effects, catalog and application

mod apply;
mod catalog;
mod effect;

pub use apply::apply_talent;
pub use catalog::{DefencePart, Talent, TalentCatalog};
pub use effect::{apply_effect, Effect, EffectKind, EffectValue};
