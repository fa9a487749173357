//! Configuration loading from JSON documents
//!
//! Talent catalogs and duel records arrive as JSON. The loaders here parse
//! and validate them into the typed forms the evaluator works on; the
//! one-key effect objects and armour selectors of the wire format are
//! resolved once at load time rather than re-inspected per application.

mod duel;
mod talents;

pub use duel::{load_duel_record, parse_duel_record, ResultEnvelope};
pub use talents::{load_talent_catalog, parse_talent_catalog};

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::DuelError;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid duel data: {0}")]
    Invalid(#[from] DuelError),
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&content)?;
    Ok(value)
}

/// Parse a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, CatalogError> {
    let value: T = serde_json::from_str(content)?;
    Ok(value)
}
