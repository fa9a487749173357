//! Duel record loading and result envelope

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::CatalogError;
use crate::duel::{DuelRecord, ResultRecord};

/// Accepts both the bare record and the collaborator's wire envelope
/// `{"data": {"duel": {...}}}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DuelDocument {
    Enveloped { data: DuelData },
    Bare(DuelRecord),
}

#[derive(Debug, Deserialize)]
struct DuelData {
    duel: DuelRecord,
}

impl From<DuelDocument> for DuelRecord {
    fn from(doc: DuelDocument) -> Self {
        match doc {
            DuelDocument::Enveloped { data } => data.duel,
            DuelDocument::Bare(record) => record,
        }
    }
}

/// Load a duel record from a JSON file
pub fn load_duel_record(path: &Path) -> Result<DuelRecord, CatalogError> {
    let doc: DuelDocument = super::load_json(path)?;
    Ok(doc.into())
}

/// Parse a duel record from a JSON string
pub fn parse_duel_record(content: &str) -> Result<DuelRecord, CatalogError> {
    let doc: DuelDocument = super::parse_json(content)?;
    Ok(doc.into())
}

/// Wraps a result record in the collaborator's `{"data": {...}}` envelope for
/// output
#[derive(Debug, Clone, Serialize)]
pub struct ResultEnvelope {
    pub data: ResultRecord,
}

impl ResultEnvelope {
    pub fn new(data: ResultRecord) -> Self {
        ResultEnvelope { data }
    }
}
