//! Plant records and payload parsing.
//!
//! The payload envelope must be well formed; individual plant records are
//! checked one at a time, and a bad record is set aside instead of failing the
//! whole catalog.

use crate::catalog::{Category, PlantId, Price};
use crate::schema_loader::PayloadSchema;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One catalog entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Envelope returned by the plants endpoint. `status` and `message` are
/// informational only.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    status: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    plants: Vec<Value>,
}

/// A payload split into usable plants and the records that were set aside.
#[derive(Debug, Default)]
pub struct ParsedCatalog {
    pub plants: Vec<Plant>,
    /// One message per skipped record, naming its position in the payload.
    pub rejected: Vec<String>,
}

/// Check the envelope and convert each record, keeping the ones that pass.
/// Accepts either the `{ "plants": [...] }` envelope or a bare array.
pub fn parse_catalog_records(value: Value) -> Result<ParsedCatalog> {
    let schema = PayloadSchema::bundled()?;
    schema.validate(&value)?;

    let records = match value {
        Value::Array(records) => records,
        Value::Object(_) => {
            let envelope: CatalogEnvelope =
                serde_json::from_value(value).context("Unable to parse catalog envelope")?;
            if envelope.status == Some(false) {
                tracing::warn!(
                    message = envelope.message.as_deref().unwrap_or(""),
                    "catalog payload reports status=false"
                );
            }
            envelope.plants
        }
        _ => bail!("Unsupported JSON input; expected object or array"),
    };

    let mut parsed = ParsedCatalog::default();
    for (position, record) in records.into_iter().enumerate() {
        match parse_record(&schema, record) {
            Ok(plant) => parsed.plants.push(plant),
            Err(err) => parsed.rejected.push(format!("record {position}: {err:#}")),
        }
    }
    Ok(parsed)
}

fn parse_record(schema: &PayloadSchema, record: Value) -> Result<Plant> {
    schema.validate_record(&record)?;
    serde_json::from_value(record).context("Unable to parse plant record")
}

/// Extract the plant list, logging and skipping records that do not parse.
pub fn parse_catalog_payload(value: Value) -> Result<Vec<Plant>> {
    let parsed = parse_catalog_records(value)?;
    for reason in &parsed.rejected {
        tracing::warn!("skipping plant {reason}");
    }
    Ok(parsed.plants)
}

/// Parse a payload from raw text, as received over the wire or read from disk.
pub fn parse_catalog_str(input: &str) -> Result<Vec<Plant>> {
    parse_catalog_payload(decode_payload(input)?)
}

/// Decode raw payload text into JSON without interpreting it.
pub fn decode_payload(input: &str) -> Result<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("catalog payload is empty");
    }
    serde_json::from_str(trimmed).context("catalog payload is not JSON")
}

pub fn load_catalog_from_path(path: &Path) -> Result<Vec<Plant>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog payload {}", path.display()))?;
    parse_catalog_str(&data).with_context(|| format!("parsing catalog payload {}", path.display()))
}
