//! JSON Schema loader for catalog payloads.
//!
//! The payload schema ships inside the crate (`schema/plant_catalog.schema.json`).
//! It is split in two: the document schema checks the envelope shape, and the
//! `definitions/plant` sub-schema checks one plant record, so a bad record can
//! be skipped without losing the rest of the catalog. Callers may also compile
//! an alternative document schema from disk.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const BUNDLED_SCHEMA: &str = include_str!("../schema/plant_catalog.schema.json");
const RECORD_POINTER: &str = "/definitions/plant";

/// Compiled payload schema.
pub struct PayloadSchema {
    document: JSONSchema,
    record: Option<JSONSchema>,
    origin: String,
}

impl PayloadSchema {
    /// Compile the schema embedded in the crate.
    pub fn bundled() -> Result<Self> {
        let schema: Value =
            serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled catalog schema")?;
        Self::compile(schema, "bundled catalog schema".to_string())
    }

    /// Compile a schema file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let schema: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(schema, path.display().to_string())
    }

    fn compile(schema: Value, origin: String) -> Result<Self> {
        if !schema.is_object() {
            bail!("schema {origin} must be a JSON object");
        }
        let document = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;
        let record = match schema.pointer(RECORD_POINTER) {
            Some(record_schema) => Some(
                JSONSchema::compile(record_schema)
                    .map_err(|err| anyhow!("compiling {RECORD_POINTER} in {origin}: {err}"))?,
            ),
            None => None,
        };
        Ok(Self {
            document,
            record,
            origin,
        })
    }

    /// Validate the payload envelope, joining every violation into one error.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.document.validate(instance) {
            bail!(
                "catalog payload failed validation against {}:\n{}",
                self.origin,
                join_errors(errors)
            );
        }
        Ok(())
    }

    /// Validate one plant record. Schemas without a record definition accept
    /// every record.
    pub fn validate_record(&self, record: &Value) -> Result<()> {
        let Some(schema) = &self.record else {
            return Ok(());
        };
        if let Err(errors) = schema.validate(record) {
            bail!("plant record failed validation: {}", join_errors(errors));
        }
        Ok(())
    }
}

fn join_errors<'a>(errors: impl Iterator<Item = jsonschema::ValidationError<'a>>) -> String {
    errors
        .map(|err| {
            let path = err.instance_path.to_string();
            if path.is_empty() {
                err.to_string()
            } else {
                format!("{path}: {err}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
