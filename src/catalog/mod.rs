//! Plant catalog wiring.
//!
//! Types here mirror the payload served by the plants endpoint. Callers load a
//! validated plant list with `parse_catalog_payload` or
//! `load_catalog_from_path`, then wrap it in a `Catalog` for id lookups,
//! category derivation and filtering.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{Category, PlantId, Price};
pub use index::{Catalog, CategoryFilter, CategoryIndex};
pub use model::{
    ParsedCatalog, Plant, decode_payload, load_catalog_from_path, parse_catalog_payload,
    parse_catalog_records, parse_catalog_str,
};

/// Endpoint serving the plant list.
pub const DEFAULT_API_URL: &str = "https://openapi.programming-hero.com/api/plants";
