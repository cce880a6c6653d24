pub mod cart;
pub mod catalog;
pub mod config;
pub mod event;
pub mod loader;
pub mod render;
pub mod schema_loader;
pub mod storefront;
pub mod surface;

pub use cart::{CartLine, CartStore};
pub use catalog::{
    Catalog, Category, CategoryFilter, CategoryIndex, ParsedCatalog, Plant, PlantId, Price,
    decode_payload, load_catalog_from_path, parse_catalog_payload, parse_catalog_records,
    parse_catalog_str,
};
pub use config::{Config, Overrides};
pub use event::Event;
pub use loader::{CatalogLoader, CatalogSource};
pub use render::{CartRow, CartView, CategoryEntry, PlantCard, PlantDetail, RenderOptions};
pub use schema_loader::PayloadSchema;
pub use storefront::{Outcome, Storefront};
pub use surface::{Surface, TextSurface};

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber honoring `RUST_LOG` (default `warn`).
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
