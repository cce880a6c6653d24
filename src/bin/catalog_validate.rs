//! Validate a plant catalog payload against the bundled schema.
//!
//! Usage:
//!   catalog-validate --file plants.json
//!   curl -s https://openapi.programming-hero.com/api/plants | catalog-validate
//!   catalog-validate --schema custom.schema.json --file plants.json

use anyhow::{Context, Result, bail};
use clap::Parser;
use plantcart::{Catalog, PayloadSchema, decode_payload, parse_catalog_records};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate a plant catalog payload")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Optional extra schema checked before the bundled one.
    #[arg(long)]
    schema: Option<PathBuf>,
}

#[derive(Serialize)]
struct Summary {
    plants: usize,
    categories: Vec<String>,
}

fn read_input(file: Option<PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
    }
    decode_payload(&buf)
}

fn main() {
    plantcart::init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let input = read_input(cli.file)?;

    if let Some(schema_path) = cli.schema {
        PayloadSchema::load(&schema_path)?.validate(&input)?;
    }
    let parsed = parse_catalog_records(input)?;
    if !parsed.rejected.is_empty() {
        bail!(
            "{} plant record(s) failed validation:\n{}",
            parsed.rejected.len(),
            parsed.rejected.join("\n")
        );
    }
    let records = parsed.plants.len();
    let catalog = Catalog::new(parsed.plants);
    if catalog.len() != records {
        bail!(
            "{} plant record(s) have a duplicate id or a blank name",
            records - catalog.len()
        );
    }

    let summary = Summary {
        plants: catalog.len(),
        categories: catalog
            .categories()
            .labels()
            .iter()
            .map(ToString::to_string)
            .collect(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
