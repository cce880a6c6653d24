//! Plant catalog storefront on the terminal.
//!
//! Loads the catalog once, then applies one command per line from stdin (or
//! from repeated `-c` flags) and prints every re-render to stdout. Logs and
//! command errors go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use plantcart::event::COMMAND_HELP;
use plantcart::{CatalogLoader, Config, Event, Outcome, Overrides, Storefront, TextSurface};
use std::io::{self, BufRead, Stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plantcart")]
#[command(about = "Browse a plant catalog and build a cart")]
struct Cli {
    /// Catalog endpoint (or set PLANTCART_API_URL).
    #[arg(long)]
    api_url: Option<String>,
    /// Read the catalog payload from a local JSON file instead of the network.
    #[arg(long, conflicts_with = "api_url")]
    catalog_file: Option<PathBuf>,
    /// Currency symbol shown before prices (or set PLANTCART_CURRENCY).
    #[arg(long)]
    currency: Option<String>,
    /// Maximum description length on catalog cards; 0 shows the full text.
    #[arg(long)]
    description_limit: Option<usize>,
    /// Give up on the catalog request after this many seconds
    /// (or set PLANTCART_TIMEOUT_SECS). Waits indefinitely when unset.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Run these commands instead of reading stdin.
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
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
    let config = Config::resolve(Overrides {
        api_url: cli.api_url,
        catalog_file: cli.catalog_file,
        currency: cli.currency,
        description_limit: cli.description_limit,
        timeout_secs: cli.timeout_secs,
    })?;

    let loader = CatalogLoader::new(config.source.clone(), config.timeout)?;
    let mut storefront = Storefront::new(TextSurface::new(io::stdout()), config.render.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime.block_on(storefront.load(&loader))?;

    if !cli.commands.is_empty() {
        for command in &cli.commands {
            if !apply_line(&mut storefront, command)? {
                break;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading command from stdin")?;
        if !apply_line(&mut storefront, &line)? {
            break;
        }
    }
    Ok(())
}

/// Apply one command line. Returns `false` when the session should end.
fn apply_line(storefront: &mut Storefront<TextSurface<Stdout>>, line: &str) -> Result<bool> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(true);
    }
    match line {
        "quit" | "exit" => return Ok(false),
        "help" => {
            println!("{COMMAND_HELP}");
            return Ok(true);
        }
        "cart" => {
            storefront.show_cart()?;
            return Ok(true);
        }
        _ => {}
    }

    let event: Event = match line.parse() {
        Ok(event) => event,
        Err(err) => {
            eprintln!("{err:#} (try 'help')");
            return Ok(true);
        }
    };
    if storefront.dispatch(event)? == Outcome::Ignored {
        eprintln!("nothing to do for '{line}'");
    }
    Ok(true)
}
