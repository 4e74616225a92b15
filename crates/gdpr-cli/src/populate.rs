//! # Populate Subcommand
//!
//! Loads a catalog of predefined reference list entries (purposes, legal
//! bases, data categories, ...) into the snapshot. Entries are matched by
//! list and name, so running it twice changes nothing the second time.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gdpr_model::{InMemoryStore, ListCatalog};

use crate::config::RegistryConfig;
use crate::{load_store, snapshot_path};

/// Arguments for the `gdpr-registry populate` subcommand.
#[derive(Args, Debug)]
pub struct PopulateArgs {
    /// Catalog file (JSON): section title, then classification, then entries.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Write the populated snapshot here instead of updating it in place.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the populate subcommand.
pub fn run_populate(args: &PopulateArgs, config: &RegistryConfig) -> Result<u8> {
    let path = snapshot_path(config)?;
    let mut store = if path.exists() {
        load_store(path)?
    } else {
        tracing::info!(path = %path.display(), "snapshot does not exist yet, starting empty");
        InMemoryStore::new()
    };

    let text = std::fs::read_to_string(&args.catalog)
        .with_context(|| format!("failed to read catalog {}", args.catalog.display()))?;
    let catalog = ListCatalog::from_json(&text)
        .with_context(|| format!("invalid catalog {}", args.catalog.display()))?;

    let summary = store.populate_lists(&catalog);
    println!(
        "List entries: {} created, {} updated",
        summary.created, summary.updated
    );

    if args.dry_run {
        return Ok(0);
    }
    let target = args.output.as_deref().unwrap_or(path);
    store
        .to_snapshot()
        .save(target)
        .with_context(|| format!("failed to write snapshot {}", target.display()))?;
    Ok(0)
}
