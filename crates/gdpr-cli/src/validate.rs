//! # Validate Subcommand
//!
//! Loads a snapshot and checks every record against the write-time rules:
//! references resolve, list references point at the right list, ownership
//! is unique, and transfer natures only sit on third-country recipients.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gdpr_model::{InMemoryStore, RegistrySnapshot};

use crate::config::RegistryConfig;
use crate::snapshot_path;

/// Arguments for the `gdpr-registry validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Snapshot to validate. Defaults to the configured snapshot.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the snapshot is valid, 1 on violations.
pub fn run_validate(args: &ValidateArgs, config: &RegistryConfig) -> Result<u8> {
    let path: &Path = match &args.path {
        Some(path) => path,
        None => snapshot_path(config)?,
    };
    let snapshot = RegistrySnapshot::load(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;

    let store = match InMemoryStore::from_snapshot(snapshot) {
        Ok(store) => store,
        Err(e) => {
            println!("FAIL: {}: {e}", path.display());
            return Ok(1);
        }
    };

    let violations = store.validate();
    if violations.is_empty() {
        println!("{}: {} records, no violations", path.display(), store.len());
        return Ok(0);
    }
    println!("{}: {} violation(s)", path.display(), violations.len());
    for violation in &violations {
        println!("  FAIL: {violation}");
    }
    Ok(1)
}
