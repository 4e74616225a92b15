//! # gdpr-cli — Command Line for the GDPR Registry
//!
//! Provides the `gdpr-registry` command. Every subcommand works on a
//! registry snapshot file (JSON or YAML) named by `--snapshot` or the
//! `REGISTRY_SNAPSHOT` variable.
//!
//! ## Subcommands
//!
//! - `gdpr-registry hints [ORGANIZATION_ID]`: hints of one organization,
//!   or the registry status summary.
//! - `gdpr-registry report ORGANIZATION_ID`: render the PDF report.
//! - `gdpr-registry validate [PATH]`: check every write-time rule.
//! - `gdpr-registry populate CATALOG`: load predefined reference lists.
//!
//! ## Exit codes
//!
//! 0 on success, 1 on findings (validation failures, issues when
//! `--fail-on-issue` is set), 2 on operational errors.

pub mod config;
pub mod hints;
pub mod populate;
pub mod report;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use gdpr_model::{InMemoryStore, RegistrySnapshot};

use crate::config::RegistryConfig;

/// The configured snapshot path.
pub fn snapshot_path(config: &RegistryConfig) -> Result<&Path> {
    config
        .snapshot
        .as_deref()
        .context("no snapshot file given: pass --snapshot or set REGISTRY_SNAPSHOT")
}

/// Read a snapshot file into a store.
pub fn load_store(path: &Path) -> Result<InMemoryStore> {
    let snapshot = RegistrySnapshot::load(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let store = InMemoryStore::from_snapshot(snapshot)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), "snapshot ready");
    Ok(store)
}
