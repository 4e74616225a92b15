//! # Report Subcommand
//!
//! Renders the registry of processing activities of one organization as a
//! PDF file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gdpr_core::OrganizationId;
use gdpr_report::generate_report;

use crate::config::RegistryConfig;
use crate::{load_store, snapshot_path};

/// Arguments for the `gdpr-registry report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Organization to report on.
    #[arg(value_name = "ORGANIZATION_ID")]
    pub organization: OrganizationId,

    /// Where to write the PDF.
    #[arg(short, long, default_value = "gdpr_registry.pdf")]
    pub output: PathBuf,
}

/// Execute the report subcommand.
pub fn run_report(args: &ReportArgs, config: &RegistryConfig) -> Result<u8> {
    let store = load_store(snapshot_path(config)?)?;
    let pdf = generate_report(&store, args.organization, &config.report_options())
        .with_context(|| format!("cannot render report for {}", args.organization))?;
    std::fs::write(&args.output, &pdf)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Wrote {} ({} bytes)", args.output.display(), pdf.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpr_model::{InMemoryStore, Organization};

    #[test]
    fn test_writes_pdf_file() {
        let mut store = InMemoryStore::new();
        let org = store.insert_organization(Organization::new("Acme")).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("registry.yaml");
        store.to_snapshot().save(&snapshot).unwrap();

        let output = dir.path().join("out.pdf");
        let config = RegistryConfig {
            snapshot: Some(snapshot),
            ..RegistryConfig::default()
        };
        let code = run_report(
            &ReportArgs {
                organization: org,
                output: output.clone(),
            },
            &config,
        )
        .unwrap();
        assert_eq!(code, 0);
        let bytes = std::fs::read(&output).unwrap();
        assert!(gdpr_model::validate_pdf(&bytes).is_ok());
    }

    #[test]
    fn test_unknown_organization_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("registry.json");
        InMemoryStore::new().to_snapshot().save(&snapshot).unwrap();
        let output = dir.path().join("out.pdf");
        let config = RegistryConfig {
            snapshot: Some(snapshot),
            ..RegistryConfig::default()
        };
        let err = run_report(
            &ReportArgs {
                organization: OrganizationId::new(),
                output: output.clone(),
            },
            &config,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Invalid Organization ID"));
        assert!(!output.exists());
    }
}
