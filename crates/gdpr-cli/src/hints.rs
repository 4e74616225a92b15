//! # Hints Subcommand
//!
//! Prints the hints of one organization, or, without an organization, the
//! registry status summary over every organization in the snapshot.

use anyhow::{bail, Result};
use clap::Args;

use gdpr_core::OrganizationId;
use gdpr_hints::{collect_hints, registry_status, HintList, Severity};
use gdpr_model::{EntityRef, RecordStore};

use crate::config::RegistryConfig;
use crate::{load_store, snapshot_path};

/// Arguments for the `gdpr-registry hints` subcommand.
#[derive(Args, Debug)]
pub struct HintsArgs {
    /// Organization to check. Omit for the registry status summary.
    #[arg(value_name = "ORGANIZATION_ID")]
    pub organization: Option<OrganizationId>,

    /// Print the hints as JSON, grouped by severity.
    #[arg(long)]
    pub json: bool,

    /// Hide hints below this severity (suggestion, warning, issue).
    #[arg(long, value_name = "SEVERITY")]
    pub min_severity: Option<Severity>,

    /// Exit with status 1 when at least one issue is reported.
    #[arg(long)]
    pub fail_on_issue: bool,
}

/// Execute the hints subcommand.
pub fn run_hints(args: &HintsArgs, config: &RegistryConfig) -> Result<u8> {
    let store = load_store(snapshot_path(config)?)?;
    let hints = match args.organization {
        Some(id) => {
            if store.organization(id).is_none() {
                bail!("organization {id} not found in the snapshot");
            }
            collect_hints(&store, &EntityRef::Organization(id))
        }
        None => registry_status(&store, |_, _| None),
    };
    let hints = at_least(&hints, args.min_severity);
    tracing::info!(hints = hints.len(), "collected hints");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hints)?);
    } else {
        print!("{}", render_text(&hints));
    }

    let has_issue = !hints.get(Severity::Issue).is_empty();
    Ok(if args.fail_on_issue && has_issue { 1 } else { 0 })
}

/// Keep only hints at or above `min`.
pub fn at_least(hints: &HintList, min: Option<Severity>) -> HintList {
    let mut kept = HintList::new();
    for hint in hints.iter() {
        if min.map_or(true, |min| hint.severity >= min) {
            kept.push(hint.clone());
        }
    }
    kept
}

/// Plain text listing, one group per severity, most significant first.
pub fn render_text(hints: &HintList) -> String {
    if hints.is_empty() {
        return "No hints.\n".to_string();
    }
    let mut out = String::new();
    for (_, title, items) in hints.items().into_iter().rev() {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("{title} ({}):\n", items.len()));
        for hint in items {
            out.push_str(&format!("  - {hint}\n"));
        }
    }
    out
}
