//! # CLI Flows
//!
//! Drives the subcommand entry points the way an operator would: populate
//! reference lists into a fresh snapshot, add records, validate, collect
//! hints and render a report, all against files in a temporary directory.

use std::path::{Path, PathBuf};

use gdpr_cli::config::RegistryConfig;
use gdpr_cli::hints::{run_hints, HintsArgs};
use gdpr_cli::populate::{run_populate, PopulateArgs};
use gdpr_cli::report::{run_report, ReportArgs};
use gdpr_cli::validate::{run_validate, ValidateArgs};
use gdpr_core::OrganizationId;
use gdpr_hints::Severity;
use gdpr_model::{
    validate_pdf, BusinessProcess, InMemoryStore, ListKind, Organization, RecordStore,
    RegistrySnapshot, ThirdParty,
};

const CATALOG: &str = r#"{
    "Basis for Processing": {
        "Lawfulness": [
            {"name": "Consent", "article": 6, "url": "https://gdpr-info.eu/art-6-gdpr/"},
            {"name": "Legal obligation", "article": 6}
        ]
    },
    "Indicative List of Functional Data Categories": {
        "Health": [{"name": "Medical records", "special": true}],
        "Identity": [{"name": "Contact details"}]
    },
    "Unrelated Section": {}
}"#;

struct Workspace {
    _dir: tempfile::TempDir,
    root: PathBuf,
    config: RegistryConfig,
}

impl Workspace {
    fn new(snapshot: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        let config = RegistryConfig {
            snapshot: Some(root.join(snapshot)),
            ..RegistryConfig::default()
        };
        Self {
            _dir: dir,
            root,
            config,
        }
    }

    fn snapshot(&self) -> &Path {
        self.config.snapshot.as_deref().unwrap()
    }

    fn store(&self) -> InMemoryStore {
        InMemoryStore::from_snapshot(RegistrySnapshot::load(self.snapshot()).unwrap()).unwrap()
    }

    fn save(&self, store: &InMemoryStore) {
        store.to_snapshot().save(self.snapshot()).unwrap();
    }

    fn populate(&self) -> u8 {
        let catalog = self.root.join("lists.json");
        std::fs::write(&catalog, CATALOG).unwrap();
        let args = PopulateArgs {
            catalog,
            output: None,
            dry_run: false,
        };
        run_populate(&args, &self.config).unwrap()
    }

    fn validate(&self) -> u8 {
        run_validate(&ValidateArgs { path: None }, &self.config).unwrap()
    }

    fn hints(&self, organization: Option<OrganizationId>, fail_on_issue: bool) -> u8 {
        let args = HintsArgs {
            organization,
            json: true,
            min_severity: Some(Severity::Warning),
            fail_on_issue,
        };
        run_hints(&args, &self.config).unwrap()
    }
}

// ── Populate ─────────────────────────────────────────────────────────

#[test]
fn populate_seeds_a_fresh_yaml_snapshot_once() {
    let ws = Workspace::new("registry.yaml");
    assert_eq!(ws.populate(), 0);
    let first = ws.store();
    assert_eq!(first.list_entries().count(), 4);

    assert_eq!(ws.populate(), 0);
    let second = ws.store();
    let names = |store: &InMemoryStore| -> Vec<(ListKind, String, String)> {
        store
            .list_entries()
            .map(|e| (e.kind, e.classification.clone(), e.named.name.clone()))
            .collect()
    };
    assert_eq!(names(&first), names(&second));

    let medical = second
        .find_list_entry(ListKind::DataCategory, "Medical records")
        .and_then(|id| second.list_entry(id))
        .unwrap();
    assert!(medical.special);
    assert_eq!(medical.classification, "Health");
}

#[test]
fn populate_keeps_existing_classification() {
    let ws = Workspace::new("registry.json");
    ws.populate();
    let mut store = ws.store();
    let id = store
        .find_list_entry(ListKind::LegalBasis, "Consent")
        .unwrap();
    let mut consent = store.list_entry(id).unwrap().clone();
    consent.classification = "Custom".into();
    store.insert_list_entry(consent).unwrap();
    ws.save(&store);

    ws.populate();
    let store = ws.store();
    let consent = store.list_entry(id).unwrap();
    assert_eq!(consent.classification, "Custom");
    assert_eq!(consent.article, Some(6));
}

// ── Validate, hints and report ───────────────────────────────────────

#[test]
fn operator_flow_from_lists_to_report() {
    let ws = Workspace::new("registry.json");
    ws.populate();
    let mut store = ws.store();
    let mut org = Organization::new("Municipality");
    org.named.description = "City services".into();
    org.public_authority = true;
    let mut process = BusinessProcess::new("Registry office");
    process.named.description = "Civil records".into();
    org.business.push(store.insert_business_process(process).unwrap());
    let org = store.insert_organization(org).unwrap();
    ws.save(&store);

    assert_eq!(ws.validate(), 0);
    // A public authority without DPO is an issue.
    assert_eq!(ws.hints(Some(org), false), 0);
    assert_eq!(ws.hints(Some(org), true), 1);
    assert_eq!(ws.hints(None, true), 1);

    let output = ws.root.join("report.pdf");
    let args = ReportArgs {
        organization: org,
        output: output.clone(),
    };
    assert_eq!(run_report(&args, &ws.config).unwrap(), 0);
    let pdf = std::fs::read(&output).unwrap();
    validate_pdf(&pdf).unwrap();
}

#[test]
fn validate_reports_transfer_rule_from_edited_snapshot() {
    let ws = Workspace::new("registry.json");
    ws.populate();
    let store = ws.store();
    let mut snapshot = store.to_snapshot();
    // The recipient category is valid, so only the transfer rule trips.
    let mut recipients = gdpr_model::ListEntry::new(ListKind::RecipientCategory, "Processors");
    recipients.named.description = "Outsourced processing".into();
    let mut nature = gdpr_model::ListEntry::new(ListKind::TransferNature, "Standard clauses");
    nature.named.description = "SCC".into();
    let mut third_party = ThirdParty::new("Offshore Ltd", recipients.id);
    third_party.third_country_transfer = Some(nature.id);
    snapshot.list_entries.push(recipients);
    snapshot.list_entries.push(nature);
    snapshot.third_parties.push(third_party);
    snapshot.save(ws.snapshot()).unwrap();

    assert_eq!(ws.validate(), 1);
}

#[test]
fn subcommands_fail_without_a_snapshot() {
    let config = RegistryConfig::default();
    let args = HintsArgs {
        organization: None,
        json: false,
        min_severity: None,
        fail_on_issue: false,
    };
    assert!(run_hints(&args, &config).is_err());
    assert!(run_validate(&ValidateArgs { path: None }, &config).is_err());
}

#[test]
fn report_for_unknown_organization_writes_nothing() {
    let ws = Workspace::new("registry.json");
    ws.populate();
    let output = ws.root.join("report.pdf");
    let args = ReportArgs {
        organization: OrganizationId::new(),
        output: output.clone(),
    };
    assert!(run_report(&args, &ws.config).is_err());
    assert!(!output.exists());
}
