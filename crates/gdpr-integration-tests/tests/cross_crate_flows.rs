//! # Cross-Crate Flows
//!
//! Exercises the path a registry takes through the workspace: records are
//! inserted into the store, written to a snapshot file, read back, checked
//! by the hint engine and rendered as a PDF report.

use chrono::NaiveDate;

use gdpr_core::{DataAuditId, Named, OrganizationId, RiskLevel};
use gdpr_hints::{collect_hints, registry_status, Severity, CONTINUOUS_PROCESS};
use gdpr_model::{
    BreachDetection, BreachResponse, BusinessOwner, BusinessProcess, DataAudit,
    DataManagementPolicy, DataProtectionOfficer, DataSubjectRights, Dpia, EntityRef,
    InMemoryStore, ListEntry, ListKind, ModelError, Organization, ProcessingActivity,
    RecordStore, RegistrySnapshot, ThirdParty, UserAccount,
};
use gdpr_report::report::{NO_DPIA, NO_TRANSFERS};
use gdpr_report::{generate_report, render_report, Block, ReportOptions};

const PDF: &[u8] = b"%PDF-1.4\n%%EOF\n";
const DESC: &str = "Documented";

struct Registry {
    store: InMemoryStore,
    org: OrganizationId,
    data: DataAuditId,
}

fn described_list(store: &mut InMemoryStore, kind: ListKind, name: &str) -> gdpr_core::ListEntryId {
    let mut entry = ListEntry::new(kind, name);
    entry.named.description = DESC.into();
    store.insert_list_entry(entry).unwrap()
}

/// An organization with a DPO and one fully documented chain down to a
/// single low-risk data audit. It produces no hints.
fn documented_registry() -> Registry {
    let mut store = InMemoryStore::new();
    let category = described_list(&mut store, ListKind::DataCategory, "Customer contacts");
    let customers = described_list(&mut store, ListKind::DataSubjectCategory, "Customers");
    let purpose = described_list(&mut store, ListKind::ProcessingPurpose, "Marketing");
    let proc_type = described_list(&mut store, ListKind::ProcessingType, "Profiling");
    let legal = described_list(&mut store, ListKind::LegalBasis, "Consent");

    let rights = store
        .insert_subject_rights(
            DataSubjectRights::upload(Named::new("Rights procedure", DESC), PDF).unwrap(),
        )
        .unwrap();
    let mut policy = DataManagementPolicy::new("CRM retention");
    policy.named.description = DESC.into();
    policy.retention = Some(730);
    policy.risk = RiskLevel::Low;
    policy.risk_mitigation = "Role based access".into();
    policy.subject_rights = Some(rights);
    policy.subject_notification = "Privacy notice on signup".into();
    let policy = store.insert_management_policy(policy).unwrap();

    let mut detection = BreachDetection::new("Audit logging");
    detection.named.description = DESC.into();
    detection.risk = RiskLevel::Low;
    detection.risk_mitigation = "Daily review".into();
    let detection = store.insert_breach_detection(detection).unwrap();

    let mut response = BreachResponse::new("Breach playbook");
    response.named.description = DESC.into();
    response.risk = RiskLevel::Low;
    response.risk_mitigation = "Tabletop exercises".into();
    let response = store.insert_breach_response(response).unwrap();

    let mut data = DataAudit::new("Newsletter subscribers", category);
    data.named.description = DESC.into();
    data.subject_category.push(customers);
    data.risk = RiskLevel::Low;
    data.management = Some(policy);
    data.breach_detection = Some(detection);
    data.breach_response = Some(response);
    let data = store.insert_data_audit(data).unwrap();

    let mut activity = ProcessingActivity::new("Newsletter", purpose, proc_type, legal);
    activity.named.description = DESC.into();
    activity.start_date = NaiveDate::from_ymd_opt(2019, 1, 1);
    activity.technology = Some("Mailing platform".into());
    activity.data_audit.push(data);
    let activity = store.insert_activity(activity).unwrap();

    let owner = store.insert_owner(BusinessOwner::new(UserAccount::new("cmo")));
    let mut process = BusinessProcess::new("Marketing");
    process.named.description = DESC.into();
    process.owner = Some(owner);
    process.activities.push(activity);
    let process = store.insert_business_process(process).unwrap();

    let mut user = UserAccount::new("privacy");
    user.first_name = "Paula".into();
    user.last_name = "Rossi".into();
    let officer = store.insert_officer(DataProtectionOfficer::new(user));

    let mut org = Organization::new("Acme");
    org.named.description = DESC.into();
    org.officer = Some(officer);
    org.business.push(process);
    let org = store.insert_organization(org).unwrap();

    Registry { store, org, data }
}

fn edit_data(registry: &mut Registry, f: impl FnOnce(&mut DataAudit)) {
    let mut data = registry.store.data_audit(registry.data).unwrap().clone();
    f(&mut data);
    registry.store.insert_data_audit(data).unwrap();
}

fn placeholders(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter_map(|b| match b {
            Block::Paragraph { text, italic: true } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

// ── Store, snapshot and hints ────────────────────────────────────────

#[test]
fn documented_registry_is_quiet() {
    let registry = documented_registry();
    assert!(registry.store.validate().is_empty());
    let hints = collect_hints(&registry.store, &EntityRef::Organization(registry.org));
    assert!(hints.is_empty(), "unexpected hints: {:?}", hints.flatten());

    let status = registry_status(&registry.store, |_, _| None);
    assert_eq!(
        status.flatten(),
        vec![(Severity::Suggestion, CONTINUOUS_PROCESS.to_string())]
    );
}

#[test]
fn snapshot_file_reload_keeps_hints_and_toc() {
    let mut registry = documented_registry();
    edit_data(&mut registry, |d| {
        d.risk = RiskLevel::High;
        d.named.description.clear();
    });
    let before_hints = collect_hints(&registry.store, &EntityRef::Organization(registry.org));
    let options = ReportOptions::default();
    let before_report = render_report(&registry.store, registry.org, &options).unwrap();

    let dir = tempfile::tempdir().unwrap();
    for file in ["registry.json", "registry.yaml"] {
        let path = dir.path().join(file);
        registry.store.to_snapshot().save(&path).unwrap();
        let reloaded = InMemoryStore::from_snapshot(RegistrySnapshot::load(&path).unwrap()).unwrap();

        assert_eq!(reloaded.to_snapshot(), registry.store.to_snapshot());
        let hints = collect_hints(&reloaded, &EntityRef::Organization(registry.org));
        assert_eq!(hints, before_hints);
        let report = render_report(&reloaded, registry.org, &options).unwrap();
        assert_eq!(report.layout.toc, before_report.layout.toc);
    }
}

#[test]
fn empty_description_yields_exactly_one_warning() {
    let mut registry = documented_registry();
    edit_data(&mut registry, |d| d.named.description = "   ".into());
    let hints = collect_hints(&registry.store, &EntityRef::Organization(registry.org));
    let warnings = hints.get(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].to_string(),
        "Missing description on Data Audit Newsletter subscribers"
    );
    assert_eq!(hints.len(), 1);
}

#[test]
fn organization_without_processes_only_gets_a_suggestion() {
    let mut store = InMemoryStore::new();
    let mut org = Organization::new("Startup");
    org.named.description = DESC.into();
    let org = store.insert_organization(org).unwrap();

    let hints = collect_hints(&store, &EntityRef::Organization(org));
    assert!(hints.get(Severity::Issue).is_empty());
    assert!(hints.get(Severity::Warning).is_empty());
    assert_eq!(hints.get(Severity::Suggestion).len(), 1);

    let status = registry_status(&store, |_, _| None);
    let suggestions = status.get(Severity::Suggestion);
    assert_eq!(suggestions.len(), 1);
    assert!(suggestions[0].to_string().starts_with("Please insert at least one business process"));
}

// ── Risk and DPIA ────────────────────────────────────────────────────

#[test]
fn high_risk_without_dpia_flows_into_hints_and_report() {
    let mut registry = documented_registry();
    edit_data(&mut registry, |d| d.risk = RiskLevel::High);

    let hints = collect_hints(&registry.store, &EntityRef::Organization(registry.org));
    let issues: Vec<String> = hints
        .get(Severity::Issue)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        issues,
        vec![
            "Mid/High inherent risk, but no Data Protection Impact Assessment specified for \
             Data Audit Newsletter subscribers"
                .to_string()
        ]
    );

    let report = render_report(&registry.store, registry.org, &ReportOptions::default()).unwrap();
    assert_eq!(placeholders(&report.blocks), vec![NO_TRANSFERS, NO_DPIA]);
}

#[test]
fn linking_a_dpia_replaces_the_issue_with_its_own_hints() {
    let mut registry = documented_registry();
    let dpia = registry
        .store
        .insert_dpia(Dpia::upload(Named::new("Newsletter DPIA", ""), PDF).unwrap())
        .unwrap();
    edit_data(&mut registry, |d| {
        d.risk = RiskLevel::High;
        d.dpia = Some(dpia);
    });

    let hints = collect_hints(&registry.store, &EntityRef::Organization(registry.org));
    assert!(hints.get(Severity::Issue).is_empty());
    let warnings = hints.get(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].subject, Some(EntityRef::Dpia(dpia)));

    let report = render_report(&registry.store, registry.org, &ReportOptions::default()).unwrap();
    assert_eq!(placeholders(&report.blocks), vec![NO_TRANSFERS]);
    let text: String = report.layout.pages.iter().map(|p| p.text()).collect();
    assert!(text.contains("Newsletter DPIA"));
}

// ── Validation ───────────────────────────────────────────────────────

#[test]
fn transfer_nature_requires_a_third_country_flag() {
    let mut store = InMemoryStore::new();
    let recipients = described_list(&mut store, ListKind::RecipientCategory, "Cloud provider");
    let nature = described_list(&mut store, ListKind::TransferNature, "Adequacy decision");

    let mut third_party = ThirdParty::new("Hosting Inc", recipients);
    third_party.third_country_transfer = Some(nature);
    let err = store.insert_third_party(third_party.clone()).unwrap_err();
    assert!(matches!(err, ModelError::TransferWithoutThirdCountry { .. }));
    assert!(store.third_party(third_party.id).is_none());

    third_party.contact.international = true;
    store.insert_third_party(third_party.clone()).unwrap();
    assert!(store.third_party(third_party.id).is_some());
}

#[test]
fn snapshot_load_defers_rules_to_validate() {
    let mut snapshot = documented_registry().store.to_snapshot();
    let recipients = snapshot
        .list_entries
        .iter()
        .find(|e| e.kind == ListKind::DataCategory)
        .map(|e| e.id)
        .unwrap();
    // A data category is not a recipient category.
    snapshot
        .third_parties
        .push(ThirdParty::new("Wrong list", recipients));

    let store = InMemoryStore::from_snapshot(snapshot).unwrap();
    let violations = store.validate();
    assert_eq!(violations.len(), 1);
    assert!(matches!(violations[0], ModelError::WrongListKind { .. }));
}

// ── Report ───────────────────────────────────────────────────────────

#[test]
fn report_toc_walks_levels_in_page_order() {
    let registry = documented_registry();
    let report = render_report(&registry.store, registry.org, &ReportOptions::default()).unwrap();
    let toc = &report.layout.toc;

    let levels: Vec<usize> = toc.iter().map(|e| e.level).collect();
    assert_eq!(levels, vec![1, 1, 1, 2, 3, 4]);
    let numbers: Vec<&str> = toc.iter().map(|e| e.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3", "3.1", "3.1.1", "3.1.1.1"]);
    assert!(toc.windows(2).all(|w| w[0].page <= w[1].page));
    assert!(toc.iter().all(|e| e.page >= 2 && e.page <= report.layout.pages.len()));

    for entry in toc {
        let page = report.layout.pages[entry.page - 1].text();
        assert!(page.contains(&entry.number), "{} not on page {}", entry.number, entry.page);
    }
}

#[test]
fn report_names_the_dpo_and_only_notes_missing_transfers() {
    let registry = documented_registry();
    let report = render_report(&registry.store, registry.org, &ReportOptions::default()).unwrap();
    assert_eq!(placeholders(&report.blocks), vec![NO_TRANSFERS]);
    let text: String = report.layout.pages.iter().map(|p| p.text()).collect();
    assert!(text.contains("Paula"));
    assert!(text.contains("Rossi"));
}

#[test]
fn generated_pdf_is_a_valid_upload() {
    let registry = documented_registry();
    let pdf = generate_report(&registry.store, registry.org, &ReportOptions::default()).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(pdf.ends_with(b"%%EOF\n"));
    // The registry accepts its own output as a document upload.
    Dpia::upload(Named::new("Report copy", DESC), &pdf).unwrap();
}

#[test]
fn report_for_unknown_organization_fails() {
    let registry = documented_registry();
    let result = generate_report(&registry.store, OrganizationId::new(), &ReportOptions::default());
    assert!(result.is_err());
}
