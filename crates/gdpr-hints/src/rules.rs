//! # Hint Rules
//!
//! [`collect_hints`] dispatches on the kind of the root record and runs the
//! rules for that kind. Each rule function first adds the record's own
//! hints, then recurses into the related records it names, in collection
//! order, and merges their hints.
//!
//! A record reached along several links (a data audit shared by two
//! activities, a subject category used by many audits) contributes its
//! own hints once, at the first place the walk meets it.
//!
//! Rules are pure functions of the stored records. A reference to a record
//! that does not exist is treated like an empty link and produces the
//! corresponding "missing" hint; collection never fails.

use std::collections::HashSet;
use std::fmt::Display;

use gdpr_core::Named;
use gdpr_model::{
    BusinessOwner, BusinessProcess, DataAudit, DataManagementPolicy, DataProtectionOfficer,
    DpoTrigger, EntityRef, ListEntry, Organization, PdfDocument, ProcessingActivity,
    ProcessorContract, RecordStore, ResidualRisk, ThirdParty,
};

use crate::hint::{Hint, Severity};
use crate::list::HintList;

const DETECTION_RISK: &str = "Mid/high residual risk of missing data breaches for";
const RESPONSE_RISK: &str = "Mid/high residual risk for data breach response on";

/// Collect the hints of `subject` and of every record reachable from it.
///
/// An unknown subject yields an empty list.
pub fn collect_hints(store: &dyn RecordStore, subject: &EntityRef) -> HintList {
    tracing::debug!(%subject, kind = %subject.kind(), "collecting hints");
    let mut walk = Walk::new(store);
    let hints = match *subject {
        EntityRef::Organization(id) => store
            .organization(id)
            .map(|r| organization_hints(&mut walk, r)),
        EntityRef::ThirdParty(id) => store
            .third_party(id)
            .map(|r| third_party_hints(&mut walk, r)),
        EntityRef::Officer(id) => store.officer(id).map(officer_hints),
        EntityRef::Owner(id) => store.owner(id).map(|r| owner_hints(store, r)),
        EntityRef::BusinessProcess(id) => store
            .business_process(id)
            .map(|r| business_process_hints(&mut walk, r)),
        EntityRef::Activity(id) => store.activity(id).map(|r| activity_hints(&mut walk, r)),
        EntityRef::DataAudit(id) => store
            .data_audit(id)
            .map(|r| data_audit_hints(&mut walk, r)),
        EntityRef::ManagementPolicy(id) => store
            .management_policy(id)
            .map(|r| management_policy_hints(&mut walk, r)),
        EntityRef::BreachDetection(id) => store.breach_detection(id).map(|r| {
            let subject = Subject::named(EntityRef::BreachDetection(r.id), &r.named);
            residual_risk_hints(
                &subject,
                r,
                store.data_of_breach_detection(r.id).len(),
                DETECTION_RISK,
            )
        }),
        EntityRef::BreachResponse(id) => store.breach_response(id).map(|r| {
            let subject = Subject::named(EntityRef::BreachResponse(r.id), &r.named);
            residual_risk_hints(
                &subject,
                r,
                store.data_of_breach_response(r.id).len(),
                RESPONSE_RISK,
            )
        }),
        EntityRef::Dpia(id) => store
            .dpia(id)
            .map(|r| document_hints(&mut walk, EntityRef::Dpia(r.id), &r.document)),
        EntityRef::SubjectRights(id) => store
            .subject_rights(id)
            .map(|r| document_hints(&mut walk, EntityRef::SubjectRights(r.id), &r.document)),
        EntityRef::ProcessorContract(id) => store
            .processor_contract(id)
            .map(|r| processor_contract_hints(&mut walk, r)),
        EntityRef::ClassificationDocument(id) => store.classification_document(id).map(|r| {
            document_hints(
                &mut walk,
                EntityRef::ClassificationDocument(r.id),
                &r.document,
            )
        }),
        EntityRef::ListEntry(_, id) => store
            .list_entry(id)
            .map(|r| list_entry_hints(&mut walk, r)),
    };
    hints.unwrap_or_else(|| {
        tracing::debug!(%subject, "subject not found, no hints");
        HintList::new()
    })
}

// ─── Helpers ─────────────────────────────────────────────────────────

/// State of one collection: the store and the records already visited.
struct Walk<'s> {
    store: &'s dyn RecordStore,
    seen: HashSet<EntityRef>,
}

impl<'s> Walk<'s> {
    fn new(store: &'s dyn RecordStore) -> Self {
        Self {
            store,
            seen: HashSet::new(),
        }
    }

    /// `true` the first time `reference` is reached in this walk.
    fn first_visit(&mut self, reference: EntityRef) -> bool {
        let first = self.seen.insert(reference);
        if !first {
            tracing::trace!(%reference, "already visited");
        }
        first
    }
}

/// The record a hint is about.
struct Subject {
    reference: EntityRef,
    name: String,
}

impl Subject {
    fn named(reference: EntityRef, named: &Named) -> Self {
        Self {
            reference,
            name: named.name.clone(),
        }
    }

    fn hint(&self, severity: Severity, text: impl Into<String>) -> Hint {
        Hint::new(severity, text, self.reference, self.name.clone())
    }
}

/// Resolve a list of references, dropping the ones that point nowhere.
fn resolve<'a, I, T>(ids: &[I], lookup: impl Fn(I) -> Option<&'a T>) -> Vec<&'a T>
where
    I: Copy + Display,
    T: 'a,
{
    ids.iter()
        .filter_map(|&id| {
            let found = lookup(id);
            if found.is_none() {
                tracing::debug!(%id, "dangling reference treated as absent");
            }
            found
        })
        .collect()
}

fn description_hints(subject: &Subject, named: &Named) -> HintList {
    let mut hints = HintList::new();
    if named.missing_description() {
        hints.push(subject.hint(Severity::Warning, "Missing description on"));
    }
    hints
}

fn dpo_reason(trigger: DpoTrigger) -> &'static str {
    match trigger {
        DpoTrigger::PublicAuthority => "Public authorities",
        DpoTrigger::Monitoring => {
            "When systematic, large-scale monitoring of individuals is performed as core \
             activity, Organizations"
        }
        DpoTrigger::SpecialCategory => {
            "When large-scale processing of special data about individuals is performed as \
             core activity, Organizations"
        }
    }
}

// ─── Organizations and people ────────────────────────────────────────

fn organization_hints(walk: &mut Walk<'_>, org: &Organization) -> HintList {
    let reference = EntityRef::Organization(org.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let store = walk.store;
    let subject = Subject::named(reference, &org.named);
    let mut hints = description_hints(&subject, &org.named);

    let has_officer = org.officer.and_then(|id| store.officer(id)).is_some();
    if !has_officer {
        if let Some(trigger) = org.dpo_trigger() {
            hints.push(subject.hint(
                Severity::Issue,
                format!("{} must appoint a Data Protection Officer", dpo_reason(trigger)),
            ));
        }
    }

    let processes = resolve(&org.business, |id| store.business_process(id));
    if processes.is_empty() {
        hints.push(subject.hint(
            Severity::Suggestion,
            "Please insert at least one business process into",
        ));
    }
    for process in processes {
        hints.extend(business_process_hints(walk, process));
    }
    hints
}

fn third_party_hints(walk: &mut Walk<'_>, third_party: &ThirdParty) -> HintList {
    let reference = EntityRef::ThirdParty(third_party.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let store = walk.store;
    let subject = Subject::named(reference, &third_party.named);
    let mut hints = description_hints(&subject, &third_party.named);
    if let Some(transfer) = third_party.third_country_transfer {
        if third_party.appropriate_safeguards.trim().is_empty() {
            hints.push(subject.hint(
                Severity::Issue,
                "No appropriate safeguards have been specified for third-country/international \
                 data transfers",
            ));
        }
        if let Some(nature) = resolve(&[transfer], |id| store.list_entry(id)).first() {
            hints.extend(list_entry_hints(walk, nature));
        }
    }
    hints
}

fn officer_hints(officer: &DataProtectionOfficer) -> HintList {
    let mut hints = HintList::new();
    if officer.staff {
        let subject = Subject {
            reference: EntityRef::Officer(officer.id),
            name: officer.user.display_name(),
        };
        hints.push(subject.hint(
            Severity::Warning,
            "DPO is part of the staff of the controller organization. You should be able to \
             demonstrate that the DPO is an independent person.",
        ));
    }
    hints
}

fn owner_hints(store: &dyn RecordStore, owner: &BusinessOwner) -> HintList {
    let mut hints = HintList::new();
    if store.processes_of_owner(owner.id).is_empty() {
        let subject = Subject {
            reference: EntityRef::Owner(owner.id),
            name: owner.user.display_name(),
        };
        hints.push(subject.hint(Severity::Issue, "No business process associated with"));
    }
    hints
}

// ─── Processes and activities ────────────────────────────────────────

fn business_process_hints(walk: &mut Walk<'_>, process: &BusinessProcess) -> HintList {
    let reference = EntityRef::BusinessProcess(process.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let store = walk.store;
    let subject = Subject::named(reference, &process.named);
    let mut hints = description_hints(&subject, &process.named);
    if store.organizations_of_process(process.id).is_empty() {
        hints.push(subject.hint(Severity::Issue, "No organization associated to"));
    }
    if process.owner.and_then(|id| store.owner(id)).is_none() {
        hints.push(subject.hint(Severity::Warning, "No owner for"));
    }
    let activities = resolve(&process.activities, |id| store.activity(id));
    if activities.is_empty() {
        hints.push(subject.hint(
            Severity::Suggestion,
            "Please specify at least one processing activity for",
        ));
    }
    for activity in activities {
        hints.extend(activity_hints(walk, activity));
    }
    hints
}

fn activity_hints(walk: &mut Walk<'_>, activity: &ProcessingActivity) -> HintList {
    let reference = EntityRef::Activity(activity.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let store = walk.store;
    let subject = Subject::named(reference, &activity.named);
    let mut hints = description_hints(&subject, &activity.named);
    if store.processes_of_activity(activity.id).is_empty() {
        hints.push(subject.hint(Severity::Issue, "No business process associated to"));
    }
    if activity.start_date.is_none() {
        hints.push(subject.hint(Severity::Warning, "Missing start date for"));
    }
    if activity.missing_technology() {
        hints.push(subject.hint(Severity::Warning, "Missing description of technology for"));
    }
    let data_audits = resolve(&activity.data_audit, |id| store.data_audit(id));
    if data_audits.is_empty() {
        hints.push(subject.hint(
            Severity::Suggestion,
            "Please specify at least one data audit for",
        ));
    }
    for data in data_audits {
        hints.extend(data_audit_hints(walk, data));
    }
    hints
}

// ─── Data audits ─────────────────────────────────────────────────────

fn data_audit_hints(walk: &mut Walk<'_>, data: &DataAudit) -> HintList {
    let reference = EntityRef::DataAudit(data.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let store = walk.store;
    let subject = Subject::named(reference, &data.named);
    let mut hints = description_hints(&subject, &data.named);

    if store.activities_of_data(data.id).is_empty() {
        hints.push(subject.hint(Severity::Issue, "No processing activity associated to"));
    }
    let management = data.management.and_then(|id| store.management_policy(id));
    if management.is_none() {
        hints.push(subject.hint(Severity::Issue, "No data management policy specified for"));
    }
    let subject_categories = resolve(&data.subject_category, |id| store.list_entry(id));
    if subject_categories.is_empty() {
        hints.push(subject.hint(Severity::Warning, "No subject categories specified for"));
    }

    let detection = data.breach_detection.and_then(|id| store.breach_detection(id));
    let response = data.breach_response.and_then(|id| store.breach_response(id));
    let dpia = data.dpia.and_then(|id| store.dpia(id));
    if data.risk.is_mid_or_high() {
        if detection.is_none() {
            hints.push(subject.hint(
                Severity::Issue,
                "Mid/High inherent risk, but no data breach detection technology specified for",
            ));
        }
        if response.is_none() {
            hints.push(subject.hint(
                Severity::Issue,
                "Mid/High inherent risk, but no data breach response plan specified for",
            ));
        }
        if data.risk.is_high() && dpia.is_none() {
            hints.push(subject.hint(
                Severity::Issue,
                "Mid/High inherent risk, but no Data Protection Impact Assessment specified for",
            ));
        }
    } else if data.risk.is_unknown() {
        hints.push(subject.hint(Severity::Issue, "Unknown inherent risk level for"));
    }

    if let Some(policy) = management {
        hints.extend(management_policy_hints(walk, policy));
    }
    for category in subject_categories {
        hints.extend(list_entry_hints(walk, category));
    }
    if let Some(detection) = detection {
        let reference = EntityRef::BreachDetection(detection.id);
        if walk.first_visit(reference) {
            hints.extend(residual_risk_hints(
                &Subject::named(reference, &detection.named),
                detection,
                store.data_of_breach_detection(detection.id).len(),
                DETECTION_RISK,
            ));
        }
    }
    if let Some(response) = response {
        let reference = EntityRef::BreachResponse(response.id);
        if walk.first_visit(reference) {
            hints.extend(residual_risk_hints(
                &Subject::named(reference, &response.named),
                response,
                store.data_of_breach_response(response.id).len(),
                RESPONSE_RISK,
            ));
        }
    }
    if let Some(dpia) = dpia {
        hints.extend(document_hints(walk, EntityRef::Dpia(dpia.id), &dpia.document));
    }
    hints
}

// ─── Risk-bearing measures ───────────────────────────────────────────

/// Rules shared by management policies and breach plans. `mid_high` is
/// the kind-specific message for a mid or high residual risk.
fn residual_risk_hints(
    subject: &Subject,
    record: &dyn ResidualRisk,
    data_audits: usize,
    mid_high: &str,
) -> HintList {
    let mut hints = description_hints(subject, record.named());
    if record.residual_risk().is_unknown() {
        hints.push(subject.hint(Severity::Issue, "Unknown risk to personal data for"));
    }
    if data_audits == 0 {
        hints.push(subject.hint(Severity::Issue, "No data audit for"));
    }
    if record.risk_mitigation().trim().is_empty() {
        hints.push(subject.hint(
            Severity::Warning,
            "No description of risk mitigation measures for",
        ));
    }
    if record.residual_risk().is_mid_or_high() {
        hints.push(subject.hint(Severity::Issue, mid_high));
    }
    hints
}

fn management_policy_hints(walk: &mut Walk<'_>, policy: &DataManagementPolicy) -> HintList {
    let reference = EntityRef::ManagementPolicy(policy.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let store = walk.store;
    let subject = Subject::named(reference, &policy.named);
    let mut hints = residual_risk_hints(
        &subject,
        policy,
        store.data_of_policy(policy.id).len(),
        "Mid/high residual data management risk for",
    );
    if policy.retention.is_none() {
        hints.push(subject.hint(Severity::Issue, "No retention value specified for"));
    }
    let rights = policy.subject_rights.and_then(|id| store.subject_rights(id));
    if rights.is_none() {
        hints.push(subject.hint(
            Severity::Warning,
            "Missing description of the procedures adopted to safeguard the rights of data \
             subjects on",
        ));
    }
    if policy.subject_notification.trim().is_empty() {
        hints.push(subject.hint(
            Severity::Warning,
            "Missing description of the notification procedures to data subjects for",
        ));
    }

    if let Some(rights) = rights {
        hints.extend(document_hints(
            walk,
            EntityRef::SubjectRights(rights.id),
            &rights.document,
        ));
    }
    for contract in resolve(&policy.processor_contracts, |id| store.processor_contract(id)) {
        hints.extend(processor_contract_hints(walk, contract));
    }
    hints
}

// ─── Documents and lists ─────────────────────────────────────────────

fn processor_contract_hints(walk: &mut Walk<'_>, contract: &ProcessorContract) -> HintList {
    let store = walk.store;
    let mut hints = document_hints(
        walk,
        EntityRef::ProcessorContract(contract.id),
        &contract.document,
    );
    match store.third_party(contract.processor) {
        Some(processor) => hints.extend(third_party_hints(walk, processor)),
        None => tracing::debug!(processor = %contract.processor, "dangling reference treated as absent"),
    }
    hints
}

fn document_hints(walk: &mut Walk<'_>, reference: EntityRef, document: &PdfDocument) -> HintList {
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    description_hints(&Subject::named(reference, &document.named), &document.named)
}

fn list_entry_hints(walk: &mut Walk<'_>, entry: &ListEntry) -> HintList {
    let reference = EntityRef::ListEntry(entry.kind, entry.id);
    if !walk.first_visit(reference) {
        return HintList::new();
    }
    let subject = Subject {
        reference,
        name: entry.to_string(),
    };
    description_hints(&subject, &entry.named)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gdpr_core::{
        ActivityId, BusinessProcessId, DataAuditId, ListEntryId, OrganizationId, PolicyId, RiskLevel,
    };
    use gdpr_model::{
        BreachDetection, BreachResponse, DataSubjectRights, Dpia, InMemoryStore, ListKind,
        UserAccount,
    };

    const PDF: &[u8] = b"%PDF-1.4\n%%EOF\n";
    const DESC: &str = "Documented";

    /// A registry with one organization, process, activity and data audit,
    /// every record complete.
    struct Registry {
        store: InMemoryStore,
        org: OrganizationId,
        process: BusinessProcessId,
        activity: ActivityId,
        data: DataAuditId,
        policy: PolicyId,
    }

    fn list(store: &mut InMemoryStore, kind: ListKind, name: &str) -> ListEntryId {
        let mut entry = ListEntry::new(kind, name);
        entry.named.description = DESC.into();
        store.insert_list_entry(entry).unwrap()
    }

    fn complete_registry() -> Registry {
        let mut store = InMemoryStore::new();
        let category = list(&mut store, ListKind::DataCategory, "Employee records");
        let employees = list(&mut store, ListKind::DataSubjectCategory, "Employees");
        let purpose = list(&mut store, ListKind::ProcessingPurpose, "Payroll");
        let proc_type = list(&mut store, ListKind::ProcessingType, "Storage");
        let legal = list(&mut store, ListKind::LegalBasis, "Contract");

        let rights = store
            .insert_subject_rights(
                DataSubjectRights::upload(Named::new("Rights procedure", DESC), PDF).unwrap(),
            )
            .unwrap();
        let mut policy = DataManagementPolicy::new("HR retention");
        policy.named.description = DESC.into();
        policy.retention = Some(3650);
        policy.risk = RiskLevel::Low;
        policy.risk_mitigation = "Access control".into();
        policy.subject_rights = Some(rights);
        policy.subject_notification = "Privacy notice at hiring".into();
        let policy_id = store.insert_management_policy(policy).unwrap();

        let mut detection = BreachDetection::new("SIEM");
        detection.named.description = DESC.into();
        detection.risk = RiskLevel::Low;
        detection.risk_mitigation = "Alerting".into();
        let detection = store.insert_breach_detection(detection).unwrap();

        let mut response = BreachResponse::new("Incident plan");
        response.named.description = DESC.into();
        response.risk = RiskLevel::Low;
        response.risk_mitigation = "On-call rotation".into();
        let response = store.insert_breach_response(response).unwrap();

        let mut data = DataAudit::new("Salaries", category);
        data.named.description = DESC.into();
        data.subject_category.push(employees);
        data.risk = RiskLevel::Low;
        data.management = Some(policy_id);
        data.breach_detection = Some(detection);
        data.breach_response = Some(response);
        let data_id = store.insert_data_audit(data).unwrap();

        let mut activity = ProcessingActivity::new("Payroll run", purpose, proc_type, legal);
        activity.named.description = DESC.into();
        activity.start_date = NaiveDate::from_ymd_opt(2018, 5, 25);
        activity.technology = Some("ERP".into());
        activity.data_audit.push(data_id);
        let activity_id = store.insert_activity(activity).unwrap();

        let owner = store.insert_owner(BusinessOwner::new(UserAccount::new("hr-lead")));
        let mut process = BusinessProcess::new("Human Resources");
        process.named.description = DESC.into();
        process.owner = Some(owner);
        process.activities.push(activity_id);
        let process_id = store.insert_business_process(process).unwrap();

        let mut org = Organization::new("Acme");
        org.named.description = DESC.into();
        org.business.push(process_id);
        let org_id = store.insert_organization(org).unwrap();

        Registry {
            store,
            org: org_id,
            process: process_id,
            activity: activity_id,
            data: data_id,
            policy: policy_id,
        }
    }

    fn org_hints(registry: &Registry) -> HintList {
        collect_hints(&registry.store, &EntityRef::Organization(registry.org))
    }

    fn edit_data(registry: &mut Registry, f: impl FnOnce(&mut DataAudit)) {
        let mut data = registry.store.data_audit(registry.data).unwrap().clone();
        f(&mut data);
        registry.store.insert_data_audit(data).unwrap();
    }

    fn texts(hints: &HintList, severity: Severity) -> Vec<String> {
        hints.get(severity).iter().map(|h| h.text.clone()).collect()
    }

    // ── Baseline ─────────────────────────────────────────────────────

    #[test]
    fn test_complete_registry_has_no_hints() {
        let registry = complete_registry();
        let hints = org_hints(&registry);
        assert!(hints.is_empty(), "unexpected hints: {:?}", hints.flatten());
    }

    #[test]
    fn test_unknown_root_yields_empty_list() {
        let store = InMemoryStore::new();
        let hints = collect_hints(&store, &EntityRef::Organization(OrganizationId::new()));
        assert!(hints.is_empty());
    }

    // ── Descriptions ─────────────────────────────────────────────────

    #[test]
    fn test_missing_description_is_one_warning_per_record() {
        let mut registry = complete_registry();
        let mut process = registry.store.business_process(registry.process).unwrap().clone();
        process.named.description.clear();
        registry.store.insert_business_process(process).unwrap();
        let mut activity = registry.store.activity(registry.activity).unwrap().clone();
        activity.named.description = "  ".into();
        registry.store.insert_activity(activity).unwrap();

        let hints = org_hints(&registry);
        let warnings = hints.get(Severity::Warning);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].subject, Some(EntityRef::BusinessProcess(registry.process)));
        assert_eq!(warnings[1].subject, Some(EntityRef::Activity(registry.activity)));
        assert_eq!(
            warnings[0].message(),
            "Missing description on Business Process Human Resources"
        );
    }

    #[test]
    fn test_shared_data_audit_is_reported_once() {
        let mut registry = complete_registry();
        edit_data(&mut registry, |d| d.named.description.clear());
        let mut second = registry.store.activity(registry.activity).unwrap().clone();
        second.id = ActivityId::new();
        second.named.name = "Bonus run".into();
        let second = registry.store.insert_activity(second).unwrap();
        let mut process = registry.store.business_process(registry.process).unwrap().clone();
        process.activities.push(second);
        registry.store.insert_business_process(process).unwrap();

        let hints = org_hints(&registry);
        assert_eq!(
            hints.flatten(),
            vec![(
                Severity::Warning,
                "Missing description on Data Audit Salaries".to_string()
            )]
        );
    }

    #[test]
    fn test_shared_subject_category_is_reported_once() {
        let mut registry = complete_registry();
        let data = registry.store.data_audit(registry.data).unwrap().clone();
        let category = data.subject_category[0];
        let mut entry = registry.store.list_entry(category).unwrap().clone();
        entry.named.description.clear();
        registry.store.insert_list_entry(entry).unwrap();

        let mut other = data.clone();
        other.id = DataAuditId::new();
        other.named.name = "Bonuses".into();
        let other = registry.store.insert_data_audit(other).unwrap();
        let mut activity = registry.store.activity(registry.activity).unwrap().clone();
        activity.data_audit.push(other);
        registry.store.insert_activity(activity).unwrap();

        let warnings = org_hints(&registry).get(Severity::Warning).to_vec();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].subject,
            Some(EntityRef::ListEntry(ListKind::DataSubjectCategory, category))
        );
    }

    // ── Organizations ────────────────────────────────────────────────

    #[test]
    fn test_organization_without_processes_gets_one_suggestion() {
        let mut store = InMemoryStore::new();
        let mut org = Organization::new("Acme");
        org.named.description = DESC.into();
        let id = store.insert_organization(org).unwrap();
        let hints = collect_hints(&store, &EntityRef::Organization(id));
        assert_eq!(
            hints.flatten(),
            vec![(
                Severity::Suggestion,
                "Please insert at least one business process into Organization Acme".to_string()
            )]
        );
    }

    #[test]
    fn test_dpo_reason_follows_precedence() {
        let mut store = InMemoryStore::new();
        let mut org = Organization::new("City Council");
        org.named.description = DESC.into();
        org.monitoring = true;
        org.public_authority = true;
        let id = store.insert_organization(org.clone()).unwrap();
        let issues = texts(&collect_hints(&store, &EntityRef::Organization(id)), Severity::Issue);
        assert_eq!(issues, vec!["Public authorities must appoint a Data Protection Officer"]);

        org.public_authority = false;
        store.insert_organization(org.clone()).unwrap();
        let issues = texts(&collect_hints(&store, &EntityRef::Organization(id)), Severity::Issue);
        assert!(issues[0].starts_with("When systematic, large-scale monitoring"));

        let officer = store.insert_officer(DataProtectionOfficer::new(UserAccount::new("dpo")));
        org.officer = Some(officer);
        store.insert_organization(org).unwrap();
        let hints = collect_hints(&store, &EntityRef::Organization(id));
        assert!(hints.get(Severity::Issue).is_empty());
    }

    // ── Data audits ──────────────────────────────────────────────────

    #[test]
    fn test_high_risk_without_dpia_is_an_issue() {
        let mut registry = complete_registry();
        edit_data(&mut registry, |d| d.risk = RiskLevel::High);
        let issues = texts(&org_hints(&registry), Severity::Issue);
        assert_eq!(
            issues,
            vec!["Mid/High inherent risk, but no Data Protection Impact Assessment specified for"]
        );
    }

    #[test]
    fn test_linked_dpia_contributes_its_own_hints() {
        let mut registry = complete_registry();
        let dpia = registry
            .store
            .insert_dpia(Dpia::upload(Named::new("Payroll DPIA", ""), PDF).unwrap())
            .unwrap();
        edit_data(&mut registry, |d| {
            d.risk = RiskLevel::High;
            d.dpia = Some(dpia);
        });
        let hints = org_hints(&registry);
        assert!(hints.get(Severity::Issue).is_empty());
        let warnings = hints.get(Severity::Warning);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].subject, Some(EntityRef::Dpia(dpia)));
    }

    #[test]
    fn test_mid_risk_does_not_require_dpia() {
        let mut registry = complete_registry();
        edit_data(&mut registry, |d| {
            d.risk = RiskLevel::Mid;
            d.breach_detection = None;
        });
        let issues = texts(&org_hints(&registry), Severity::Issue);
        // The detection plan lost its only data audit, but it is no
        // longer reachable from the organization.
        assert_eq!(
            issues,
            vec!["Mid/High inherent risk, but no data breach detection technology specified for"]
        );
    }

    #[test]
    fn test_unknown_inherent_risk() {
        let mut registry = complete_registry();
        edit_data(&mut registry, |d| d.risk = RiskLevel::Unknown);
        let issues = texts(&org_hints(&registry), Severity::Issue);
        assert_eq!(issues, vec!["Unknown inherent risk level for"]);
    }

    #[test]
    fn test_dangling_policy_is_reported_as_missing() {
        let mut registry = complete_registry();
        let mut snapshot = registry.store.to_snapshot();
        snapshot.management_policies.clear();
        registry.store = InMemoryStore::from_snapshot(snapshot).unwrap();
        let issues = texts(&org_hints(&registry), Severity::Issue);
        assert_eq!(issues, vec!["No data management policy specified for"]);
    }

    // ── Risk-bearing measures ────────────────────────────────────────

    #[test]
    fn test_policy_rules_and_own_hints_first() {
        let mut registry = complete_registry();
        let mut policy = registry.store.management_policy(registry.policy).unwrap().clone();
        policy.risk = RiskLevel::High;
        policy.retention = None;
        policy.subject_rights = None;
        policy.subject_notification.clear();
        policy.risk_mitigation.clear();
        registry.store.insert_management_policy(policy).unwrap();

        let hints = collect_hints(&registry.store, &EntityRef::DataAudit(registry.data));
        assert_eq!(
            texts(&hints, Severity::Issue),
            vec![
                "Mid/high residual data management risk for",
                "No retention value specified for",
            ]
        );
        assert_eq!(
            texts(&hints, Severity::Warning),
            vec![
                "No description of risk mitigation measures for",
                "Missing description of the procedures adopted to safeguard the rights of data \
                 subjects on",
                "Missing description of the notification procedures to data subjects for",
            ]
        );
    }

    #[test]
    fn test_orphan_policy_has_no_data_audit() {
        let mut store = InMemoryStore::new();
        let mut policy = DataManagementPolicy::new("Orphan");
        policy.named.description = DESC.into();
        let id = store.insert_management_policy(policy).unwrap();
        let issues = texts(
            &collect_hints(&store, &EntityRef::ManagementPolicy(id)),
            Severity::Issue,
        );
        assert_eq!(
            issues,
            vec![
                "Unknown risk to personal data for",
                "No data audit for",
                "No retention value specified for",
            ]
        );
    }

    // ── Third parties ────────────────────────────────────────────────

    #[test]
    fn test_contract_reaches_third_party_safeguards() {
        let mut registry = complete_registry();
        let recipients = list(&mut registry.store, ListKind::RecipientCategory, "Cloud");
        let nature = {
            let mut entry = ListEntry::new(ListKind::TransferNature, "Standard clauses");
            entry.classification = "Art. 46".into();
            registry.store.insert_list_entry(entry).unwrap()
        };
        let mut processor = ThirdParty::new("Hosting Inc", recipients);
        processor.named.description = DESC.into();
        processor.contact.third_country = true;
        processor.third_country_transfer = Some(nature);
        let processor = registry.store.insert_third_party(processor).unwrap();
        let contract = ProcessorContract::upload(Named::new("DPA", DESC), PDF, processor).unwrap();
        let contract = registry.store.insert_processor_contract(contract).unwrap();

        let mut policy = registry.store.management_policy(registry.policy).unwrap().clone();
        policy.processor_contracts.push(contract);
        registry.store.insert_management_policy(policy).unwrap();

        let hints = org_hints(&registry);
        let flat = hints.flatten();
        assert_eq!(flat.len(), 2);
        assert_eq!(
            flat[0].1,
            "Missing description on Nature of Transfer to third-country/international \
             organization Art. 46 - Standard clauses"
        );
        assert!(flat[1].1.starts_with("No appropriate safeguards"));
    }

    // ── People ───────────────────────────────────────────────────────

    #[test]
    fn test_staff_dpo_and_idle_owner() {
        let mut store = InMemoryStore::new();
        let mut user = UserAccount::new("dpo");
        user.first_name = "Dana".into();
        user.last_name = "Poe".into();
        let mut officer = DataProtectionOfficer::new(user);
        officer.staff = true;
        let officer = store.insert_officer(officer);
        let owner = store.insert_owner(BusinessOwner::new(UserAccount::new("idle")));

        let dpo = collect_hints(&store, &EntityRef::Officer(officer));
        assert_eq!(dpo.get(Severity::Warning).len(), 1);
        assert!(dpo.flatten()[0].1.ends_with("Data Protection Officer (DPO) Dana Poe"));

        let owner = collect_hints(&store, &EntityRef::Owner(owner));
        assert_eq!(
            owner.flatten(),
            vec![(
                Severity::Issue,
                "No business process associated with Business Owner idle".to_string()
            )]
        );
    }
}
