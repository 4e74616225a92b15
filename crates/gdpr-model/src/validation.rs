//! # Write-time Validation
//!
//! Rules checked before a record enters the store:
//!
//! - references point at existing records;
//! - list references point at an entry of the right list;
//! - record names are unique per kind, list entry names per list, and
//!   document names across every document kind (the name is the file path);
//! - a processing activity belongs to at most one business process, and a
//!   business process to at most one organization;
//! - a nature of transfer is only set on a third party that resides in a
//!   third country or is an international organization.
//!
//! Each `check_*` function returns every violation it finds; the store's
//! insert methods reject on the first one.

use gdpr_core::{ListEntryId, Named};

use crate::data::DataAudit;
use crate::document::{PdfDocument, ProcessorContract};
use crate::error::ModelError;
use crate::kind::{EntityKind, EntityRef};
use crate::lists::{ListEntry, ListKind};
use crate::organization::{Organization, ThirdParty};
use crate::policy::{BreachDetection, BreachResponse, DataManagementPolicy};
use crate::process::{BusinessProcess, ProcessingActivity};
use crate::store::RecordStore;

fn dangling(from: &str, field: &'static str, to: impl ToString) -> ModelError {
    ModelError::DanglingReference {
        from: from.to_string(),
        field,
        to: to.to_string(),
    }
}

/// Push a [`ModelError::DuplicateName`] when a record other than `id`
/// among `others` carries the same name.
fn check_name<'a, I: PartialEq>(
    errors: &mut Vec<ModelError>,
    kind: EntityKind,
    id: I,
    named: &Named,
    mut others: impl Iterator<Item = (I, &'a Named)>,
) {
    if others.any(|(other, n)| other != id && n.name == named.name) {
        errors.push(ModelError::DuplicateName {
            kind,
            name: named.name.clone(),
        });
    }
}

fn check_list_ref(
    store: &dyn RecordStore,
    errors: &mut Vec<ModelError>,
    from: &str,
    field: &'static str,
    id: ListEntryId,
    expected: ListKind,
) {
    match store.list_entry(id) {
        None => errors.push(dangling(from, field, id)),
        Some(entry) if entry.kind != expected => errors.push(ModelError::WrongListKind {
            field,
            expected,
            found: entry.kind,
        }),
        Some(_) => {}
    }
}

/// Name uniqueness within the list, and the classification document link.
pub fn check_list_entry(store: &dyn RecordStore, entry: &ListEntry) -> Vec<ModelError> {
    let mut errors = Vec::new();
    check_name(
        &mut errors,
        EntityKind::List(entry.kind),
        entry.id,
        &entry.named,
        store
            .list_entries()
            .filter(|e| e.kind == entry.kind)
            .map(|e| (e.id, &e.named)),
    );
    if let Some(doc) = entry.document {
        if store.classification_document(doc).is_none() {
            errors.push(dangling(&entry.named.name, "document", doc));
        }
    }
    errors
}

/// Recipient category, and the third-country rule for transfer natures.
pub fn check_third_party(store: &dyn RecordStore, third_party: &ThirdParty) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let from = third_party.named.name.as_str();
    check_name(
        &mut errors,
        EntityKind::ThirdParty,
        third_party.id,
        &third_party.named,
        store.third_parties().map(|t| (t.id, &t.named)),
    );
    check_list_ref(
        store,
        &mut errors,
        from,
        "category",
        third_party.category,
        ListKind::RecipientCategory,
    );
    if let Some(transfer) = third_party.third_country_transfer {
        if !(third_party.contact.third_country || third_party.contact.international) {
            errors.push(ModelError::TransferWithoutThirdCountry {
                third_party: from.to_string(),
            });
        }
        check_list_ref(
            store,
            &mut errors,
            from,
            "third_country_transfer",
            transfer,
            ListKind::TransferNature,
        );
    }
    errors
}

pub fn check_organization(store: &dyn RecordStore, organization: &Organization) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let from = organization.named.name.as_str();
    check_name(
        &mut errors,
        EntityKind::Organization,
        organization.id,
        &organization.named,
        store.organizations().map(|o| (o.id, &o.named)),
    );
    if let Some(officer) = organization.officer {
        if store.officer(officer).is_none() {
            errors.push(dangling(from, "officer", officer));
        }
    }
    for &process_id in &organization.business {
        let Some(process) = store.business_process(process_id) else {
            errors.push(dangling(from, "business", process_id));
            continue;
        };
        let other = store
            .organizations_of_process(process_id)
            .into_iter()
            .find(|o| o.id != organization.id);
        if let Some(other) = other {
            errors.push(ModelError::ProcessAlreadyAssigned {
                process: process.named.name.clone(),
                organization: other.named.name.clone(),
            });
        }
    }
    errors
}

pub fn check_business_process(store: &dyn RecordStore, process: &BusinessProcess) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let from = process.named.name.as_str();
    check_name(
        &mut errors,
        EntityKind::BusinessProcess,
        process.id,
        &process.named,
        store.business_processes().map(|p| (p.id, &p.named)),
    );
    if let Some(owner) = process.owner {
        if store.owner(owner).is_none() {
            errors.push(dangling(from, "owner", owner));
        }
    }
    for &activity_id in &process.activities {
        let Some(activity) = store.activity(activity_id) else {
            errors.push(dangling(from, "activities", activity_id));
            continue;
        };
        let other = store
            .processes_of_activity(activity_id)
            .into_iter()
            .find(|p| p.id != process.id);
        if let Some(other) = other {
            errors.push(ModelError::ActivityAlreadyAssigned {
                activity: activity.named.name.clone(),
                process: other.named.name.clone(),
            });
        }
    }
    errors
}

pub fn check_activity(store: &dyn RecordStore, activity: &ProcessingActivity) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let from = activity.named.name.as_str();
    check_name(
        &mut errors,
        EntityKind::Activity,
        activity.id,
        &activity.named,
        store.activities().map(|a| (a.id, &a.named)),
    );
    check_list_ref(store, &mut errors, from, "purpose", activity.purpose, ListKind::ProcessingPurpose);
    check_list_ref(store, &mut errors, from, "proc_type", activity.proc_type, ListKind::ProcessingType);
    check_list_ref(store, &mut errors, from, "legal", activity.legal, ListKind::LegalBasis);
    if let Some(level) = activity.classification {
        check_list_ref(
            store,
            &mut errors,
            from,
            "classification",
            level,
            ListKind::ClassificationLevel,
        );
    }
    for &data in &activity.data_audit {
        if store.data_audit(data).is_none() {
            errors.push(dangling(from, "data_audit", data));
        }
    }
    if let Some(alternate) = activity.alternate_activity {
        if alternate != activity.id && store.activity(alternate).is_none() {
            errors.push(dangling(from, "alternate_activity", alternate));
        }
    }
    errors
}

pub fn check_data_audit(store: &dyn RecordStore, data: &DataAudit) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let from = data.named.name.as_str();
    check_name(
        &mut errors,
        EntityKind::DataAudit,
        data.id,
        &data.named,
        store.data_audits().map(|d| (d.id, &d.named)),
    );
    check_list_ref(store, &mut errors, from, "category", data.category, ListKind::DataCategory);
    for &subject in &data.subject_category {
        check_list_ref(
            store,
            &mut errors,
            from,
            "subject_category",
            subject,
            ListKind::DataSubjectCategory,
        );
    }
    if let Some(policy) = data.management {
        if store.management_policy(policy).is_none() {
            errors.push(dangling(from, "management", policy));
        }
    }
    if let Some(detection) = data.breach_detection {
        if store.breach_detection(detection).is_none() {
            errors.push(dangling(from, "breach_detection", detection));
        }
    }
    if let Some(response) = data.breach_response {
        if store.breach_response(response).is_none() {
            errors.push(dangling(from, "breach_response", response));
        }
    }
    if let Some(dpia) = data.dpia {
        if store.dpia(dpia).is_none() {
            errors.push(dangling(from, "dpia", dpia));
        }
    }
    errors
}

pub fn check_management_policy(
    store: &dyn RecordStore,
    policy: &DataManagementPolicy,
) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let from = policy.named.name.as_str();
    check_name(
        &mut errors,
        EntityKind::ManagementPolicy,
        policy.id,
        &policy.named,
        store.management_policies().map(|p| (p.id, &p.named)),
    );
    for &contract in &policy.processor_contracts {
        if store.processor_contract(contract).is_none() {
            errors.push(dangling(from, "processor_contracts", contract));
        }
    }
    if let Some(rights) = policy.subject_rights {
        if store.subject_rights(rights).is_none() {
            errors.push(dangling(from, "subject_rights", rights));
        }
    }
    errors
}

pub fn check_breach_detection(store: &dyn RecordStore, detection: &BreachDetection) -> Vec<ModelError> {
    let mut errors = Vec::new();
    check_name(
        &mut errors,
        EntityKind::BreachDetection,
        detection.id,
        &detection.named,
        store.breach_detections().map(|d| (d.id, &d.named)),
    );
    errors
}

pub fn check_breach_response(store: &dyn RecordStore, response: &BreachResponse) -> Vec<ModelError> {
    let mut errors = Vec::new();
    check_name(
        &mut errors,
        EntityKind::BreachResponse,
        response.id,
        &response.named,
        store.breach_responses().map(|r| (r.id, &r.named)),
    );
    errors
}

/// Two documents of any kind with the same name would share a file.
pub fn check_document(
    store: &dyn RecordStore,
    reference: EntityRef,
    document: &PdfDocument,
) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let documents = store.documents();
    check_name(
        &mut errors,
        reference.kind(),
        reference,
        &document.named,
        documents.iter().map(|(other, d)| (*other, &d.named)),
    );
    errors
}

pub fn check_processor_contract(
    store: &dyn RecordStore,
    contract: &ProcessorContract,
) -> Vec<ModelError> {
    let mut errors = check_document(
        store,
        EntityRef::ProcessorContract(contract.id),
        &contract.document,
    );
    if store.third_party(contract.processor).is_none() {
        errors.push(dangling(
            &contract.document.named.name,
            "processor",
            contract.processor,
        ));
    }
    errors
}
