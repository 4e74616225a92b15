//! # Record Store
//!
//! [`RecordStore`] is the read contract the hint engine and the report
//! renderer consume: per-kind lookups that return `None` for absent
//! records, iteration over the collections traversal starts from, and
//! backlink queries derived from the forward links.
//!
//! [`InMemoryStore`] implements it over insertion-ordered tables. Every
//! `insert_*` method runs the write-time rules of [`crate::validation`];
//! the read side never fails.

use std::collections::HashMap;
use std::hash::Hash;

use gdpr_core::{
    ActivityId, BreachDetectionId, BreachResponseId, BusinessProcessId, DataAuditId, DocumentId,
    ListEntryId, OfficerId, OrganizationId, OwnerId, PolicyId, ThirdPartyId, Timestamp,
};

use crate::data::DataAudit;
use crate::document::{
    ClassificationDocument, DataSubjectRights, Dpia, PdfDocument, ProcessorContract,
};
use crate::error::ModelError;
use crate::kind::EntityRef;
use crate::lists::{ListCatalog, ListEntry, ListKind, PopulateSummary};
use crate::organization::{BusinessOwner, DataProtectionOfficer, Organization, ThirdParty};
use crate::policy::{BreachDetection, BreachResponse, DataManagementPolicy};
use crate::process::{BusinessProcess, ProcessingActivity};
use crate::snapshot::RegistrySnapshot;
use crate::validation;

/// Iterator over borrowed records of one kind.
pub type Records<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// Read access to the registry records.
///
/// Lookups return `None` when the record does not exist; callers treat
/// that as an absent link, never as an error.
pub trait RecordStore {
    // ─── Lookups ─────────────────────────────────────────────────────

    fn organization(&self, id: OrganizationId) -> Option<&Organization>;
    fn third_party(&self, id: ThirdPartyId) -> Option<&ThirdParty>;
    fn officer(&self, id: OfficerId) -> Option<&DataProtectionOfficer>;
    fn owner(&self, id: OwnerId) -> Option<&BusinessOwner>;
    fn business_process(&self, id: BusinessProcessId) -> Option<&BusinessProcess>;
    fn activity(&self, id: ActivityId) -> Option<&ProcessingActivity>;
    fn data_audit(&self, id: DataAuditId) -> Option<&DataAudit>;
    fn management_policy(&self, id: PolicyId) -> Option<&DataManagementPolicy>;
    fn breach_detection(&self, id: BreachDetectionId) -> Option<&BreachDetection>;
    fn breach_response(&self, id: BreachResponseId) -> Option<&BreachResponse>;
    fn dpia(&self, id: DocumentId) -> Option<&Dpia>;
    fn subject_rights(&self, id: DocumentId) -> Option<&DataSubjectRights>;
    fn processor_contract(&self, id: DocumentId) -> Option<&ProcessorContract>;
    fn classification_document(&self, id: DocumentId) -> Option<&ClassificationDocument>;
    fn list_entry(&self, id: ListEntryId) -> Option<&ListEntry>;

    // ─── Iteration (insertion order) ─────────────────────────────────

    fn organizations(&self) -> Records<'_, Organization>;
    fn third_parties(&self) -> Records<'_, ThirdParty>;
    fn business_processes(&self) -> Records<'_, BusinessProcess>;
    fn activities(&self) -> Records<'_, ProcessingActivity>;
    fn data_audits(&self) -> Records<'_, DataAudit>;
    fn management_policies(&self) -> Records<'_, DataManagementPolicy>;
    fn breach_detections(&self) -> Records<'_, BreachDetection>;
    fn breach_responses(&self) -> Records<'_, BreachResponse>;
    fn dpias(&self) -> Records<'_, Dpia>;
    fn subject_rights_documents(&self) -> Records<'_, DataSubjectRights>;
    fn processor_contracts(&self) -> Records<'_, ProcessorContract>;
    fn classification_documents(&self) -> Records<'_, ClassificationDocument>;
    fn list_entries(&self) -> Records<'_, ListEntry>;

    /// Every uploaded document of every kind, with its reference.
    fn documents(&self) -> Vec<(EntityRef, &PdfDocument)> {
        let mut documents: Vec<(EntityRef, &PdfDocument)> = self
            .dpias()
            .map(|d| (EntityRef::Dpia(d.id), &d.document))
            .collect();
        documents.extend(
            self.subject_rights_documents()
                .map(|d| (EntityRef::SubjectRights(d.id), &d.document)),
        );
        documents.extend(
            self.processor_contracts()
                .map(|d| (EntityRef::ProcessorContract(d.id), &d.document)),
        );
        documents.extend(
            self.classification_documents()
                .map(|d| (EntityRef::ClassificationDocument(d.id), &d.document)),
        );
        documents
    }

    // ─── Backlinks ───────────────────────────────────────────────────

    /// Organizations whose business processes include `id`.
    fn organizations_of_process(&self, id: BusinessProcessId) -> Vec<&Organization> {
        self.organizations()
            .filter(|o| o.business.contains(&id))
            .collect()
    }

    /// Business processes whose activities include `id`.
    fn processes_of_activity(&self, id: ActivityId) -> Vec<&BusinessProcess> {
        self.business_processes()
            .filter(|p| p.activities.contains(&id))
            .collect()
    }

    /// Business processes owned by `id`.
    fn processes_of_owner(&self, id: OwnerId) -> Vec<&BusinessProcess> {
        self.business_processes()
            .filter(|p| p.owner == Some(id))
            .collect()
    }

    /// Processing activities that handle the data audit `id`.
    fn activities_of_data(&self, id: DataAuditId) -> Vec<&ProcessingActivity> {
        self.activities()
            .filter(|a| a.data_audit.contains(&id))
            .collect()
    }

    /// Data audits managed by the policy `id`.
    fn data_of_policy(&self, id: PolicyId) -> Vec<&DataAudit> {
        self.data_audits()
            .filter(|d| d.management == Some(id))
            .collect()
    }

    /// Data audits covered by the detection plan `id`.
    fn data_of_breach_detection(&self, id: BreachDetectionId) -> Vec<&DataAudit> {
        self.data_audits()
            .filter(|d| d.breach_detection == Some(id))
            .collect()
    }

    /// Data audits covered by the response plan `id`.
    fn data_of_breach_response(&self, id: BreachResponseId) -> Vec<&DataAudit> {
        self.data_audits()
            .filter(|d| d.breach_response == Some(id))
            .collect()
    }

    // ─── References ──────────────────────────────────────────────────

    /// Whether the referenced record exists.
    fn contains(&self, subject: &EntityRef) -> bool {
        self.display_name(subject).is_some()
    }

    /// Display name of the referenced record, or `None` when absent.
    fn display_name(&self, subject: &EntityRef) -> Option<String> {
        match *subject {
            EntityRef::Organization(id) => self.organization(id).map(|r| r.named.name.clone()),
            EntityRef::ThirdParty(id) => self.third_party(id).map(|r| r.named.name.clone()),
            EntityRef::Officer(id) => self.officer(id).map(|r| r.user.display_name()),
            EntityRef::Owner(id) => self.owner(id).map(|r| r.user.display_name()),
            EntityRef::BusinessProcess(id) => {
                self.business_process(id).map(|r| r.named.name.clone())
            }
            EntityRef::Activity(id) => self.activity(id).map(|r| r.named.name.clone()),
            EntityRef::DataAudit(id) => self.data_audit(id).map(|r| r.named.name.clone()),
            EntityRef::ManagementPolicy(id) => {
                self.management_policy(id).map(|r| r.named.name.clone())
            }
            EntityRef::BreachDetection(id) => {
                self.breach_detection(id).map(|r| r.named.name.clone())
            }
            EntityRef::BreachResponse(id) => self.breach_response(id).map(|r| r.named.name.clone()),
            EntityRef::Dpia(id) => self.dpia(id).map(|r| r.document.named.name.clone()),
            EntityRef::SubjectRights(id) => {
                self.subject_rights(id).map(|r| r.document.named.name.clone())
            }
            EntityRef::ProcessorContract(id) => self
                .processor_contract(id)
                .map(|r| r.document.named.name.clone()),
            EntityRef::ClassificationDocument(id) => self
                .classification_document(id)
                .map(|r| r.document.named.name.clone()),
            EntityRef::ListEntry(_, id) => self.list_entry(id).map(ToString::to_string),
        }
    }
}

// ─── Table ───────────────────────────────────────────────────────────

/// Insertion-ordered keyed collection. Replacing a key keeps its position.
#[derive(Debug, Clone)]
pub struct Table<K, V> {
    rows: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash, V> Table<K, V> {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.rows[pos], value)),
            None => {
                self.index.insert(key, self.rows.len());
                self.rows.push(value);
                None
            }
        }
    }

    pub fn get(&self, key: K) -> Option<&V> {
        self.index.get(&key).map(|&pos| &self.rows[pos])
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.index.get(&key).map(|&pos| &mut self.rows[pos])
    }

    pub fn contains(&self, key: K) -> bool {
        self.index.contains_key(&key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K: Copy + Eq + Hash, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── In-memory store ─────────────────────────────────────────────────

/// The registry held in memory, one [`Table`] per record kind.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    organizations: Table<OrganizationId, Organization>,
    third_parties: Table<ThirdPartyId, ThirdParty>,
    officers: Table<OfficerId, DataProtectionOfficer>,
    owners: Table<OwnerId, BusinessOwner>,
    business_processes: Table<BusinessProcessId, BusinessProcess>,
    activities: Table<ActivityId, ProcessingActivity>,
    data_audits: Table<DataAuditId, DataAudit>,
    management_policies: Table<PolicyId, DataManagementPolicy>,
    breach_detections: Table<BreachDetectionId, BreachDetection>,
    breach_responses: Table<BreachResponseId, BreachResponse>,
    dpias: Table<DocumentId, Dpia>,
    subject_rights: Table<DocumentId, DataSubjectRights>,
    processor_contracts: Table<DocumentId, ProcessorContract>,
    classification_documents: Table<DocumentId, ClassificationDocument>,
    list_entries: Table<ListEntryId, ListEntry>,
}

/// Turn collected validation failures into the first error, if any.
fn first_error(errors: Vec<ModelError>) -> Result<(), ModelError> {
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

impl InMemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Writes ──────────────────────────────────────────────────────

    /// Insert or replace a list entry. Names are unique per list kind.
    pub fn insert_list_entry(&mut self, entry: ListEntry) -> Result<ListEntryId, ModelError> {
        first_error(validation::check_list_entry(self, &entry))?;
        let id = entry.id;
        self.list_entries.insert(id, entry);
        Ok(id)
    }

    /// Insert or replace a third-party organization.
    pub fn insert_third_party(&mut self, third_party: ThirdParty) -> Result<ThirdPartyId, ModelError> {
        first_error(validation::check_third_party(self, &third_party))?;
        let id = third_party.id;
        self.third_parties.insert(id, third_party);
        Ok(id)
    }

    /// Insert or replace a Data Protection Officer.
    pub fn insert_officer(&mut self, officer: DataProtectionOfficer) -> OfficerId {
        let id = officer.id;
        self.officers.insert(id, officer);
        id
    }

    /// Insert or replace a business owner.
    pub fn insert_owner(&mut self, owner: BusinessOwner) -> OwnerId {
        let id = owner.id;
        self.owners.insert(id, owner);
        id
    }

    /// Insert or replace an organization. Its business processes must not
    /// belong to another organization.
    pub fn insert_organization(
        &mut self,
        organization: Organization,
    ) -> Result<OrganizationId, ModelError> {
        first_error(validation::check_organization(self, &organization))?;
        let id = organization.id;
        self.organizations.insert(id, organization);
        Ok(id)
    }

    /// Insert or replace a business process. Its activities must not
    /// belong to another process.
    pub fn insert_business_process(
        &mut self,
        process: BusinessProcess,
    ) -> Result<BusinessProcessId, ModelError> {
        first_error(validation::check_business_process(self, &process))?;
        let id = process.id;
        self.business_processes.insert(id, process);
        Ok(id)
    }

    /// Insert or replace a processing activity.
    pub fn insert_activity(
        &mut self,
        activity: ProcessingActivity,
    ) -> Result<ActivityId, ModelError> {
        first_error(validation::check_activity(self, &activity))?;
        let id = activity.id;
        self.activities.insert(id, activity);
        Ok(id)
    }

    /// Insert or replace a data audit.
    pub fn insert_data_audit(&mut self, data: DataAudit) -> Result<DataAuditId, ModelError> {
        first_error(validation::check_data_audit(self, &data))?;
        let id = data.id;
        self.data_audits.insert(id, data);
        Ok(id)
    }

    /// Insert or replace a data management policy.
    pub fn insert_management_policy(
        &mut self,
        policy: DataManagementPolicy,
    ) -> Result<PolicyId, ModelError> {
        first_error(validation::check_management_policy(self, &policy))?;
        let id = policy.id;
        self.management_policies.insert(id, policy);
        Ok(id)
    }

    /// Insert or replace a breach detection plan.
    pub fn insert_breach_detection(
        &mut self,
        detection: BreachDetection,
    ) -> Result<BreachDetectionId, ModelError> {
        first_error(validation::check_breach_detection(self, &detection))?;
        let id = detection.id;
        self.breach_detections.insert(id, detection);
        Ok(id)
    }

    /// Insert or replace a breach response plan.
    pub fn insert_breach_response(
        &mut self,
        response: BreachResponse,
    ) -> Result<BreachResponseId, ModelError> {
        first_error(validation::check_breach_response(self, &response))?;
        let id = response.id;
        self.breach_responses.insert(id, response);
        Ok(id)
    }

    /// Insert or replace a DPIA. Document names are unique across every
    /// document kind, since the name is the storage path.
    pub fn insert_dpia(&mut self, dpia: Dpia) -> Result<DocumentId, ModelError> {
        let id = dpia.id;
        first_error(validation::check_document(self, EntityRef::Dpia(id), &dpia.document))?;
        self.dpias.insert(id, dpia);
        Ok(id)
    }

    /// Insert or replace a subject-rights document.
    pub fn insert_subject_rights(
        &mut self,
        document: DataSubjectRights,
    ) -> Result<DocumentId, ModelError> {
        let id = document.id;
        let reference = EntityRef::SubjectRights(id);
        first_error(validation::check_document(self, reference, &document.document))?;
        self.subject_rights.insert(id, document);
        Ok(id)
    }

    /// Insert or replace a processor contract.
    pub fn insert_processor_contract(
        &mut self,
        contract: ProcessorContract,
    ) -> Result<DocumentId, ModelError> {
        first_error(validation::check_processor_contract(self, &contract))?;
        let id = contract.id;
        self.processor_contracts.insert(id, contract);
        Ok(id)
    }

    /// Insert or replace a classification document.
    pub fn insert_classification_document(
        &mut self,
        document: ClassificationDocument,
    ) -> Result<DocumentId, ModelError> {
        let id = document.id;
        let reference = EntityRef::ClassificationDocument(id);
        first_error(validation::check_document(self, reference, &document.document))?;
        self.classification_documents.insert(id, document);
        Ok(id)
    }

    // ─── Whole-store operations ──────────────────────────────────────

    /// Run every write-time rule against the whole store.
    ///
    /// Snapshots are loaded without these checks (records may reference
    /// each other in any order), so callers validate after loading.
    pub fn validate(&self) -> Vec<ModelError> {
        let mut errors = Vec::new();
        for entry in self.list_entries.iter() {
            errors.extend(validation::check_list_entry(self, entry));
        }
        for third_party in self.third_parties.iter() {
            errors.extend(validation::check_third_party(self, third_party));
        }
        for (reference, document) in self.documents() {
            if !matches!(reference, EntityRef::ProcessorContract(_)) {
                errors.extend(validation::check_document(self, reference, document));
            }
        }
        for contract in self.processor_contracts.iter() {
            errors.extend(validation::check_processor_contract(self, contract));
        }
        for policy in self.management_policies.iter() {
            errors.extend(validation::check_management_policy(self, policy));
        }
        for detection in self.breach_detections.iter() {
            errors.extend(validation::check_breach_detection(self, detection));
        }
        for response in self.breach_responses.iter() {
            errors.extend(validation::check_breach_response(self, response));
        }
        for data in self.data_audits.iter() {
            errors.extend(validation::check_data_audit(self, data));
        }
        for activity in self.activities.iter() {
            errors.extend(validation::check_activity(self, activity));
        }
        for process in self.business_processes.iter() {
            errors.extend(validation::check_business_process(self, process));
        }
        for organization in self.organizations.iter() {
            errors.extend(validation::check_organization(self, organization));
        }
        tracing::debug!(errors = errors.len(), "validated record store");
        errors
    }

    /// Upsert the predefined list entries of a catalog, matching existing
    /// entries by kind and name. New entries take the catalog
    /// classification; existing ones keep theirs.
    pub fn populate_lists(&mut self, catalog: &ListCatalog) -> PopulateSummary {
        for title in catalog.unknown_sections() {
            tracing::warn!(section = title, "skipping unknown catalog section");
        }
        let mut summary = PopulateSummary::default();
        for kind in ListKind::ALL {
            let Some(section) = catalog.section(kind) else {
                continue;
            };
            for (classification, entries) in section {
                for catalog_entry in entries {
                    match self.find_list_entry(kind, &catalog_entry.name) {
                        Some(id) => {
                            if let Some(entry) = self.list_entries.get_mut(id) {
                                catalog_entry.apply_to(entry);
                                entry.named.last_update = Timestamp::now();
                                summary.updated += 1;
                            }
                        }
                        None => {
                            let mut entry = ListEntry::new(kind, catalog_entry.name.clone());
                            entry.classification = classification.clone();
                            catalog_entry.apply_to(&mut entry);
                            self.list_entries.insert(entry.id, entry);
                            summary.created += 1;
                        }
                    }
                }
            }
        }
        tracing::info!(
            created = summary.created,
            updated = summary.updated,
            "populated reference lists"
        );
        summary
    }

    /// The entry of `kind` named `name`, if any.
    pub fn find_list_entry(&self, kind: ListKind, name: &str) -> Option<ListEntryId> {
        self.list_entries
            .iter()
            .find(|e| e.kind == kind && e.named.name == name)
            .map(|e| e.id)
    }

    /// Number of records of every kind.
    pub fn len(&self) -> usize {
        self.organizations.len()
            + self.third_parties.len()
            + self.officers.len()
            + self.owners.len()
            + self.business_processes.len()
            + self.activities.len()
            + self.data_audits.len()
            + self.management_policies.len()
            + self.breach_detections.len()
            + self.breach_responses.len()
            + self.dpias.len()
            + self.subject_rights.len()
            + self.processor_contracts.len()
            + self.classification_documents.len()
            + self.list_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ─── Snapshots ───────────────────────────────────────────────────

    /// Build a store from a snapshot, keeping each collection's order.
    ///
    /// Only identifier uniqueness is enforced here; run
    /// [`validate`](Self::validate) for the cross-record rules.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, ModelError> {
        let mut store = Self::new();
        load(&mut store.organizations, snapshot.organizations, "organization", |r| r.id)?;
        load(&mut store.third_parties, snapshot.third_parties, "third party", |r| r.id)?;
        load(&mut store.officers, snapshot.officers, "officer", |r| r.id)?;
        load(&mut store.owners, snapshot.owners, "business owner", |r| r.id)?;
        load(
            &mut store.business_processes,
            snapshot.business_processes,
            "business process",
            |r| r.id,
        )?;
        load(&mut store.activities, snapshot.activities, "processing activity", |r| r.id)?;
        load(&mut store.data_audits, snapshot.data_audits, "data audit", |r| r.id)?;
        load(
            &mut store.management_policies,
            snapshot.management_policies,
            "management policy",
            |r| r.id,
        )?;
        load(
            &mut store.breach_detections,
            snapshot.breach_detections,
            "breach detection",
            |r| r.id,
        )?;
        load(
            &mut store.breach_responses,
            snapshot.breach_responses,
            "breach response",
            |r| r.id,
        )?;
        load(&mut store.dpias, snapshot.dpias, "DPIA", |r| r.id)?;
        load(
            &mut store.subject_rights,
            snapshot.subject_rights,
            "subject rights document",
            |r| r.id,
        )?;
        load(
            &mut store.processor_contracts,
            snapshot.processor_contracts,
            "processor contract",
            |r| r.id,
        )?;
        load(
            &mut store.classification_documents,
            snapshot.classification_documents,
            "classification document",
            |r| r.id,
        )?;
        load(&mut store.list_entries, snapshot.list_entries, "list entry", |r| r.id)?;
        tracing::info!(records = store.len(), "loaded registry snapshot");
        Ok(store)
    }

    /// Copy every record into a snapshot, in insertion order.
    pub fn to_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            organizations: self.organizations.iter().cloned().collect(),
            third_parties: self.third_parties.iter().cloned().collect(),
            officers: self.officers.iter().cloned().collect(),
            owners: self.owners.iter().cloned().collect(),
            business_processes: self.business_processes.iter().cloned().collect(),
            activities: self.activities.iter().cloned().collect(),
            data_audits: self.data_audits.iter().cloned().collect(),
            management_policies: self.management_policies.iter().cloned().collect(),
            breach_detections: self.breach_detections.iter().cloned().collect(),
            breach_responses: self.breach_responses.iter().cloned().collect(),
            dpias: self.dpias.iter().cloned().collect(),
            subject_rights: self.subject_rights.iter().cloned().collect(),
            processor_contracts: self.processor_contracts.iter().cloned().collect(),
            classification_documents: self.classification_documents.iter().cloned().collect(),
            list_entries: self.list_entries.iter().cloned().collect(),
        }
    }
}

fn load<K, V>(
    table: &mut Table<K, V>,
    rows: Vec<V>,
    kind: &'static str,
    key: impl Fn(&V) -> K,
) -> Result<(), ModelError>
where
    K: Copy + Eq + Hash + std::fmt::Display,
{
    for row in rows {
        let id = key(&row);
        if table.insert(id, row).is_some() {
            return Err(ModelError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl RecordStore for InMemoryStore {
    fn organization(&self, id: OrganizationId) -> Option<&Organization> {
        self.organizations.get(id)
    }
    fn third_party(&self, id: ThirdPartyId) -> Option<&ThirdParty> {
        self.third_parties.get(id)
    }
    fn officer(&self, id: OfficerId) -> Option<&DataProtectionOfficer> {
        self.officers.get(id)
    }
    fn owner(&self, id: OwnerId) -> Option<&BusinessOwner> {
        self.owners.get(id)
    }
    fn business_process(&self, id: BusinessProcessId) -> Option<&BusinessProcess> {
        self.business_processes.get(id)
    }
    fn activity(&self, id: ActivityId) -> Option<&ProcessingActivity> {
        self.activities.get(id)
    }
    fn data_audit(&self, id: DataAuditId) -> Option<&DataAudit> {
        self.data_audits.get(id)
    }
    fn management_policy(&self, id: PolicyId) -> Option<&DataManagementPolicy> {
        self.management_policies.get(id)
    }
    fn breach_detection(&self, id: BreachDetectionId) -> Option<&BreachDetection> {
        self.breach_detections.get(id)
    }
    fn breach_response(&self, id: BreachResponseId) -> Option<&BreachResponse> {
        self.breach_responses.get(id)
    }
    fn dpia(&self, id: DocumentId) -> Option<&Dpia> {
        self.dpias.get(id)
    }
    fn subject_rights(&self, id: DocumentId) -> Option<&DataSubjectRights> {
        self.subject_rights.get(id)
    }
    fn processor_contract(&self, id: DocumentId) -> Option<&ProcessorContract> {
        self.processor_contracts.get(id)
    }
    fn classification_document(&self, id: DocumentId) -> Option<&ClassificationDocument> {
        self.classification_documents.get(id)
    }
    fn list_entry(&self, id: ListEntryId) -> Option<&ListEntry> {
        self.list_entries.get(id)
    }

    fn organizations(&self) -> Records<'_, Organization> {
        Box::new(self.organizations.iter())
    }
    fn third_parties(&self) -> Records<'_, ThirdParty> {
        Box::new(self.third_parties.iter())
    }
    fn business_processes(&self) -> Records<'_, BusinessProcess> {
        Box::new(self.business_processes.iter())
    }
    fn activities(&self) -> Records<'_, ProcessingActivity> {
        Box::new(self.activities.iter())
    }
    fn data_audits(&self) -> Records<'_, DataAudit> {
        Box::new(self.data_audits.iter())
    }
    fn management_policies(&self) -> Records<'_, DataManagementPolicy> {
        Box::new(self.management_policies.iter())
    }
    fn breach_detections(&self) -> Records<'_, BreachDetection> {
        Box::new(self.breach_detections.iter())
    }
    fn breach_responses(&self) -> Records<'_, BreachResponse> {
        Box::new(self.breach_responses.iter())
    }
    fn dpias(&self) -> Records<'_, Dpia> {
        Box::new(self.dpias.iter())
    }
    fn subject_rights_documents(&self) -> Records<'_, DataSubjectRights> {
        Box::new(self.subject_rights.iter())
    }
    fn processor_contracts(&self) -> Records<'_, ProcessorContract> {
        Box::new(self.processor_contracts.iter())
    }
    fn classification_documents(&self) -> Records<'_, ClassificationDocument> {
        Box::new(self.classification_documents.iter())
    }
    fn list_entries(&self) -> Records<'_, ListEntry> {
        Box::new(self.list_entries.iter())
    }
}
