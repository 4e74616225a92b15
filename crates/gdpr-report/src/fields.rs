//! # Field Descriptors
//!
//! Each record kind shown in the report declares the fields it renders, in
//! display order, as a static list of [`FieldDescriptor`]s. A descriptor
//! pairs a field name (used for per-table exclusions) with a sentence-case
//! label and a value extractor. The record id is never a descriptor.

use gdpr_core::{DocumentId, ListEntryId};
use gdpr_model::{
    BreachDetection, BreachResponse, BusinessProcess, DataAudit, DataManagementPolicy,
    DataProtectionOfficer, Dpia, ListEntry, ListKind, Organization, PdfDocument,
    ProcessingActivity, ProcessorContract, RecordStore, ThirdParty, UserAccount,
};

use crate::format::{FieldValue, FormatContext};

/// One renderable field of a record of type `T`.
pub struct FieldDescriptor<T> {
    /// Field name, matched against exclusion lists.
    pub name: &'static str,
    /// Row label. Fields with an empty label are never shown.
    pub label: &'static str,
    pub value: fn(&T, &dyn RecordStore) -> FieldValue,
    /// Left out of every table, whatever the exclusions.
    pub excluded_by_default: bool,
}

/// Records that can be rendered as a two-column field table.
pub trait Describe: Sized + 'static {
    const FIELDS: &'static [FieldDescriptor<Self>];
}

/// Label/value rows of `record`, skipping excluded, unlabeled and hidden
/// fields.
pub fn field_rows<T: Describe>(
    record: &T,
    store: &dyn RecordStore,
    ctx: &FormatContext,
    exclude: &[&str],
) -> Vec<(String, String)> {
    T::FIELDS
        .iter()
        .filter(|f| !f.excluded_by_default && !f.label.is_empty() && !exclude.contains(&f.name))
        .filter_map(|f| {
            let value = (f.value)(record, store);
            ctx.render(&value).map(|text| (f.label.to_string(), text))
        })
        .collect()
}

macro_rules! field {
    ($name:literal, $label:literal, $value:expr) => {
        FieldDescriptor {
            name: $name,
            label: $label,
            value: $value,
            excluded_by_default: false,
        }
    };
    ($name:literal, $label:literal, $value:expr, hidden) => {
        FieldDescriptor {
            name: $name,
            label: $label,
            value: $value,
            excluded_by_default: true,
        }
    };
}

fn list_name(store: &dyn RecordStore, id: ListEntryId) -> Option<String> {
    store.list_entry(id).map(ToString::to_string)
}

fn list_names(store: &dyn RecordStore, ids: &[ListEntryId]) -> FieldValue {
    FieldValue::Refs(ids.iter().filter_map(|&id| list_name(store, id)).collect())
}

fn document_name(doc: Option<&PdfDocument>) -> FieldValue {
    FieldValue::Ref(doc.map(|d| d.named.name.clone()))
}

fn classification_document(store: &dyn RecordStore, id: Option<DocumentId>) -> FieldValue {
    document_name(id.and_then(|id| store.classification_document(id)).map(|d| &d.document))
}

// ─── Organizations ───────────────────────────────────────────────────

impl Describe for Organization {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |o, _| FieldValue::DateTime(Some(o.named.last_update))),
        field!("name", "Name", |o, _| FieldValue::text(&o.named.name)),
        field!("description", "Description", |o, _| FieldValue::text(&o.named.description)),
        field!("email", "Email", |o, _| FieldValue::text(&o.contact.email)),
        field!("address", "Address", |o, _| FieldValue::text(&o.contact.address)),
        field!("country", "Country", |o, _| FieldValue::text(&o.contact.country)),
        field!("telephone", "Telephone", |o, _| FieldValue::text(&o.contact.telephone)),
        field!("statute", "Statute", |o, _| FieldValue::text(&o.contact.statute)),
        field!("third_country", "Third country", |o, _| FieldValue::Bool(o.contact.third_country)),
        field!("international", "International", |o, _| FieldValue::Bool(o.contact.international)),
        field!("officer", "Data Protection Officer (DPO)", |o, s| {
            FieldValue::Ref(o.officer.and_then(|id| s.officer(id)).map(|d| d.user.display_name()))
        }),
        field!("public_authority", "Public authority", |o, _| FieldValue::Bool(o.public_authority)),
        field!("monitoring", "Large-scale monitoring", |o, _| FieldValue::Bool(o.monitoring)),
        field!("special_category", "Special data", |o, _| FieldValue::Bool(o.special_category)),
        field!("business", "Business processes", |o, s| {
            FieldValue::Refs(
                o.business
                    .iter()
                    .filter_map(|&id| s.business_process(id))
                    .map(|p| p.named.name.clone())
                    .collect(),
            )
        }),
    ];
}

impl Describe for ThirdParty {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |t, _| FieldValue::DateTime(Some(t.named.last_update))),
        field!("name", "Name", |t, _| FieldValue::text(&t.named.name)),
        field!("description", "Description", |t, _| FieldValue::text(&t.named.description)),
        field!("email", "Email", |t, _| FieldValue::text(&t.contact.email)),
        field!("address", "Address", |t, _| FieldValue::text(&t.contact.address)),
        field!("country", "Country", |t, _| FieldValue::text(&t.contact.country)),
        field!("telephone", "Telephone", |t, _| FieldValue::text(&t.contact.telephone)),
        field!("statute", "Statute", |t, _| FieldValue::text(&t.contact.statute)),
        field!("third_country", "Third country", |t, _| FieldValue::Bool(t.contact.third_country)),
        field!("international", "International", |t, _| FieldValue::Bool(t.contact.international)),
        field!("category", "Category", |t, s| FieldValue::Ref(list_name(s, t.category))),
        field!(
            "third_country_transfer",
            "Nature of transfer to third-country/international organization",
            |t, s| FieldValue::Ref(t.third_country_transfer.and_then(|id| list_name(s, id)))
        ),
        field!("appropriate_safeguards", "Appropriate data safeguards", |t, _| {
            FieldValue::text(&t.appropriate_safeguards)
        }),
    ];
}

// ─── People ──────────────────────────────────────────────────────────

impl Describe for DataProtectionOfficer {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |d, _| FieldValue::DateTime(Some(d.last_update))),
        field!("user", "Registered user", |d, _| FieldValue::Ref(Some(d.user.display_name()))),
        field!("address", "Address", |d, _| FieldValue::text(&d.address)),
        field!("telephone", "Telephone", |d, _| FieldValue::text(&d.telephone)),
        field!("staff", "Part of staff", |d, _| FieldValue::Bool(d.staff)),
    ];
}

impl Describe for UserAccount {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("password", "Password", |u, _| FieldValue::text(&u.password), hidden),
        field!("last_login", "Last login", |u, _| FieldValue::DateTime(u.last_login)),
        field!("is_superuser", "Superuser status", |u, _| FieldValue::Bool(u.is_superuser)),
        field!("username", "Username", |u, _| FieldValue::text(&u.username)),
        field!("first_name", "First name", |u, _| FieldValue::text(&u.first_name)),
        field!("last_name", "Last name", |u, _| FieldValue::text(&u.last_name)),
        field!("email", "Email address", |u, _| FieldValue::text(&u.email)),
        field!("is_staff", "Staff status", |u, _| FieldValue::Bool(u.is_staff)),
        field!("is_active", "Active", |u, _| FieldValue::Bool(u.is_active)),
        field!("date_joined", "Date joined", |u, _| FieldValue::DateTime(Some(u.date_joined))),
    ];
}

// ─── Processes and data ──────────────────────────────────────────────

impl Describe for BusinessProcess {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |p, _| FieldValue::DateTime(Some(p.named.last_update))),
        field!("name", "Name", |p, _| FieldValue::text(&p.named.name)),
        field!("description", "Description", |p, _| FieldValue::text(&p.named.description)),
        field!("owner", "Process owner", |p, s| {
            FieldValue::Ref(p.owner.and_then(|id| s.owner(id)).map(|o| o.user.display_name()))
        }),
        field!("activities", "Processing activities", |p, s| {
            FieldValue::Refs(
                p.activities
                    .iter()
                    .filter_map(|&id| s.activity(id))
                    .map(|a| a.named.name.clone())
                    .collect(),
            )
        }),
    ];
}

impl Describe for ProcessingActivity {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |a, _| FieldValue::DateTime(Some(a.named.last_update))),
        field!("name", "Name", |a, _| FieldValue::text(&a.named.name)),
        field!("description", "Description", |a, _| FieldValue::text(&a.named.description)),
        field!("purpose", "Purpose", |a, s| FieldValue::Ref(list_name(s, a.purpose))),
        field!("proc_type", "Processing type", |a, s| FieldValue::Ref(list_name(s, a.proc_type))),
        field!("start_date", "Start date", |a, _| FieldValue::Date(a.start_date)),
        field!("end_date", "End date", |a, _| FieldValue::Date(a.end_date)),
        field!("legal", "Legal base for processing", |a, s| FieldValue::Ref(list_name(s, a.legal))),
        field!("technology", "Technology", |a, _| {
            FieldValue::text(a.technology.as_deref().unwrap_or_default())
        }),
        field!("alternate_activity", "Alternate activity", |a, s| {
            FieldValue::Ref(
                a.alternate_activity
                    .and_then(|id| s.activity(id))
                    .map(|alt| alt.named.name.clone()),
            )
        }),
        field!("comments", "Comments", |a, _| FieldValue::text(&a.comments)),
        field!("classification", "Classification level", |a, s| {
            FieldValue::Ref(a.classification.and_then(|id| list_name(s, id)))
        }),
        field!("data_audit", "Data audit", |a, s| {
            FieldValue::Refs(
                a.data_audit
                    .iter()
                    .filter_map(|&id| s.data_audit(id))
                    .map(|d| d.named.name.clone())
                    .collect(),
            )
        }),
    ];
}

impl Describe for DataAudit {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |d, _| FieldValue::DateTime(Some(d.named.last_update))),
        field!("name", "Name", |d, _| FieldValue::text(&d.named.name)),
        field!("description", "Description", |d, _| FieldValue::text(&d.named.description)),
        field!("category", "Data category", |d, s| FieldValue::Ref(list_name(s, d.category))),
        field!("subject_category", "Data subject category", |d, s| {
            list_names(s, &d.subject_category)
        }),
        field!("source", "Original data source", |d, _| FieldValue::text(&d.source)),
        field!("comments", "Comments", |d, _| FieldValue::text(&d.comments)),
        field!("risk", "Inherent risk", |d, _| FieldValue::risk(d.risk)),
        field!("management", "Data management policy", |d, s| {
            FieldValue::Ref(
                d.management
                    .and_then(|id| s.management_policy(id))
                    .map(|p| p.named.name.clone()),
            )
        }),
        field!("breach_detection", "Data breach detection", |d, s| {
            FieldValue::Ref(
                d.breach_detection
                    .and_then(|id| s.breach_detection(id))
                    .map(|b| b.named.name.clone()),
            )
        }),
        field!("breach_response", "Incident response plan", |d, s| {
            FieldValue::Ref(
                d.breach_response
                    .and_then(|id| s.breach_response(id))
                    .map(|b| b.named.name.clone()),
            )
        }),
        field!("dpia", "Data protection impact assessment", |d, s| {
            document_name(d.dpia.and_then(|id| s.dpia(id)).map(|doc| &doc.document))
        }),
    ];
}

// ─── Policies ────────────────────────────────────────────────────────

impl Describe for DataManagementPolicy {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |p, _| FieldValue::DateTime(Some(p.named.last_update))),
        field!("name", "Name", |p, _| FieldValue::text(&p.named.name)),
        field!("description", "Description", |p, _| FieldValue::text(&p.named.description)),
        field!("processor_contracts", "Data processor contracts", |p, s| {
            FieldValue::Refs(
                p.processor_contracts
                    .iter()
                    .filter_map(|&id| s.processor_contract(id))
                    .map(|c| c.document.named.name.clone())
                    .collect(),
            )
        }),
        field!("retention", "Retention period for the processed data, in days", |p, _| {
            FieldValue::Int(p.retention.map(i64::from))
        }),
        field!("risk_mitigation", "Risk mitigation measures", |p, _| {
            FieldValue::text(&p.risk_mitigation)
        }),
        field!("risk", "Residual risk", |p, _| FieldValue::risk(p.risk)),
        field!("subject_rights", "Data subject rights", |p, s| {
            document_name(
                p.subject_rights
                    .and_then(|id| s.subject_rights(id))
                    .map(|d| &d.document),
            )
        }),
        field!("subject_notification", "Data subject notification", |p, _| {
            FieldValue::text(&p.subject_notification)
        }),
        field!("comments", "Comments", |p, _| FieldValue::text(&p.comments)),
    ];
}

impl Describe for BreachDetection {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |b, _| FieldValue::DateTime(Some(b.named.last_update))),
        field!("name", "Name", |b, _| FieldValue::text(&b.named.name)),
        field!("description", "Description", |b, _| FieldValue::text(&b.named.description)),
        field!("risk_mitigation", "Risk mitigation measures", |b, _| {
            FieldValue::text(&b.risk_mitigation)
        }),
        field!("risk", "Residual risk", |b, _| FieldValue::risk(b.risk)),
        field!("comments", "Comments", |b, _| FieldValue::text(&b.comments)),
    ];
}

impl Describe for BreachResponse {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |b, _| FieldValue::DateTime(Some(b.named.last_update))),
        field!("name", "Name", |b, _| FieldValue::text(&b.named.name)),
        field!("description", "Description", |b, _| FieldValue::text(&b.named.description)),
        field!("risk_mitigation", "Risk mitigation measures", |b, _| {
            FieldValue::text(&b.risk_mitigation)
        }),
        field!("risk", "Residual risk", |b, _| FieldValue::risk(b.risk)),
        field!("comments", "Comments", |b, _| FieldValue::text(&b.comments)),
    ];
}

// ─── Documents ───────────────────────────────────────────────────────

impl Describe for Dpia {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |d, _| {
            FieldValue::DateTime(Some(d.document.named.last_update))
        }),
        field!("name", "Name", |d, _| FieldValue::text(&d.document.named.name)),
        field!("description", "Description", |d, _| FieldValue::text(&d.document.named.description)),
        field!("file", "Document file", |d, _| FieldValue::text(&d.document.file)),
        field!("checksum", "Checksum", |d, _| FieldValue::Text(d.document.checksum.to_string())),
    ];
}

impl Describe for ProcessorContract {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |c, _| {
            FieldValue::DateTime(Some(c.document.named.last_update))
        }),
        field!("name", "Name", |c, _| FieldValue::text(&c.document.named.name)),
        field!("description", "Description", |c, _| FieldValue::text(&c.document.named.description)),
        field!("file", "Document file", |c, _| FieldValue::text(&c.document.file)),
        field!("checksum", "Checksum", |c, _| FieldValue::Text(c.document.checksum.to_string())),
        field!("processor", "Processor", |c, s| {
            FieldValue::Ref(s.third_party(c.processor).map(|t| t.named.name.clone()))
        }),
    ];
}

// ─── Reference lists ─────────────────────────────────────────────────

impl Describe for ListEntry {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!("last_update", "Last update", |e, _| FieldValue::DateTime(Some(e.named.last_update))),
        field!("name", "Name", |e, _| FieldValue::text(&e.named.name)),
        field!("description", "Description", |e, _| FieldValue::text(&e.named.description)),
        field!("classification", "Classification", |e, _| FieldValue::text(&e.classification)),
        field!("article", "GDPR article", |e, _| FieldValue::Int(e.article.map(i64::from))),
        field!("url", "Reference URL", |e, _| FieldValue::text(&e.url)),
        field!("special", "Special category", |e, _| match e.kind {
            ListKind::DataCategory => FieldValue::Bool(e.special),
            _ => FieldValue::Hidden,
        }),
        field!("vulnerable", "Vulnerable category", |e, _| match e.kind {
            ListKind::DataSubjectCategory => FieldValue::Bool(e.vulnerable),
            _ => FieldValue::Hidden,
        }),
        field!("document", "Processing activity classification document", |e, s| match e.kind {
            ListKind::ClassificationLevel => classification_document(s, e.document),
            _ => FieldValue::Hidden,
        }),
    ];
}
