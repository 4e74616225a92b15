//! # Entity Kinds and References
//!
//! [`EntityRef`] is a typed pointer to any record in the store. Hints carry
//! one to name the record they are about; the presentation layer resolves
//! it to a link. [`EntityKind`] is the reference's kind, with the human
//! label used in messages.

use serde::{Deserialize, Serialize};

use gdpr_core::{
    ActivityId, BreachDetectionId, BreachResponseId, BusinessProcessId, DataAuditId, DocumentId,
    ListEntryId, OfficerId, OrganizationId, OwnerId, PolicyId, ThirdPartyId,
};

use crate::lists::ListKind;

/// The kind of a registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    ThirdParty,
    Officer,
    Owner,
    BusinessProcess,
    Activity,
    DataAudit,
    ManagementPolicy,
    BreachDetection,
    BreachResponse,
    Dpia,
    SubjectRights,
    ProcessorContract,
    ClassificationDocument,
    List(ListKind),
}

impl EntityKind {
    /// Singular human label.
    pub fn verbose_name(&self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::ThirdParty => "Third-party Organization",
            Self::Officer => "Data Protection Officer (DPO)",
            Self::Owner => "Business Owner",
            Self::BusinessProcess => "Business Process",
            Self::Activity => "Processing Activity",
            Self::DataAudit => "Data Audit",
            Self::ManagementPolicy => "Data Management Policy",
            Self::BreachDetection => "Data Breach Detection",
            Self::BreachResponse => "Incident Response Plan",
            Self::Dpia => "Data Protection Impact Assessment (DPIA)",
            Self::SubjectRights => "Data Subject Rights Document",
            Self::ProcessorContract => "Processor Contract",
            Self::ClassificationDocument => "Processing Activity Classification Document",
            Self::List(kind) => kind.verbose_name(),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verbose_name())
    }
}

/// A typed reference to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Organization(OrganizationId),
    ThirdParty(ThirdPartyId),
    Officer(OfficerId),
    Owner(OwnerId),
    BusinessProcess(BusinessProcessId),
    Activity(ActivityId),
    DataAudit(DataAuditId),
    ManagementPolicy(PolicyId),
    BreachDetection(BreachDetectionId),
    BreachResponse(BreachResponseId),
    Dpia(DocumentId),
    SubjectRights(DocumentId),
    ProcessorContract(DocumentId),
    ClassificationDocument(DocumentId),
    ListEntry(ListKind, ListEntryId),
}

impl EntityRef {
    /// The kind of the referenced record.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Organization(_) => EntityKind::Organization,
            Self::ThirdParty(_) => EntityKind::ThirdParty,
            Self::Officer(_) => EntityKind::Officer,
            Self::Owner(_) => EntityKind::Owner,
            Self::BusinessProcess(_) => EntityKind::BusinessProcess,
            Self::Activity(_) => EntityKind::Activity,
            Self::DataAudit(_) => EntityKind::DataAudit,
            Self::ManagementPolicy(_) => EntityKind::ManagementPolicy,
            Self::BreachDetection(_) => EntityKind::BreachDetection,
            Self::BreachResponse(_) => EntityKind::BreachResponse,
            Self::Dpia(_) => EntityKind::Dpia,
            Self::SubjectRights(_) => EntityKind::SubjectRights,
            Self::ProcessorContract(_) => EntityKind::ProcessorContract,
            Self::ClassificationDocument(_) => EntityKind::ClassificationDocument,
            Self::ListEntry(kind, _) => EntityKind::List(*kind),
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Organization(id) => id.fmt(f),
            Self::ThirdParty(id) => id.fmt(f),
            Self::Officer(id) => id.fmt(f),
            Self::Owner(id) => id.fmt(f),
            Self::BusinessProcess(id) => id.fmt(f),
            Self::Activity(id) => id.fmt(f),
            Self::DataAudit(id) => id.fmt(f),
            Self::ManagementPolicy(id) => id.fmt(f),
            Self::BreachDetection(id) => id.fmt(f),
            Self::BreachResponse(id) => id.fmt(f),
            Self::Dpia(id)
            | Self::SubjectRights(id)
            | Self::ProcessorContract(id)
            | Self::ClassificationDocument(id) => id.fmt(f),
            Self::ListEntry(_, id) => id.fmt(f),
        }
    }
}
