//! # Data Audits
//!
//! A data audit records one category of personal data handled by one or
//! more processing activities, together with its inherent risk and the
//! measures (management policy, breach detection and response, DPIA) that
//! address it.

use serde::{Deserialize, Serialize};

use gdpr_core::{
    BreachDetectionId, BreachResponseId, DataAuditId, DocumentId, ListEntryId, Named, PolicyId,
    RiskLevel,
};

/// The output of a data audit for one category of data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAudit {
    /// Record identifier.
    pub id: DataAuditId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Functional data category (list entry).
    pub category: ListEntryId,
    /// Data subject categories (list entries), in entry order.
    #[serde(default)]
    pub subject_category: Vec<ListEntryId>,
    /// Original data source, if not the data subjects themselves.
    #[serde(default)]
    pub source: String,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
    /// Inherent risk to the rights and freedoms of data subjects.
    #[serde(default)]
    pub risk: RiskLevel,
    /// Data management policy.
    #[serde(default)]
    pub management: Option<PolicyId>,
    /// Data breach detection plan.
    #[serde(default)]
    pub breach_detection: Option<BreachDetectionId>,
    /// Incident response plan.
    #[serde(default)]
    pub breach_response: Option<BreachResponseId>,
    /// Data Protection Impact Assessment document.
    #[serde(default)]
    pub dpia: Option<DocumentId>,
}

impl DataAudit {
    /// A new audit of the given data category with unknown risk.
    pub fn new(name: impl Into<String>, category: ListEntryId) -> Self {
        Self {
            id: DataAuditId::new(),
            named: Named::new(name, ""),
            category,
            subject_category: Vec::new(),
            source: String::new(),
            comments: String::new(),
            risk: RiskLevel::Unknown,
            management: None,
            breach_detection: None,
            breach_response: None,
            dpia: None,
        }
    }
}
