//! # Business Processes and Processing Activities
//!
//! A business process (e.g. "Human Resources") groups the processing
//! activities (e.g. "Collection of Curriculum Vitae") that may handle
//! personal data. Each activity belongs to at most one process and each
//! process to at most one organization; the store enforces both on write.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gdpr_core::{ActivityId, BusinessProcessId, DataAuditId, ListEntryId, Named, OwnerId};

/// A business process of the controller organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProcess {
    /// Record identifier.
    pub id: BusinessProcessId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Who is responsible for and manages the process.
    #[serde(default)]
    pub owner: Option<OwnerId>,
    /// Processing activities of this process, in entry order.
    #[serde(default)]
    pub activities: Vec<ActivityId>,
}

impl BusinessProcess {
    /// A new process with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BusinessProcessId::new(),
            named: Named::new(name, ""),
            owner: None,
            activities: Vec::new(),
        }
    }
}

/// A processing activity: one way personal data is processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingActivity {
    /// Record identifier.
    pub id: ActivityId,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Data handled by this activity (output of a data audit).
    #[serde(default)]
    pub data_audit: Vec<DataAuditId>,
    /// Purpose of processing (list entry).
    pub purpose: ListEntryId,
    /// Type of processing (list entry).
    pub proc_type: ListEntryId,
    /// When processing started.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// When processing ceases, if applicable.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Legal base for processing (list entry).
    pub legal: ListEntryId,
    /// Technologies, applications and software employed.
    #[serde(default)]
    pub technology: Option<String>,
    /// The activity that replaces this one once terminated.
    #[serde(default)]
    pub alternate_activity: Option<ActivityId>,
    /// Free-text comments.
    #[serde(default)]
    pub comments: String,
    /// Classification level (list entry), the highest one involved.
    #[serde(default)]
    pub classification: Option<ListEntryId>,
}

impl ProcessingActivity {
    /// A new activity with its three mandatory list references.
    pub fn new(
        name: impl Into<String>,
        purpose: ListEntryId,
        proc_type: ListEntryId,
        legal: ListEntryId,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            named: Named::new(name, ""),
            data_audit: Vec::new(),
            purpose,
            proc_type,
            start_date: None,
            end_date: None,
            legal,
            technology: None,
            alternate_activity: None,
            comments: String::new(),
            classification: None,
        }
    }

    /// Whether the technology description is absent or blank.
    pub fn missing_technology(&self) -> bool {
        self.technology
            .as_deref()
            .map_or(true, |t| t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity() -> ProcessingActivity {
        ProcessingActivity::new(
            "CV collection",
            ListEntryId::new(),
            ListEntryId::new(),
            ListEntryId::new(),
        )
    }

    #[test]
    fn test_missing_technology() {
        let mut a = activity();
        assert!(a.missing_technology());
        a.technology = Some(String::new());
        assert!(a.missing_technology());
        a.technology = Some("ERP".into());
        assert!(!a.missing_technology());
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let mut a = activity();
        a.start_date = NaiveDate::from_ymd_opt(2024, 5, 25);
        let value = serde_json::to_value(&a).unwrap();
        assert_eq!(value["start_date"], "2024-05-25");
        assert!(value["end_date"].is_null());
    }
}
