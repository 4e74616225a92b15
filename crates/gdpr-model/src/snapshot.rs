//! # Registry Snapshots
//!
//! A snapshot is the whole registry as one document: an array per record
//! kind, in insertion order. Files ending in `.json` are read and written
//! as JSON, `.yaml`/`.yml` as YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataAudit;
use crate::document::{ClassificationDocument, DataSubjectRights, Dpia, ProcessorContract};
use crate::error::ModelError;
use crate::lists::ListEntry;
use crate::organization::{BusinessOwner, DataProtectionOfficer, Organization, ThirdParty};
use crate::policy::{BreachDetection, BreachResponse, DataManagementPolicy};
use crate::process::{BusinessProcess, ProcessingActivity};

/// Every record of the registry, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub third_parties: Vec<ThirdParty>,
    #[serde(default)]
    pub officers: Vec<DataProtectionOfficer>,
    #[serde(default)]
    pub owners: Vec<BusinessOwner>,
    #[serde(default)]
    pub business_processes: Vec<BusinessProcess>,
    #[serde(default)]
    pub activities: Vec<ProcessingActivity>,
    #[serde(default)]
    pub data_audits: Vec<DataAudit>,
    #[serde(default)]
    pub management_policies: Vec<DataManagementPolicy>,
    #[serde(default)]
    pub breach_detections: Vec<BreachDetection>,
    #[serde(default)]
    pub breach_responses: Vec<BreachResponse>,
    #[serde(default)]
    pub dpias: Vec<Dpia>,
    #[serde(default)]
    pub subject_rights: Vec<DataSubjectRights>,
    #[serde(default)]
    pub processor_contracts: Vec<ProcessorContract>,
    #[serde(default)]
    pub classification_documents: Vec<ClassificationDocument>,
    #[serde(default)]
    pub list_entries: Vec<ListEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format, ModelError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            Ok(Format::Yaml)
        }
        _ => Err(ModelError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl RegistrySnapshot {
    /// Read a snapshot file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let format = format_of(path)?;
        let text = std::fs::read_to_string(path)?;
        let snapshot = match format {
            Format::Json => serde_json::from_str(&text)?,
            Format::Yaml => serde_yaml::from_str(&text)?,
        };
        tracing::debug!(path = %path.display(), "read snapshot file");
        Ok(snapshot)
    }

    /// Write the snapshot, choosing the format by extension.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let text = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        };
        std::fs::write(path, text)?;
        tracing::debug!(path = %path.display(), "wrote snapshot file");
        Ok(())
    }
}
