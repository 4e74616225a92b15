//! # Model Errors
//!
//! Write-time validation failures and snapshot I/O errors. Read paths
//! (lookups, traversal) never produce these: an absent record is `None`.

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::EntityKind;
use crate::lists::ListKind;

/// Errors raised by the record store and its validation rules.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A record with the same identifier already exists in a snapshot.
    #[error("duplicate {kind} identifier {id}")]
    DuplicateId {
        /// Record kind.
        kind: &'static str,
        /// Offending identifier.
        id: String,
    },

    /// Another record of the same kind already has this name.
    #[error("{kind} {name:?} already exists")]
    DuplicateName {
        /// Record kind. For list entries, the list.
        kind: EntityKind,
        /// Offending name.
        name: String,
    },

    /// A record references a record that does not exist.
    #[error("{from} references missing {field} {to}")]
    DanglingReference {
        /// The referencing record.
        from: String,
        /// Field holding the reference.
        field: &'static str,
        /// The missing target.
        to: String,
    },

    /// A list reference points at an entry of the wrong list.
    #[error("{field} must reference a {expected} entry, found {found}")]
    WrongListKind {
        /// Field holding the reference.
        field: &'static str,
        /// Required list kind.
        expected: ListKind,
        /// Actual list kind.
        found: ListKind,
    },

    /// A transfer nature is set on a third party that is neither
    /// third-country nor international.
    #[error(
        "{third_party} is not marked as third country or international; flag one of these \
         fields before setting the nature of transfer to third country/international organization"
    )]
    TransferWithoutThirdCountry {
        /// The third party's name.
        third_party: String,
    },

    /// A processing activity is already assigned to another business process.
    #[error("activity {activity} is already assigned to another business process: {process}")]
    ActivityAlreadyAssigned {
        /// Activity name.
        activity: String,
        /// Name of the process that already holds it.
        process: String,
    },

    /// A business process is already assigned to another organization.
    #[error("business process {process} is already assigned to another organization: {organization}")]
    ProcessAlreadyAssigned {
        /// Process name.
        process: String,
        /// Name of the organization that already holds it.
        organization: String,
    },

    /// An uploaded document is not a PDF file.
    #[error("only PDF files are accepted: {0}")]
    NotPdf(String),

    /// The snapshot file extension is neither JSON nor YAML.
    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Foundational value error.
    #[error(transparent)]
    Core(#[from] gdpr_core::RegistryError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
