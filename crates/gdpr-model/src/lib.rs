//! # gdpr-model — Registry Records and the Record Store
//!
//! Typed records of the GDPR registry and the read contract the hint
//! engine and report renderer consume.
//!
//! ## Record Graph
//!
//! ```text
//! Organization ──▶ BusinessProcess ──▶ ProcessingActivity ──▶ DataAudit
//!      │                 │                                      │
//!      ▼                 ▼                                      ├──▶ DataManagementPolicy ──▶ ProcessorContract ──▶ ThirdParty
//!   DPO (officer)   BusinessOwner                               │            └──▶ DataSubjectRights
//!                                                               ├──▶ BreachDetection
//!                                                               ├──▶ BreachResponse
//!                                                               └──▶ Dpia
//! ```
//!
//! Reference lists (purposes, legal bases, data categories, …) hang off
//! activities, data audits and third parties.
//!
//! ## Architecture
//!
//! - **Records** (`organization.rs`, `process.rs`, `data.rs`, `policy.rs`,
//!   `document.rs`, `lists.rs`): plain serde structs composed from the
//!   shared [`Named`](gdpr_core::Named) value.
//! - **Store** (`store.rs`): the [`RecordStore`] trait (lookups, iteration,
//!   backlinks) and [`InMemoryStore`], its in-memory implementation.
//! - **Validation** (`validation.rs`): write-time rules applied on insert.
//! - **Snapshots** (`snapshot.rs`): JSON/YAML files holding a whole store.

pub mod data;
pub mod document;
pub mod error;
pub mod kind;
pub mod lists;
pub mod organization;
pub mod policy;
pub mod process;
pub mod snapshot;
pub mod store;
pub mod validation;

pub use data::DataAudit;
pub use document::{
    validate_pdf, ClassificationDocument, DataSubjectRights, Dpia, PdfDocument, ProcessorContract,
};
pub use error::ModelError;
pub use kind::{EntityKind, EntityRef};
pub use lists::{CatalogEntry, ListCatalog, ListEntry, ListKind, PopulateSummary};
pub use organization::{
    BusinessOwner, ContactInfo, DataProtectionOfficer, DpoTrigger, Organization, ThirdParty,
    UserAccount,
};
pub use policy::{BreachDetection, BreachResponse, DataManagementPolicy, ResidualRisk};
pub use process::{BusinessProcess, ProcessingActivity};
pub use snapshot::RegistrySnapshot;
pub use store::{InMemoryStore, RecordStore};
