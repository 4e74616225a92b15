//! # gdpr-core — Foundational Types for the GDPR Registry
//!
//! This crate holds the primitives every other crate in the workspace
//! builds on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `OrganizationId`, `ActivityId`, `DataAuditId`
//!    and friends are distinct types. A data audit id cannot be passed where
//!    a policy id is expected.
//!
//! 2. **One risk scale.** `RiskLevel` is the single 0–3 scale shared by
//!    inherent risk (data audits) and residual risk (policies, breach plans).
//!
//! 3. **Composition over inheritance.** Every named record embeds a
//!    [`Named`] value instead of inheriting from a base record.
//!
//! 4. **UTC-only timestamps.** `Timestamp` is UTC with seconds precision.
//!    Presentation offsets are applied by the caller, never stored.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gdpr-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod identity;
pub mod named;
pub mod risk;
pub mod temporal;

pub use digest::{sha256_digest, ContentDigest, DigestAlgorithm};
pub use error::RegistryError;
pub use identity::{
    ActivityId, BreachDetectionId, BreachResponseId, BusinessProcessId, DataAuditId, DocumentId,
    ListEntryId, OfficerId, OrganizationId, OwnerId, PolicyId, ThirdPartyId,
};
pub use named::Named;
pub use risk::RiskLevel;
pub use temporal::Timestamp;
