//! # gdpr-hints — Completeness and Risk Hints
//!
//! Walks the registry from any record and reports what is missing or risky,
//! as advisory messages grouped by severity.
//!
//! ## Architecture
//!
//! - **Hints** (`hint.rs`): [`Hint`] and the [`Severity`] scale.
//! - **Lists** (`list.rs`): [`HintList`], hints grouped by severity in
//!   insertion order, with merge and rebind.
//! - **Rules** (`rules.rs`): [`collect_hints`], one rule function per record
//!   kind, each explicit about the related records it recurses into.
//! - **Status** (`status.rs`): [`registry_status`], the merged hints of every
//!   organization.
//!
//! ## Crate Policy
//!
//! - Read-only: nothing here mutates the record store.
//! - Collection never fails. Missing records become "missing" hints.

pub mod hint;
pub mod list;
pub mod rules;
pub mod status;

pub use hint::{Hint, Severity};
pub use list::HintList;
pub use rules::collect_hints;
pub use status::{registry_status, CONTINUOUS_PROCESS, ONBOARDING};
