//! Report rendering errors.

use gdpr_core::OrganizationId;

/// Errors raised before any report output is produced.
///
/// Gaps inside the organization's record graph are never errors: they are
/// rendered as placeholders.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The requested root organization does not exist.
    #[error("Invalid Organization ID")]
    OrganizationNotFound(OrganizationId),
}
