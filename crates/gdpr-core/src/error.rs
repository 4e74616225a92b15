//! # Error Types
//!
//! Errors raised by the foundational types. Higher crates wrap these in
//! their own `thiserror` enums.

use thiserror::Error;

/// Top-level error type for foundational value parsing.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A risk code outside the 0–3 scale.
    #[error("invalid risk level {0}: expected 0 (unknown), 1 (low), 2 (mid) or 3 (high)")]
    InvalidRiskLevel(u8),

    /// A record identifier could not be parsed.
    #[error("invalid identifier {value:?}: {reason}")]
    InvalidIdentifier {
        /// The rejected input.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
