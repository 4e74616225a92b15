//! # Record Identifier Newtypes
//!
//! Newtype wrappers for every record identifier in the registry. A data
//! management policy cannot be looked up with a breach-detection id.
//!
//! Identifiers serialize as bare UUIDs. `Display` renders a namespaced
//! form (`organization:<uuid>`) and `FromStr` accepts either form.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RegistryError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// The namespace prefix used by `Display`.
            pub const PREFIX: &'static str = $prefix;
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}:{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .strip_prefix(concat!($prefix, ":"))
                    .unwrap_or(s);
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|e| RegistryError::InvalidIdentifier {
                        value: s.to_string(),
                        reason: e.to_string(),
                    })
            }
        }
    };
}

record_id!(
    /// Identifier of the controller organization ("your organization").
    OrganizationId,
    "organization"
);
record_id!(
    /// Identifier of a third-party organization (processor/recipient).
    ThirdPartyId,
    "third-party"
);
record_id!(
    /// Identifier of a Data Protection Officer.
    OfficerId,
    "officer"
);
record_id!(
    /// Identifier of a business process owner.
    OwnerId,
    "owner"
);
record_id!(
    /// Identifier of a business process.
    BusinessProcessId,
    "process"
);
record_id!(
    /// Identifier of a processing activity.
    ActivityId,
    "activity"
);
record_id!(
    /// Identifier of a data audit.
    DataAuditId,
    "data"
);
record_id!(
    /// Identifier of a data management policy.
    PolicyId,
    "policy"
);
record_id!(
    /// Identifier of a data breach detection plan.
    BreachDetectionId,
    "breach-detection"
);
record_id!(
    /// Identifier of a data breach response plan.
    BreachResponseId,
    "breach-response"
);
record_id!(
    /// Identifier of an uploaded PDF document of any kind.
    DocumentId,
    "document"
);
record_id!(
    /// Identifier of a reference list entry.
    ListEntryId,
    "list"
);
