//! # Temporal Types
//!
//! `Timestamp` is the last-modified time on every record and the
//! generation time stamped on reports. Values are held in UTC at whole
//! seconds; a presentation offset is applied only when a report renders
//! them, through [`Timestamp::with_offset()`].

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant with the sub-second part dropped.
///
/// Serializes as RFC 3339. Snapshots written elsewhere may carry any
/// offset; it is folded into UTC on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The same instant on the wall clock of `offset`.
    pub fn with_offset(&self, offset: &FixedOffset) -> DateTime<FixedOffset> {
        self.0.with_timezone(offset)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
