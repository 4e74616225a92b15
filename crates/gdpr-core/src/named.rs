//! # Named Records
//!
//! The name/description/last-update triple shared by every registry record
//! that users create through the CRUD surface.

use serde::{Deserialize, Serialize};

use crate::temporal::Timestamp;

/// Name, free-text description and last-modified time of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    /// Display name. Unique within its record kind.
    pub name: String,
    /// Free-text description. May be empty.
    #[serde(default)]
    pub description: String,
    /// When the record was last modified.
    #[serde(default)]
    pub last_update: Timestamp,
}

impl Named {
    /// A record with the given name and description, stamped now.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            last_update: Timestamp::now(),
        }
    }

    /// Whether the description is empty or whitespace only.
    pub fn missing_description(&self) -> bool {
        self.description.trim().is_empty()
    }

    /// The first `words` words of the description, with an ellipsis when
    /// truncated. Used for list views.
    pub fn short_description(&self, words: usize) -> String {
        let mut parts = self.description.split_whitespace();
        let head: Vec<&str> = parts.by_ref().take(words).collect();
        if parts.next().is_some() {
            format!("{} ...", head.join(" "))
        } else {
            head.join(" ")
        }
    }
}

impl std::fmt::Display for Named {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description() {
        assert!(Named::new("HR", "").missing_description());
        assert!(Named::new("HR", "   ").missing_description());
        assert!(!Named::new("HR", "Human resources").missing_description());
    }

    #[test]
    fn test_short_description_truncates() {
        let n = Named::new("x", "one two three four");
        assert_eq!(n.short_description(2), "one two ...");
        assert_eq!(n.short_description(4), "one two three four");
    }

    #[test]
    fn test_description_defaults_when_absent() {
        let n: Named = serde_json::from_str(r#"{"name": "Payroll"}"#).unwrap();
        assert_eq!(n.name, "Payroll");
        assert!(n.description.is_empty());
    }
}
