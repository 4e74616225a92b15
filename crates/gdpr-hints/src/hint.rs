//! # Hints
//!
//! A [`Hint`] is one advisory message about one record. It keeps the raw
//! [`EntityRef`] of the record it is about, so a presentation layer can
//! later replace the plain name with a link (see [`HintList::rebind`]).
//!
//! [`HintList::rebind`]: crate::HintList::rebind

use serde::{Deserialize, Serialize};

use gdpr_model::EntityRef;

/// How significant a hint is.
///
/// Ordering is by significance (`Suggestion < Warning < Issue`) and is
/// used for display only: no severity ever suppresses another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Severity {
    /// Nice to have.
    Suggestion,
    /// Best-practice concern.
    Warning,
    /// Compliance gap.
    #[serde(alias = "error")]
    Issue,
}

impl Severity {
    /// Every severity, least significant first.
    pub const ALL: [Severity; 3] = [Self::Suggestion, Self::Warning, Self::Issue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suggestion => "suggestion",
            Self::Warning => "warning",
            Self::Issue => "issue",
        }
    }

    /// Plural heading for a group of hints.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Suggestion => "Suggestions",
            Self::Warning => "Warnings",
            Self::Issue => "Issues",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suggestion" => Ok(Self::Suggestion),
            "warning" => Ok(Self::Warning),
            "issue" | "error" => Ok(Self::Issue),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// An advisory message about one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub severity: Severity,
    /// Message text, completed by the kind label and the record's name.
    pub text: String,
    /// The record this hint is about. `None` for registry-wide hints.
    pub subject: Option<EntityRef>,
    /// The record's display name when the hint was collected.
    #[serde(default)]
    pub subject_name: String,
    /// Human label of the record's kind, empty when there is no subject.
    #[serde(default)]
    pub kind_label: String,
    /// Rendered label or link set by [`HintList::rebind`](crate::HintList::rebind).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Hint {
    /// A hint about `subject`.
    pub fn new(
        severity: Severity,
        text: impl Into<String>,
        subject: EntityRef,
        subject_name: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            text: text.into(),
            subject: Some(subject),
            subject_name: subject_name.into(),
            kind_label: subject.kind().verbose_name().to_string(),
            display: None,
        }
    }

    /// A hint about no record in particular.
    pub fn unbound(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            subject: None,
            subject_name: String::new(),
            kind_label: String::new(),
            display: None,
        }
    }

    /// "text kind name", with the rebound label in place of the name when
    /// one was set. Empty parts are skipped.
    pub fn message(&self) -> String {
        let name = self.display.as_deref().unwrap_or(&self.subject_name);
        [self.text.as_str(), self.kind_label.as_str(), name]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpr_core::BusinessProcessId;

    #[test]
    fn test_significance_order() {
        assert!(Severity::Suggestion < Severity::Warning);
        assert!(Severity::Warning < Severity::Issue);
    }

    #[test]
    fn test_error_collapses_into_issue() {
        let s: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(s, Severity::Issue);
        assert_eq!("Error".parse::<Severity>().unwrap(), Severity::Issue);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_message_includes_kind_and_name() {
        let hint = Hint::new(
            Severity::Warning,
            "No owner for",
            EntityRef::BusinessProcess(BusinessProcessId::new()),
            "HR",
        );
        assert_eq!(hint.message(), "No owner for Business Process HR");
    }

    #[test]
    fn test_unbound_message_is_text_only() {
        let hint = Hint::unbound(Severity::Suggestion, "Add an organization");
        assert_eq!(hint.message(), "Add an organization");
        assert!(hint.kind_label.is_empty());
    }
}
