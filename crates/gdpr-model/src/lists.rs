//! # Reference Lists
//!
//! Flat lookup tables referenced by activities, data audits and third
//! parties: purposes, legal bases, processing types, data categories,
//! recipient categories, transfer natures, data subject categories and
//! classification levels.
//!
//! A [`ListCatalog`] is the predefined content shipped with the registry
//! (one JSON file per language). Loading it upserts entries by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gdpr_core::{DocumentId, ListEntryId, Named};

/// Which reference list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Purpose of processing.
    ProcessingPurpose,
    /// Legal base for processing.
    LegalBasis,
    /// Type of processing.
    ProcessingType,
    /// Functional data category.
    DataCategory,
    /// Recipient category of a third party.
    RecipientCategory,
    /// Nature of transfer to a third country/international organization.
    TransferNature,
    /// Data subject category.
    DataSubjectCategory,
    /// Processing activity classification level.
    ClassificationLevel,
}

impl ListKind {
    /// All list kinds, in catalog order.
    pub const ALL: [ListKind; 8] = [
        Self::ProcessingPurpose,
        Self::LegalBasis,
        Self::DataCategory,
        Self::ProcessingType,
        Self::RecipientCategory,
        Self::TransferNature,
        Self::DataSubjectCategory,
        Self::ClassificationLevel,
    ];

    /// Singular display name.
    pub fn verbose_name(&self) -> &'static str {
        match self {
            Self::ProcessingPurpose => "Purpose of Processing",
            Self::LegalBasis => "Legal Base for Processing",
            Self::ProcessingType => "Type of Processing",
            Self::DataCategory => "Functional Data Category",
            Self::RecipientCategory => "Recipient Category",
            Self::TransferNature => {
                "Nature of Transfer to third-country/international organization"
            }
            Self::DataSubjectCategory => "Data Subject Category",
            Self::ClassificationLevel => "Processing Activity Classification Level",
        }
    }

    /// Section title of this list in a [`ListCatalog`] file. Classification
    /// levels are organization specific and have no predefined section.
    pub fn catalog_section(&self) -> Option<&'static str> {
        match self {
            Self::ProcessingPurpose => Some("Indicative List of Purpose Types"),
            Self::LegalBasis => Some("Basis for Processing"),
            Self::DataCategory => Some("Indicative List of Functional Data Categories"),
            Self::ProcessingType => Some("Type of Processing"),
            Self::RecipientCategory => Some("Indicative List of Recipient Categories"),
            Self::TransferNature => {
                Some("Nature of Transfer to Third Country/International Organization")
            }
            Self::DataSubjectCategory => Some("Indicative List of Data Subject Categories"),
            Self::ClassificationLevel => None,
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verbose_name())
    }
}

/// An entry of one reference list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Record identifier.
    pub id: ListEntryId,
    /// Which list this entry belongs to.
    pub kind: ListKind,
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// General classification grouping (e.g. "Employment").
    #[serde(default)]
    pub classification: String,
    /// GDPR article reference.
    #[serde(default)]
    pub article: Option<u32>,
    /// Reference URL.
    #[serde(default)]
    pub url: String,
    /// Data categories only: special category (processing normally prohibited).
    #[serde(default)]
    pub special: bool,
    /// Data subject categories only: vulnerable subjects (children, employees, patients).
    #[serde(default)]
    pub vulnerable: bool,
    /// Classification levels only: the organization's classification document.
    #[serde(default)]
    pub document: Option<DocumentId>,
}

impl ListEntry {
    /// A new entry with only a name.
    pub fn new(kind: ListKind, name: impl Into<String>) -> Self {
        Self {
            id: ListEntryId::new(),
            kind,
            named: Named::new(name, ""),
            classification: String::new(),
            article: None,
            url: String::new(),
            special: false,
            vulnerable: false,
            document: None,
        }
    }
}

impl std::fmt::Display for ListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.classification.is_empty() {
            f.write_str(&self.named.name)
        } else {
            write!(f, "{} - {}", self.classification, self.named.name)
        }
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────

/// One predefined entry in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Entry name; the upsert key.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// GDPR article reference.
    #[serde(default)]
    pub article: Option<u32>,
    /// Reference URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Special category flag (data categories).
    #[serde(default)]
    pub special: Option<bool>,
    /// Vulnerable flag (data subject categories).
    #[serde(default)]
    pub vulnerable: Option<bool>,
}

/// A predefined list catalog: section title → classification → entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListCatalog(pub BTreeMap<String, BTreeMap<String, Vec<CatalogEntry>>>);

impl ListCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Entries of one list, grouped by classification.
    pub fn section(&self, kind: ListKind) -> Option<&BTreeMap<String, Vec<CatalogEntry>>> {
        kind.catalog_section().and_then(|title| self.0.get(title))
    }

    /// Section titles present in the file that no list kind maps to.
    pub fn unknown_sections(&self) -> Vec<&str> {
        self.0
            .keys()
            .filter(|title| {
                !ListKind::ALL
                    .iter()
                    .any(|k| k.catalog_section() == Some(title.as_str()))
            })
            .map(String::as_str)
            .collect()
    }
}

impl CatalogEntry {
    /// Copy the fields present in this catalog entry onto a list entry.
    pub fn apply_to(&self, entry: &mut ListEntry) {
        if let Some(description) = &self.description {
            entry.named.description = description.clone();
        }
        if self.article.is_some() {
            entry.article = self.article;
        }
        if let Some(url) = &self.url {
            entry.url = url.clone();
        }
        if let Some(special) = self.special {
            entry.special = special;
        }
        if let Some(vulnerable) = self.vulnerable {
            entry.vulnerable = vulnerable;
        }
    }
}

/// Outcome of loading a catalog into a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulateSummary {
    /// Entries that did not exist and were created.
    pub created: usize,
    /// Existing entries (matched by kind and name) that were updated.
    pub updated: usize,
}
