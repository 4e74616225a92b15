//! # Uploaded Documents
//!
//! DPIAs, data-subject-rights procedures, processor contracts and
//! classification documents are uploaded PDF files. Each wraps a
//! [`PdfDocument`]: the upload is validated as a PDF and its checksum is
//! computed once, when the document is created.
//!
//! Validation happens here, at write time. Reports and hints only read the
//! stored metadata and never touch file contents.

use serde::{Deserialize, Serialize};

use gdpr_core::{sha256_digest, ContentDigest, DocumentId, Named, ThirdPartyId};

use crate::error::ModelError;

/// PDF files must carry the header within this many leading bytes.
const HEADER_WINDOW: usize = 1024;

/// Check that `bytes` look like a PDF file: a `%PDF-` header near the
/// start and an `%%EOF` marker near the end.
pub fn validate_pdf(bytes: &[u8]) -> Result<(), ModelError> {
    if bytes.is_empty() {
        return Err(ModelError::NotPdf("empty upload".into()));
    }
    let head = &bytes[..bytes.len().min(HEADER_WINDOW)];
    if !contains(head, b"%PDF-") {
        return Err(ModelError::NotPdf("missing %PDF- header".into()));
    }
    let tail = &bytes[bytes.len().saturating_sub(HEADER_WINDOW)..];
    if !contains(tail, b"%%EOF") {
        return Err(ModelError::NotPdf("missing %%EOF trailer".into()));
    }
    Ok(())
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Metadata of an uploaded PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfDocument {
    /// Name, description, last update.
    #[serde(flatten)]
    pub named: Named,
    /// Storage path of the uploaded file.
    pub file: String,
    /// Checksum of the file contents at creation time.
    pub checksum: ContentDigest,
}

impl PdfDocument {
    /// Validate an upload and compute its checksum.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotPdf`] when the bytes are not a PDF file.
    pub fn from_upload(named: Named, bytes: &[u8]) -> Result<Self, ModelError> {
        validate_pdf(bytes)?;
        let file = format!("documents/{}.pdf", named.name);
        Ok(Self {
            named,
            file,
            checksum: sha256_digest(bytes),
        })
    }
}

/// A Data Protection Impact Assessment (GDPR Article 35).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dpia {
    /// Record identifier.
    pub id: DocumentId,
    /// The uploaded file.
    #[serde(flatten)]
    pub document: PdfDocument,
}

/// Procedures guarding the rights of data subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSubjectRights {
    /// Record identifier.
    pub id: DocumentId,
    /// The uploaded file.
    #[serde(flatten)]
    pub document: PdfDocument,
}

/// The contract regulating a transfer of data to a processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorContract {
    /// Record identifier.
    pub id: DocumentId,
    /// The uploaded file.
    #[serde(flatten)]
    pub document: PdfDocument,
    /// Third-party organization the contract was signed with.
    pub processor: ThirdPartyId,
}

/// The organization's processing activity classification system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDocument {
    /// Record identifier.
    pub id: DocumentId,
    /// The uploaded file.
    #[serde(flatten)]
    pub document: PdfDocument,
}

impl Dpia {
    /// Create a DPIA from an uploaded file.
    pub fn upload(named: Named, bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(Self {
            id: DocumentId::new(),
            document: PdfDocument::from_upload(named, bytes)?,
        })
    }
}

impl DataSubjectRights {
    /// Create a subject-rights document from an uploaded file.
    pub fn upload(named: Named, bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(Self {
            id: DocumentId::new(),
            document: PdfDocument::from_upload(named, bytes)?,
        })
    }
}

impl ProcessorContract {
    /// Create a processor contract from an uploaded file.
    pub fn upload(named: Named, bytes: &[u8], processor: ThirdPartyId) -> Result<Self, ModelError> {
        Ok(Self {
            id: DocumentId::new(),
            document: PdfDocument::from_upload(named, bytes)?,
            processor,
        })
    }
}

impl ClassificationDocument {
    /// Create a classification document from an uploaded file.
    pub fn upload(named: Named, bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(Self {
            id: DocumentId::new(),
            document: PdfDocument::from_upload(named, bytes)?,
        })
    }
}
