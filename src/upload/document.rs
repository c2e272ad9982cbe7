//! Document types
//!
//! - `FileMeta`: what the file picker reports about a selected file
//! - `AcceptFilter`: the picker's `accept` list, enforced in code
//! - `UploadedDocument`: an entry of the upload list and its status

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::error::UploadError;

/// Identifier of an entry in the upload list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Metadata of a selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    /// Reported MIME type, empty when the picker could not tell
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Read metadata of a local file, guessing the MIME type from its extension
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_for_name(&name).unwrap_or_default().to_string();

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            mime_type,
        })
    }

    /// Lower-cased extension including the dot
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
    }
}

/// MIME type for the extensions the demo knows about
pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "xml" => Some("application/xml"),
        "zip" => Some("application/zip"),
        _ => None,
    }
}

/// File picker accept list: extensions and MIME prefixes (`image/`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptFilter {
    pub extensions: &'static [&'static str],
    pub mime_prefixes: &'static [&'static str],
}

impl AcceptFilter {
    /// Carbon-credit certificates on the upload page
    pub const CREDIT_DOCUMENTS: AcceptFilter = AcceptFilter {
        extensions: &[".pdf", ".jpg", ".jpeg", ".png"],
        mime_prefixes: &[],
    };

    /// Offline Aadhaar e-KYC export
    pub const AADHAAR_OFFLINE: AcceptFilter = AcceptFilter {
        extensions: &[".xml", ".zip"],
        mime_prefixes: &[],
    };

    /// Any image
    pub const IMAGES: AcceptFilter = AcceptFilter {
        extensions: &[],
        mime_prefixes: &["image/"],
    };

    pub fn accepts(&self, file: &FileMeta) -> bool {
        let by_extension = file
            .extension()
            .map(|ext| self.extensions.contains(&ext.as_str()))
            .unwrap_or(false);
        let by_mime = self
            .mime_prefixes
            .iter()
            .any(|prefix| file.mime_type.starts_with(prefix));
        by_extension || by_mime
    }

    /// Value for an `<input type="file" accept=...>` attribute
    pub fn html_accept(&self) -> String {
        let mut parts: Vec<String> = self.extensions.iter().map(|e| e.to_string()).collect();
        parts.extend(self.mime_prefixes.iter().map(|p| format!("{}*", p)));
        parts.join(",")
    }

    /// Check a file against the filter
    pub fn check(&self, file: &FileMeta) -> Result<(), UploadError> {
        if self.accepts(file) {
            Ok(())
        } else {
            Err(UploadError::UnsupportedType {
                name: file.name.clone(),
                accepted: self.html_accept(),
            })
        }
    }
}

/// Where a document is in its verification lifecycle.
///
/// Transitions only move forward: `Uploaded → Processing → Verified`, or to
/// `Rejected` from any earlier state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DocumentStatus {
    Uploaded,
    Processing,
    Verified { credits: u32 },
    Rejected { reason: UploadError },
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Uploaded => "uploaded",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Verified { .. } => "verified",
            DocumentStatus::Rejected { .. } => "rejected",
        }
    }

    /// No further transitions will happen
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            DocumentStatus::Verified { .. } | DocumentStatus::Rejected { .. }
        )
    }

    pub fn credits(&self) -> Option<u32> {
        match self {
            DocumentStatus::Verified { credits } => Some(*credits),
            _ => None,
        }
    }
}

/// An entry of the upload list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub status: DocumentStatus,
    /// When the next transition is due
    #[serde(skip)]
    pub(crate) due_at: Option<DateTime<Utc>>,
}

impl UploadedDocument {
    pub fn size_label(&self) -> String {
        crate::format::file_size(self.size_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(FileMeta::new("Report.PDF", 1, "").extension(), Some(".pdf".to_string()));
        assert_eq!(FileMeta::new("noext", 1, "").extension(), None);
        assert_eq!(FileMeta::new(".hidden", 1, "").extension(), None);
    }

    #[test]
    fn test_credit_documents_filter() {
        let filter = AcceptFilter::CREDIT_DOCUMENTS;
        assert!(filter.accepts(&FileMeta::new("cert.pdf", 1, "application/pdf")));
        assert!(filter.accepts(&FileMeta::new("scan.JPEG", 1, "image/jpeg")));
        assert!(!filter.accepts(&FileMeta::new("notes.txt", 1, "text/plain")));
        assert!(!filter.accepts(&FileMeta::new("photo.gif", 1, "image/gif")));
    }

    #[test]
    fn test_image_filter_uses_mime() {
        let filter = AcceptFilter::IMAGES;
        assert!(filter.accepts(&FileMeta::new("pan", 1, "image/png")));
        assert!(!filter.accepts(&FileMeta::new("pan.png", 1, "")));
        assert_eq!(filter.html_accept(), "image/*");
    }

    #[test]
    fn test_check_reports_accept_list() {
        let err = AcceptFilter::AADHAAR_OFFLINE
            .check(&FileMeta::new("aadhaar.pdf", 1, "application/pdf"))
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedType {
                name: "aadhaar.pdf".to_string(),
                accepted: ".xml,.zip".to_string(),
            }
        );
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_for_name("a.png"), Some("image/png"));
        assert_eq!(mime_for_name("a.docx"), None);
    }
}
