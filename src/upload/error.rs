//! Upload error types
//!
//! Every variant renders as the inline message shown next to the document.

use thiserror::Error;

use super::document::DocumentId;

/// Errors raised while accepting or verifying a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// File extension or MIME type is outside the accept filter
    #[error("{name}: unsupported file type (accepted: {accepted})")]
    UnsupportedType { name: String, accepted: String },

    /// File exceeds the size limit
    #[error("{name}: file is {size} bytes, the limit is {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },

    /// Empty file
    #[error("{name}: file is empty")]
    Empty { name: String },

    /// The simulated verifier refused the document
    #[error("{name}: verification failed, the document could not be validated")]
    VerificationFailed { name: String },

    /// No document with this id is in the list
    #[error("Document not found: {0}")]
    NotFound(DocumentId),
}

impl serde::Serialize for UploadError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UploadError::TooLarge {
            name: "scan.pdf".to_string(),
            size: 20,
            limit: 10,
        };
        assert_eq!(err.to_string(), "scan.pdf: file is 20 bytes, the limit is 10 bytes");

        let err = UploadError::NotFound(DocumentId(7));
        assert_eq!(err.to_string(), "Document not found: #7");
    }
}
