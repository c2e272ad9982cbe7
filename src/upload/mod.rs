//! Document upload and simulated verification

mod assessor;
mod document;
mod error;
mod pipeline;

pub use assessor::{Assessment, CreditAssessor, FixedAssessor, RandomAssessor};
pub use document::{
    mime_for_name, AcceptFilter, DocumentId, DocumentStatus, FileMeta, UploadedDocument,
};
pub use error::{UploadError, UploadResult};
pub use pipeline::{Banner, StatusChange, UploadPipeline, VerificationStep};
