//! Verification Pipeline
//!
//! Owns the upload list and moves each document through
//! `uploaded → processing → verified` (or `rejected`).
//!
//! Nothing here sleeps. Every pending transition carries a deadline, and the
//! owner calls [`UploadPipeline::advance`] with the current time whenever it
//! wakes up; [`UploadPipeline::next_due`] says when that should be.
//!
//! ```text
//! select_files ──► Uploaded ──(pickup delay)──► Processing ──(verification delay)──► Verified
//!       │                                            └──────────────(assessor)──────► Rejected
//!       └── invalid type / size ───────────────────────────────────────────────────► Rejected
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::assessor::{Assessment, CreditAssessor};
use super::document::{AcceptFilter, DocumentId, DocumentStatus, FileMeta, UploadedDocument};
use super::error::{UploadError, UploadResult};
use crate::config::SimulationConfig;

/// Status line shown under the upload list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Banner {
    Processing,
    Verified,
    Rejected(String),
}

impl Banner {
    pub fn message(&self) -> String {
        match self {
            Banner::Processing => "Processing document with AI...".to_string(),
            Banner::Verified => "Document verified successfully!".to_string(),
            Banner::Rejected(reason) => format!("Verification failed: {}", reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Banner::Verified)
    }
}

/// One transition that happened during [`UploadPipeline::advance`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
    pub id: DocumentId,
    pub name: String,
    pub status: DocumentStatus,
    pub at: DateTime<Utc>,
}

/// A row of the four-step progress panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
    /// Work for this step is in flight
    pub active: bool,
}

/// Upload list plus the simulated verifier
pub struct UploadPipeline<A> {
    documents: Vec<UploadedDocument>,
    next_id: u64,
    assessor: A,
    filter: AcceptFilter,
    pickup_delay: Duration,
    verification_delay: Duration,
    max_file_size: u64,
    banner: Option<Banner>,
}

impl<A: CreditAssessor> UploadPipeline<A> {
    pub fn new(assessor: A, config: &SimulationConfig) -> Self {
        Self {
            documents: Vec::new(),
            next_id: 1,
            assessor,
            filter: AcceptFilter::CREDIT_DOCUMENTS,
            pickup_delay: config.pickup_delay(),
            verification_delay: config.verification_delay(),
            max_file_size: config.max_file_size_bytes,
            banner: None,
        }
    }

    /// Add one entry per selected file.
    ///
    /// Files that fail the type or size checks are listed as rejected so the
    /// reason shows inline; the rest start their verification countdown.
    pub fn select_files<I>(&mut self, files: I, now: DateTime<Utc>) -> Vec<DocumentId>
    where
        I: IntoIterator<Item = FileMeta>,
    {
        files.into_iter().map(|file| self.admit(file, now)).collect()
    }

    fn admit(&mut self, file: FileMeta, now: DateTime<Utc>) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;

        let (status, due_at) = match self.validate(&file) {
            Err(reason) => {
                tracing::warn!(document = %id, error = %reason, "Upload rejected");
                self.banner = Some(Banner::Rejected(reason.to_string()));
                (DocumentStatus::Rejected { reason }, None)
            }
            Ok(()) if self.pickup_delay <= Duration::zero() => {
                self.banner = Some(Banner::Processing);
                (DocumentStatus::Processing, Some(now + self.verification_delay))
            }
            Ok(()) => (DocumentStatus::Uploaded, Some(now + self.pickup_delay)),
        };

        tracing::info!(
            document = %id,
            name = %file.name,
            size = file.size_bytes,
            status = status.label(),
            "Document added"
        );

        self.documents.push(UploadedDocument {
            id,
            name: file.name,
            size_bytes: file.size_bytes,
            mime_type: file.mime_type,
            uploaded_at: now,
            status,
            due_at,
        });
        id
    }

    fn validate(&self, file: &FileMeta) -> UploadResult<()> {
        self.filter.check(file)?;
        if file.size_bytes == 0 {
            return Err(UploadError::Empty {
                name: file.name.clone(),
            });
        }
        if file.size_bytes > self.max_file_size {
            return Err(UploadError::TooLarge {
                name: file.name.clone(),
                size: file.size_bytes,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Apply every transition due at or before `now`, in the order they fell due
    pub fn advance(&mut self, now: DateTime<Utc>) -> Vec<StatusChange> {
        let mut changes = Vec::new();

        for doc in self.documents.iter_mut() {
            while let Some(due) = doc.due_at.filter(|due| *due <= now) {
                match doc.status {
                    DocumentStatus::Uploaded => {
                        doc.status = DocumentStatus::Processing;
                        doc.due_at = Some(due + self.verification_delay);
                    }
                    DocumentStatus::Processing => {
                        doc.status = match self.assessor.assess(doc) {
                            Assessment::Verified { credits } => {
                                DocumentStatus::Verified { credits }
                            }
                            Assessment::Rejected => DocumentStatus::Rejected {
                                reason: UploadError::VerificationFailed {
                                    name: doc.name.clone(),
                                },
                            },
                        };
                        doc.due_at = None;
                    }
                    _ => {
                        doc.due_at = None;
                        continue;
                    }
                }

                tracing::debug!(
                    document = %doc.id,
                    status = doc.status.label(),
                    "Document advanced"
                );
                changes.push(StatusChange {
                    id: doc.id,
                    name: doc.name.clone(),
                    status: doc.status.clone(),
                    at: due,
                });
            }
        }

        changes.sort_by_key(|c| (c.at, c.id));
        if let Some(last) = changes.last() {
            self.banner = Some(match &last.status {
                DocumentStatus::Verified { .. } => Banner::Verified,
                DocumentStatus::Rejected { reason } => Banner::Rejected(reason.to_string()),
                _ => Banner::Processing,
            });
        }
        changes
    }

    /// Earliest pending deadline
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.documents.iter().filter_map(|d| d.due_at).min()
    }

    /// Remove exactly the entry with `id`
    pub fn remove(&mut self, id: DocumentId) -> UploadResult<UploadedDocument> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or(UploadError::NotFound(id))?;
        let removed = self.documents.remove(index);
        tracing::info!(document = %id, name = %removed.name, "Document removed");
        Ok(removed)
    }

    pub fn documents(&self) -> &[UploadedDocument] {
        &self.documents
    }

    pub fn get(&self, id: DocumentId) -> Option<&UploadedDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Any document currently in processing
    pub fn is_verifying(&self) -> bool {
        self.documents
            .iter()
            .any(|d| d.status == DocumentStatus::Processing)
    }

    /// Every document has reached a final status
    pub fn is_settled(&self) -> bool {
        self.documents.iter().all(|d| d.status.is_final())
    }

    pub fn total_credits(&self) -> u64 {
        self.documents
            .iter()
            .filter_map(|d| d.status.credits())
            .map(u64::from)
            .sum()
    }

    pub fn accept_filter(&self) -> AcceptFilter {
        self.filter
    }

    pub fn verification_steps(&self) -> [VerificationStep; 4] {
        let any_uploaded = !self.documents.is_empty();
        let verifying = self.is_verifying();
        let any_verified = self.documents.iter().any(|d| d.status.credits().is_some());

        [
            VerificationStep {
                number: 1,
                title: "Document Upload",
                description: "PDF or image file uploaded",
                completed: any_uploaded,
                active: false,
            },
            VerificationStep {
                number: 2,
                title: "OCR Processing",
                description: "Extracting text and data from document",
                completed: verifying || any_verified,
                active: verifying,
            },
            VerificationStep {
                number: 3,
                title: "AI Validation",
                description: "Verifying carbon credit authenticity",
                completed: any_verified,
                active: false,
            },
            VerificationStep {
                number: 4,
                title: "Token Generation",
                description: "Creating blockchain tokens",
                completed: false,
                active: false,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use crate::upload::assessor::{FixedAssessor, RandomAssessor};

    fn pdf(name: &str) -> FileMeta {
        FileMeta::new(name, 512 * 1024, "application/pdf")
    }

    fn fixed(credits: u32) -> UploadPipeline<FixedAssessor> {
        UploadPipeline::new(
            FixedAssessor(Assessment::Verified { credits }),
            &SimulationConfig::default(),
        )
    }

    #[test]
    fn test_selection_starts_processing_immediately() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = fixed(250);

        let ids = pipeline.select_files([pdf("a.pdf")], clock.now());
        let doc = pipeline.get(ids[0]).unwrap();
        assert_eq!(doc.status, DocumentStatus::Processing);
        assert!(pipeline.is_verifying());
        assert_eq!(pipeline.banner(), Some(&Banner::Processing));
        assert_eq!(
            pipeline.next_due(),
            Some(clock.now() + Duration::milliseconds(3000))
        );
    }

    #[test]
    fn test_verifies_after_delay() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = fixed(250);
        let ids = pipeline.select_files([pdf("a.pdf")], clock.now());

        clock.advance(Duration::milliseconds(2999));
        assert!(pipeline.advance(clock.now()).is_empty());

        clock.advance(Duration::milliseconds(1));
        let changes = pipeline.advance(clock.now());
        assert_eq!(changes.len(), 1);
        assert_eq!(
            pipeline.get(ids[0]).unwrap().status,
            DocumentStatus::Verified { credits: 250 }
        );
        assert_eq!(
            pipeline.banner().map(|b| b.message()).as_deref(),
            Some("Document verified successfully!")
        );
        assert!(pipeline.is_settled());
        assert_eq!(pipeline.next_due(), None);
    }

    #[test]
    fn test_pickup_delay_keeps_uploaded_state() {
        let config = SimulationConfig {
            pickup_delay_ms: 1000,
            ..SimulationConfig::default()
        };
        let clock = ManualClock::at_epoch();
        let mut pipeline =
            UploadPipeline::new(FixedAssessor(Assessment::Verified { credits: 1 }), &config);
        let id = pipeline.select_files([pdf("a.pdf")], clock.now())[0];
        assert_eq!(pipeline.get(id).unwrap().status, DocumentStatus::Uploaded);
        assert_eq!(pipeline.banner(), None);

        clock.advance(Duration::milliseconds(1000));
        pipeline.advance(clock.now());
        assert_eq!(pipeline.get(id).unwrap().status, DocumentStatus::Processing);

        clock.advance(Duration::seconds(60));
        let changes = pipeline.advance(clock.now());
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].at, DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(4000));
        assert_eq!(pipeline.get(id).unwrap().status.credits(), Some(1));
    }

    #[test]
    fn test_late_wakeup_applies_every_step_in_order() {
        let config = SimulationConfig {
            pickup_delay_ms: 1000,
            ..SimulationConfig::default()
        };
        let clock = ManualClock::at_epoch();
        let mut pipeline =
            UploadPipeline::new(FixedAssessor(Assessment::Verified { credits: 5 }), &config);
        pipeline.select_files([pdf("a.pdf"), pdf("b.pdf")], clock.now());

        clock.advance(Duration::seconds(10));
        let changes = pipeline.advance(clock.now());
        let labels: Vec<_> = changes.iter().map(|c| (c.id.0, c.status.label())).collect();
        assert_eq!(
            labels,
            vec![
                (1, "processing"),
                (2, "processing"),
                (1, "verified"),
                (2, "verified"),
            ]
        );
    }

    #[test]
    fn test_n_files_n_entries_all_verified() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = UploadPipeline::new(
            RandomAssessor::seeded(3, &SimulationConfig::default()),
            &SimulationConfig::default(),
        );
        let files: Vec<_> = (0..5).map(|i| pdf(&format!("cert-{}.pdf", i))).collect();
        let ids = pipeline.select_files(files, clock.now());
        assert_eq!(ids.len(), 5);
        assert_eq!(pipeline.documents().len(), 5);

        clock.advance(Duration::seconds(3));
        pipeline.advance(clock.now());
        for doc in pipeline.documents() {
            let credits = doc.status.credits().expect("verified");
            assert!((100..=1099).contains(&credits));
        }
    }

    #[test]
    fn test_invalid_files_are_rejected_inline() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = fixed(1);
        let ids = pipeline.select_files(
            [
                FileMeta::new("notes.txt", 10, "text/plain"),
                FileMeta::new("huge.pdf", 11 * 1024 * 1024, "application/pdf"),
                FileMeta::new("empty.png", 0, "image/png"),
            ],
            clock.now(),
        );

        let reasons: Vec<_> = ids
            .iter()
            .map(|id| match &pipeline.get(*id).unwrap().status {
                DocumentStatus::Rejected { reason } => reason.clone(),
                other => panic!("expected rejection, got {:?}", other),
            })
            .collect();
        assert!(matches!(reasons[0], UploadError::UnsupportedType { .. }));
        assert!(matches!(reasons[1], UploadError::TooLarge { .. }));
        assert!(matches!(reasons[2], UploadError::Empty { .. }));
        assert_eq!(pipeline.next_due(), None);
        assert!(!pipeline.banner().unwrap().is_success());
    }

    #[test]
    fn test_simulated_failure() {
        let clock = ManualClock::at_epoch();
        let mut pipeline =
            UploadPipeline::new(FixedAssessor(Assessment::Rejected), &SimulationConfig::default());
        let id = pipeline.select_files([pdf("forged.pdf")], clock.now())[0];

        clock.advance(Duration::seconds(3));
        pipeline.advance(clock.now());
        assert!(matches!(
            pipeline.get(id).unwrap().status,
            DocumentStatus::Rejected {
                reason: UploadError::VerificationFailed { .. }
            }
        ));
        assert_eq!(
            pipeline.banner().unwrap().message(),
            "Verification failed: forged.pdf: verification failed, the document could not be validated"
        );
    }

    #[test]
    fn test_remove_exactly_one() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = fixed(1);
        let ids = pipeline.select_files([pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")], clock.now());

        let removed = pipeline.remove(ids[1]).unwrap();
        assert_eq!(removed.name, "b.pdf");
        let remaining: Vec<_> = pipeline.documents().iter().map(|d| d.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);

        assert_eq!(pipeline.remove(ids[1]), Err(UploadError::NotFound(ids[1])));
    }

    #[test]
    fn test_removed_document_never_transitions() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = fixed(1);
        let ids = pipeline.select_files([pdf("a.pdf")], clock.now());
        pipeline.remove(ids[0]).unwrap();

        clock.advance(Duration::seconds(5));
        assert!(pipeline.advance(clock.now()).is_empty());
    }

    #[test]
    fn test_verification_steps() {
        let clock = ManualClock::at_epoch();
        let mut pipeline = fixed(1);
        assert!(pipeline.verification_steps().iter().all(|s| !s.completed));

        pipeline.select_files([pdf("a.pdf")], clock.now());
        let steps = pipeline.verification_steps();
        assert!(steps[0].completed && steps[1].completed && steps[1].active);
        assert!(!steps[2].completed);

        clock.advance(Duration::seconds(3));
        pipeline.advance(clock.now());
        let steps = pipeline.verification_steps();
        assert!(steps[2].completed);
        assert!(!steps[1].active);
        assert!(!steps[3].completed);
    }

    #[test]
    fn test_long_delays_are_capped_at_one_day() {
        let config = SimulationConfig {
            verification_delay_ms: u64::MAX,
            ..SimulationConfig::default()
        };
        let now = DateTime::<Utc>::MAX_UTC - Duration::days(2);
        let mut pipeline =
            UploadPipeline::new(FixedAssessor(Assessment::Verified { credits: 1 }), &config);

        pipeline.select_files([pdf("a.pdf")], now);
        assert_eq!(pipeline.next_due(), Some(now + Duration::days(1)));
    }
}
