//! Credit assessment
//!
//! Stands in for OCR and validation of a carbon-credit certificate. The
//! pipeline asks the assessor once per document when processing finishes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::document::UploadedDocument;
use crate::config::SimulationConfig;

/// Outcome of assessing one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    Verified { credits: u32 },
    Rejected,
}

/// Decides whether a processed document verifies and how many credits it carries
pub trait CreditAssessor {
    fn assess(&mut self, document: &UploadedDocument) -> Assessment;
}

/// Random credits in a configured range, with an optional rejection rate
#[derive(Debug, Clone)]
pub struct RandomAssessor {
    rng: StdRng,
    min_credits: u32,
    max_credits: u32,
    failure_rate: f64,
}

impl RandomAssessor {
    /// Seed from `config.seed`, or from entropy when unset
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config)
    }

    pub fn seeded(seed: u64, config: &SimulationConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }

    fn with_rng(rng: StdRng, config: &SimulationConfig) -> Self {
        let (min_credits, max_credits) = config.credit_range();
        Self {
            rng,
            min_credits,
            max_credits,
            failure_rate: config.failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl CreditAssessor for RandomAssessor {
    fn assess(&mut self, _document: &UploadedDocument) -> Assessment {
        if self.failure_rate > 0.0 && self.rng.gen_bool(self.failure_rate) {
            return Assessment::Rejected;
        }
        Assessment::Verified {
            credits: self.rng.gen_range(self.min_credits..=self.max_credits),
        }
    }
}

/// Returns the same outcome every time
#[derive(Debug, Clone, Copy)]
pub struct FixedAssessor(pub Assessment);

impl CreditAssessor for FixedAssessor {
    fn assess(&mut self, _document: &UploadedDocument) -> Assessment {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::document::{DocumentId, DocumentStatus};
    use chrono::{DateTime, Utc};

    fn document() -> UploadedDocument {
        UploadedDocument {
            id: DocumentId(1),
            name: "cert.pdf".to_string(),
            size_bytes: 1024,
            mime_type: "application/pdf".to_string(),
            uploaded_at: DateTime::<Utc>::UNIX_EPOCH,
            status: DocumentStatus::Processing,
            due_at: None,
        }
    }

    #[test]
    fn test_random_credits_within_range() {
        let mut assessor = RandomAssessor::seeded(7, &SimulationConfig::default());
        for _ in 0..500 {
            match assessor.assess(&document()) {
                Assessment::Verified { credits } => assert!((100..=1099).contains(&credits)),
                Assessment::Rejected => panic!("default config never rejects"),
            }
        }
    }

    #[test]
    fn test_same_seed_same_credits() {
        let config = SimulationConfig::default();
        let mut a = RandomAssessor::seeded(42, &config);
        let mut b = RandomAssessor::seeded(42, &config);
        for _ in 0..10 {
            assert_eq!(a.assess(&document()), b.assess(&document()));
        }
    }

    #[test]
    fn test_failure_rate_one_always_rejects() {
        let config = SimulationConfig {
            failure_rate: 1.0,
            ..SimulationConfig::default()
        };
        let mut assessor = RandomAssessor::seeded(1, &config);
        assert_eq!(assessor.assess(&document()), Assessment::Rejected);
    }
}
