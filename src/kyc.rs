//! KYC wizard
//!
//! Four fixed steps with bounded forward/back navigation. Field formats are
//! hinted, never enforced; any step can be passed with empty fields.

use serde::Serialize;

use crate::store::KycStatus;
use crate::upload::{AcceptFilter, FileMeta, UploadError};

pub const PAN_MAX_LEN: usize = 10;
pub const AADHAAR_MAX_LEN: usize = 12;

const PAN_PATTERN: &str = r"^[A-Z]{5}[0-9]{4}[A-Z]$";
const AADHAAR_PATTERN: &str = r"^[0-9]{12}$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum KycStep {
    PersonalInformation = 1,
    DocumentUpload = 2,
    BiometricVerification = 3,
    VerificationComplete = 4,
}

impl KycStep {
    pub fn all() -> [KycStep; 4] {
        [
            KycStep::PersonalInformation,
            KycStep::DocumentUpload,
            KycStep::BiometricVerification,
            KycStep::VerificationComplete,
        ]
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::all().into_iter().find(|s| s.number() == n)
    }

    pub fn title(self) -> &'static str {
        match self {
            KycStep::PersonalInformation => "Personal Information",
            KycStep::DocumentUpload => "Document Upload",
            KycStep::BiometricVerification => "Biometric Verification",
            KycStep::VerificationComplete => "Verification Complete",
        }
    }

    fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    fn prev(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(self)
    }
}

/// Identity document slots on step 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KycDocument {
    Aadhaar,
    Pan,
}

impl KycDocument {
    pub fn accept_filter(self) -> AcceptFilter {
        match self {
            KycDocument::Aadhaar => AcceptFilter::AADHAAR_OFFLINE,
            KycDocument::Pan => AcceptFilter::IMAGES,
        }
    }
}

/// Text fields of step 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalDetails {
    pub full_name: String,
    pub date_of_birth: String,
    pub address: String,
    pub pan_number: String,
    pub aadhaar_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KycForm {
    step: KycStep,
    details: PersonalDetails,
    aadhaar_file: Option<FileMeta>,
    pan_file: Option<FileMeta>,
    selfie_captured: bool,
    show_aadhaar: bool,
}

impl Default for KycForm {
    fn default() -> Self {
        Self::new()
    }
}

impl KycForm {
    pub fn new() -> Self {
        Self {
            step: KycStep::PersonalInformation,
            details: PersonalDetails::default(),
            aadhaar_file: None,
            pan_file: None,
            selfie_captured: false,
            show_aadhaar: false,
        }
    }

    pub fn step(&self) -> KycStep {
        self.step
    }

    /// Move forward, staying on the last step
    pub fn next(&mut self) -> KycStep {
        let next = self.step.next();
        if next != self.step {
            tracing::debug!(from = self.step.number(), to = next.number(), "KYC step");
            if next == KycStep::VerificationComplete {
                tracing::info!("KYC verification completed");
            }
        }
        self.step = next;
        self.step
    }

    /// Move back, staying on the first step
    pub fn prev(&mut self) -> KycStep {
        self.step = self.step.prev();
        self.step
    }

    /// Steps at or before the current one are highlighted in the progress bar
    pub fn is_reached(&self, step: KycStep) -> bool {
        step <= self.step
    }

    pub fn can_go_back(&self) -> bool {
        self.step != KycStep::PersonalInformation
    }

    /// Label of the forward button, absent on the final panel
    pub fn primary_label(&self) -> Option<&'static str> {
        match self.step {
            KycStep::PersonalInformation | KycStep::DocumentUpload => Some("Next"),
            KycStep::BiometricVerification => Some("Complete Verification"),
            KycStep::VerificationComplete => None,
        }
    }

    pub fn status(&self) -> KycStatus {
        if self.step == KycStep::VerificationComplete {
            KycStatus::Verified
        } else {
            KycStatus::Pending
        }
    }

    pub fn details(&self) -> &PersonalDetails {
        &self.details
    }

    pub fn set_full_name(&mut self, value: &str) {
        self.details.full_name = value.to_string();
    }

    pub fn set_date_of_birth(&mut self, value: &str) {
        self.details.date_of_birth = value.to_string();
    }

    pub fn set_address(&mut self, value: &str) {
        self.details.address = value.to_string();
    }

    /// Stores at most ten characters
    pub fn set_pan_number(&mut self, value: &str) {
        self.details.pan_number = value.chars().take(PAN_MAX_LEN).collect();
    }

    /// Stores at most twelve characters
    pub fn set_aadhaar_number(&mut self, value: &str) {
        self.details.aadhaar_number = value.chars().take(AADHAAR_MAX_LEN).collect();
    }

    pub fn toggle_aadhaar_visibility(&mut self) {
        self.show_aadhaar = !self.show_aadhaar;
    }

    pub fn is_aadhaar_visible(&self) -> bool {
        self.show_aadhaar
    }

    /// Aadhaar number as displayed in the input
    pub fn aadhaar_display(&self) -> String {
        if self.show_aadhaar {
            self.details.aadhaar_number.clone()
        } else {
            "•".repeat(self.details.aadhaar_number.chars().count())
        }
    }

    pub fn pan_hint(&self) -> Option<&'static str> {
        format_hint(&self.details.pan_number, PAN_PATTERN, "PAN should look like ABCDE1234F")
    }

    pub fn aadhaar_hint(&self) -> Option<&'static str> {
        format_hint(
            &self.details.aadhaar_number,
            AADHAAR_PATTERN,
            "Aadhaar number should be 12 digits",
        )
    }

    /// Attach a file to a document slot; a rejected file leaves the slot unchanged
    pub fn attach(&mut self, slot: KycDocument, file: FileMeta) -> Result<(), UploadError> {
        slot.accept_filter().check(&file)?;
        tracing::info!(slot = ?slot, name = %file.name, "KYC document attached");
        match slot {
            KycDocument::Aadhaar => self.aadhaar_file = Some(file),
            KycDocument::Pan => self.pan_file = Some(file),
        }
        Ok(())
    }

    pub fn document(&self, slot: KycDocument) -> Option<&FileMeta> {
        match slot {
            KycDocument::Aadhaar => self.aadhaar_file.as_ref(),
            KycDocument::Pan => self.pan_file.as_ref(),
        }
    }

    pub fn capture_selfie(&mut self) {
        self.selfie_captured = true;
    }

    pub fn has_selfie(&self) -> bool {
        self.selfie_captured
    }
}

/// Hint text when a non-empty value does not match `pattern`
fn format_hint(value: &str, pattern: &str, hint: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    let re = regex::Regex::new(pattern).ok()?;
    if re.is_match(value) {
        None
    } else {
        Some(hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_bounds() {
        let mut form = KycForm::new();
        assert_eq!(form.prev(), KycStep::PersonalInformation);
        assert!(!form.can_go_back());

        for _ in 0..10 {
            form.next();
        }
        assert_eq!(form.step(), KycStep::VerificationComplete);
        assert_eq!(form.step().number(), 4);
    }

    #[test]
    fn test_next_from_three_goes_to_four() {
        let mut form = KycForm::new();
        form.next();
        form.next();
        assert_eq!(form.primary_label(), Some("Complete Verification"));
        assert_eq!(form.next(), KycStep::VerificationComplete);
        assert_eq!(form.primary_label(), None);
        assert_eq!(form.status(), KycStatus::Verified);
    }

    #[test]
    fn test_no_blocking_validation() {
        let mut form = KycForm::new();
        assert_eq!(form.primary_label(), Some("Next"));
        assert_eq!(form.next(), KycStep::DocumentUpload);
        assert_eq!(form.status(), KycStatus::Pending);
    }

    #[test]
    fn test_progress_highlight() {
        let mut form = KycForm::new();
        form.next();
        assert!(form.is_reached(KycStep::PersonalInformation));
        assert!(form.is_reached(KycStep::DocumentUpload));
        assert!(!form.is_reached(KycStep::BiometricVerification));
    }

    #[test]
    fn test_field_length_limits() {
        let mut form = KycForm::new();
        form.set_pan_number("ABCDE1234FXYZ");
        form.set_aadhaar_number("1234567890123456");
        assert_eq!(form.details().pan_number, "ABCDE1234F");
        assert_eq!(form.details().aadhaar_number, "123456789012");
    }

    #[test]
    fn test_aadhaar_masking() {
        let mut form = KycForm::new();
        form.set_aadhaar_number("123456789012");
        assert_eq!(form.aadhaar_display(), "••••••••••••");
        form.toggle_aadhaar_visibility();
        assert_eq!(form.aadhaar_display(), "123456789012");
    }

    #[test]
    fn test_format_hints() {
        let mut form = KycForm::new();
        assert_eq!(form.pan_hint(), None);
        form.set_pan_number("abc");
        assert!(form.pan_hint().is_some());
        form.set_pan_number("ABCDE1234F");
        assert_eq!(form.pan_hint(), None);

        form.set_aadhaar_number("1234 5678");
        assert!(form.aadhaar_hint().is_some());
        form.set_aadhaar_number("123456789012");
        assert_eq!(form.aadhaar_hint(), None);
    }

    #[test]
    fn test_document_slots() {
        let mut form = KycForm::new();
        assert!(form
            .attach(KycDocument::Aadhaar, FileMeta::new("ekyc.zip", 10, "application/zip"))
            .is_ok());
        assert!(form
            .attach(KycDocument::Pan, FileMeta::new("pan.pdf", 10, "application/pdf"))
            .is_err());
        assert!(form
            .attach(KycDocument::Pan, FileMeta::new("pan.jpg", 10, "image/jpeg"))
            .is_ok());
        assert_eq!(form.document(KycDocument::Aadhaar).unwrap().name, "ekyc.zip");

        assert!(!form.has_selfie());
        form.capture_selfie();
        assert!(form.has_selfie());
    }
}
