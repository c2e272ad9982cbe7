//! # CarbonCredX
//!
//! Headless core of a carbon-credit tokenization demo: section navigation,
//! simulated document verification, a keyword-driven assistant, a KYC wizard,
//! a small global store and the mock data behind every page.
//!
//! Nothing here talks to a network. Simulated latency is a deadline against a
//! [`clock::Clock`]; whoever owns a state machine calls `advance(now)` when
//! the deadline passes. The browser front end does that with `gloo-timers`,
//! the terminal front end with `tokio`.
//!
//! ## Modules
//!
//! - [`navigation`]: current section and the mobile drawer
//! - [`upload`]: upload list and verification pipeline
//! - [`assistant`]: chat transcript and canned replies
//! - [`kyc`]: four-step identity wizard
//! - [`store`]: user, holdings and transactions with a pure reducer
//! - [`views`]: page data and local page state
//!
//! ## Quick Start
//!
//! ```rust
//! use carboncredx::clock::{Clock, ManualClock};
//! use carboncredx::config::SimulationConfig;
//! use carboncredx::upload::{FileMeta, RandomAssessor, UploadPipeline};
//!
//! let clock = ManualClock::at_epoch();
//! let config = SimulationConfig::default();
//! let mut pipeline = UploadPipeline::new(RandomAssessor::seeded(7, &config), &config);
//!
//! pipeline.select_files([FileMeta::new("certificate.pdf", 2048, "application/pdf")], clock.now());
//! assert!(pipeline.is_verifying());
//!
//! clock.advance(config.verification_delay());
//! pipeline.advance(clock.now());
//! assert!(pipeline.is_settled());
//! ```

pub mod assistant;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod format;
pub mod kyc;
pub mod navigation;
#[cfg(feature = "cli")]
pub mod runtime;
pub mod store;
pub mod upload;
pub mod views;

// Re-export top-level types for convenience
pub use assistant::{AssistantError, ChatMessage, ChatSession, Role, Topic};

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};

pub use clock::{Clock, ManualClock, SystemClock};

pub use config::{Config, ConfigError, LoggingConfig, SimulationConfig, WalletConfig};

pub use kyc::{KycDocument, KycForm, KycStep};

pub use navigation::{NavDrawer, Route, Router, Section};

pub use store::{AppStore, StoreAction};

pub use upload::{
    Banner, DocumentId, DocumentStatus, FileMeta, RandomAssessor, UploadError, UploadPipeline,
    UploadedDocument,
};
