//! State Management
//!
//! Global application state, deadline timers and the browser clipboard.

pub mod clipboard;
pub mod global;
pub mod timers;

pub use clipboard::BrowserClipboard;
pub use global::{provide_app_state, AppState, Notice, NoticeKind};
pub use timers::Wakeup;
