//! Clipboard seam
//!
//! Views copy identifiers (wallet address, token id) through [`Clipboard`] so
//! the browser clipboard can be swapped for an in-memory one.

use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Records every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut writes = self
            .writes
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        writes.push(text.to_string());
        Ok(())
    }
}

/// Terminal clipboard via the OSC 52 escape sequence
#[cfg(feature = "cli")]
pub struct TerminalClipboard<W> {
    out: Mutex<W>,
}

#[cfg(feature = "cli")]
impl TerminalClipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[cfg(feature = "cli")]
impl<W: std::io::Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

#[cfg(feature = "cli")]
impl<W: std::io::Write> Clipboard for TerminalClipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use base64::Engine;

        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        let mut out = self
            .out
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        write!(out, "\x1b]52;c;{}\x07", encoded)
            .and_then(|_| out.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Copy `text`, logging the outcome
pub fn copy(clipboard: &dyn Clipboard, text: &str) -> Result<(), ClipboardError> {
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::info!(text, "Copied to clipboard");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Copy to clipboard failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoClipboard;

    impl Clipboard for NoClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    #[test]
    fn test_memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        copy(&clipboard, "a").unwrap();
        copy(&clipboard, "b").unwrap();
        assert_eq!(clipboard.writes(), vec!["a", "b"]);
        assert_eq!(clipboard.last().as_deref(), Some("b"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_terminal_clipboard_escape() {
        let clipboard = TerminalClipboard::new(Vec::new());
        clipboard.write_text("CCX-001").unwrap();
        let written = String::from_utf8(clipboard.into_inner().unwrap()).unwrap();
        assert_eq!(written, "\x1b]52;c;Q0NYLTAwMQ==\x07");
    }

    #[test]
    fn test_copy_surfaces_errors() {
        assert_eq!(copy(&NoClipboard, "x"), Err(ClipboardError::Unavailable));
    }
}
