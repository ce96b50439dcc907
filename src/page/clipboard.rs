//! Copy-to-clipboard with a timed acknowledgment.
//!
//! ERROR HANDLING
//! ==============
//! Copy failures are logged and swallowed; the caller only observes that no
//! acknowledgment was produced. Matches the original, which console-logs the
//! failure and leaves the button untouched.

use std::time::Duration;

use tracing::error;

/// Button label shown while the acknowledgment is live.
pub const ACK_LABEL: &str = "Copied!";

/// How long the acknowledgment stays up before the label reverts.
pub const ACK_DURATION: Duration = Duration::from_secs(2);

/// Write half of a clipboard. The seam that keeps tests off the real one.
pub trait ClipboardWrite {
    /// Place `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardWriteError>;
}

/// A failed clipboard write, already reduced to its message.
#[derive(Debug, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardWriteError(pub String);

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open the system clipboard.
    ///
    /// # Errors
    ///
    /// Fails on headless environments with no clipboard to open.
    pub fn new() -> Result<Self, ClipboardWriteError> {
        let inner = arboard::Clipboard::new().map_err(|e| ClipboardWriteError(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardWrite for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardWriteError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardWriteError(e.to_string()))
    }
}

/// The visual acknowledgment for a completed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyAck {
    pub label: &'static str,
    pub duration: Duration,
}

/// Copy a code block's text. Success yields the timed acknowledgment;
/// failure is logged and swallowed.
pub fn copy_code(clipboard: &mut impl ClipboardWrite, text: &str) -> Option<CopyAck> {
    match clipboard.write_text(text) {
        Ok(()) => Some(CopyAck { label: ACK_LABEL, duration: ACK_DURATION }),
        Err(e) => {
            error!(error = %e, "failed to copy code block");
            None
        }
    }
}

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;
