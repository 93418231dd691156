use std::fmt;
use std::time::Duration;

use ag_core::{Error, Result};

use crate::project::ClipboardPayload;

/// How long a "copied" acknowledgement stays visible before reverting.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2500);

/// A clipboard that can take a rich (HTML + plain text) entry or plain text alone.
pub trait ClipboardSink {
    /// Write both representations as one clipboard entry.
    fn write_rich(&mut self, html: &str, plain_text: &str) -> Result<()>;

    fn write_plain(&mut self, plain_text: &str) -> Result<()>;
}

/// The platform clipboard.
pub struct SystemClipboard {
    clipboard: std::result::Result<arboard::Clipboard, String>,
    hand_off: bool,
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("clipboard", &self.clipboard.as_ref().map(|_| "<arboard::Clipboard>"))
            .field("hand_off", &self.hand_off)
            .finish()
    }
}

impl SystemClipboard {
    /// Opening never fails; an unavailable clipboard surfaces as write errors.
    pub fn new() -> Self {
        let clipboard = arboard::Clipboard::new().map_err(|e| e.to_string());
        if let Err(e) = &clipboard {
            tracing::debug!("Clipboard unavailable: {}", e);
        }
        Self {
            clipboard,
            hand_off: false,
        }
    }

    /// A clipboard for a process that exits right after copying.
    ///
    /// On X11 and Wayland the writing process owns the contents and they vanish with it, so
    /// writes block until another client (a clipboard manager, or the next copy) takes over.
    pub fn for_short_lived_process() -> Self {
        Self {
            hand_off: true,
            ..Self::new()
        }
    }

    pub fn hands_off(&self) -> bool {
        self.hand_off
    }
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn setter(clipboard: &mut arboard::Clipboard, hand_off: bool) -> arboard::Set<'_> {
    use arboard::SetExtLinux;

    if hand_off {
        tracing::info!("📋 Holding clipboard contents until another client takes them over");
        clipboard.set().wait()
    } else {
        clipboard.set()
    }
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn setter(clipboard: &mut arboard::Clipboard, _hand_off: bool) -> arboard::Set<'_> {
    clipboard.set()
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_rich(&mut self, html: &str, plain_text: &str) -> Result<()> {
        let clipboard = self.clipboard.as_mut().map_err(|e| Error::ClipboardRichWrite(e.clone()))?;
        setter(clipboard, self.hand_off)
            .html(html, Some(plain_text))
            .map_err(|e| Error::ClipboardRichWrite(e.to_string()))
    }

    fn write_plain(&mut self, plain_text: &str) -> Result<()> {
        let clipboard = self.clipboard.as_mut().map_err(|e| Error::ClipboardPlainWrite(e.clone()))?;
        setter(clipboard, self.hand_off)
            .text(plain_text)
            .map_err(|e| Error::ClipboardPlainWrite(e.to_string()))
    }
}

#[derive(Debug)]
pub enum CopyOutcome {
    Rich,
    /// The rich write was rejected, the plain text fallback went through.
    PlainOnly { rich_error: Error },
    Failed { rich_error: Error, plain_error: Error },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        !matches!(self, CopyOutcome::Failed { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            CopyOutcome::Rich => "Copied!".to_string(),
            CopyOutcome::PlainOnly { rich_error } => rich_error.user_message(),
            CopyOutcome::Failed { plain_error, .. } => plain_error.user_message(),
        }
    }
}

/// Copy `payload`, falling back to plain text when the rich write is rejected.
/// Failures are reported through the outcome, never returned as errors.
pub fn copy_payload(sink: &mut dyn ClipboardSink, payload: &ClipboardPayload) -> CopyOutcome {
    let rich_error = match sink.write_rich(&payload.html, &payload.plain_text) {
        Ok(()) => {
            tracing::info!("📋 Copied article as rich text ({} bytes of HTML)", payload.html.len());
            return CopyOutcome::Rich;
        }
        Err(e) => e,
    };
    tracing::warn!("Rich clipboard write failed, falling back to plain text: {}", rich_error);

    match sink.write_plain(&payload.plain_text) {
        Ok(()) => CopyOutcome::PlainOnly { rich_error },
        Err(plain_error) => {
            tracing::error!("Plain clipboard write failed: {}", plain_error);
            CopyOutcome::Failed { rich_error, plain_error }
        }
    }
}
