//! Copy action for code blocks and the notice shown after it.

use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard rejected the text: {0}")]
    Rejected(String),
}

/// System clipboard as seen by a host.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Text placed on the clipboard for a code block: one trailing newline is
/// dropped, everything else is kept verbatim.
pub fn copy_text_for(code: &str) -> &str {
    code.strip_suffix('\n').unwrap_or(code)
}

pub async fn copy_code<C: Clipboard>(clipboard: &C, code: &str) -> Result<(), ClipboardError> {
    let text = copy_text_for(code);
    match clipboard.set_text(text).await {
        Ok(()) => {
            log::debug!("copied {} bytes of code", text.len());
            Ok(())
        }
        Err(e) => {
            log::warn!("failed to copy code block: {e}");
            Err(e)
        }
    }
}

/// Transient "Copied to clipboard" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    shown_at: Instant,
}

impl Toast {
    pub const DURATION: Duration = Duration::from_secs(2);

    pub fn show(now: Instant) -> Self {
        Self { shown_at: now }
    }

    pub fn hides_at(&self) -> Instant {
        self.shown_at + Self::DURATION
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.hides_at()
    }
}
