use dioxus::prelude::*;
use lectern_engine::{Clipboard, ClipboardError};

const WRITE_CLIPBOARD_JS: &str = r#"
    const text = await dioxus.recv();
    await navigator.clipboard.writeText(text);
    return true;
"#;

/// The webview's `navigator.clipboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewClipboard;

impl Clipboard for WebviewClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let eval = document::eval(WRITE_CLIPBOARD_JS);
        eval.send(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        eval.join::<bool>()
            .await
            .map_err(|e| ClipboardError::Rejected(e.to_string()))?;
        Ok(())
    }
}
