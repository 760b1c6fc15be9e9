use anyhow::Context;
use arboard::Clipboard;
use client_core::ClipboardSink;

/// System clipboard, opened on first use. The handle is kept for the session
/// because some platforms drop copied text when it closes.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().context("clipboard unavailable")?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_owned())
            .context("failed to write clipboard")
    }
}
