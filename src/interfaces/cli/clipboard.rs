//! Clipboard sink used by `short`

use crate::errors::Result;

pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard (arboard)
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        use crate::errors::ShrtError;

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShrtError::clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ShrtError::clipboard(e.to_string()))
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<()> {
        tracing::debug!("Built without clipboard support, skipping copy");
        Ok(())
    }
}
