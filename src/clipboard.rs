//! Clipboard sinks for copied reports.

use crate::error::{CourseTimerError, CourseTimerResult};

/// Destination for copied report text.
pub trait ClipboardSink {
    fn write(&mut self, text: &str) -> CourseTimerResult<()>;
}

/// Desktop clipboard via `arboard`.
///
/// The clipboard is opened on first write, so constructing the sink never
/// fails even on machines without a display.
#[derive(Default)]
pub struct SystemClipboard {
    #[cfg(feature = "clipboard")]
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> CourseTimerResult<()> {
        let clipboard = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard,
            None => {
                let clipboard = arboard::Clipboard::new()
                    .map_err(|e| CourseTimerError::ClipboardFailure(e.to_string()))?;
                self.clipboard.insert(clipboard)
            }
        };

        clipboard
            .set_text(text)
            .map_err(|e| CourseTimerError::ClipboardFailure(e.to_string()))?;

        tracing::debug!("copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

#[cfg(not(feature = "clipboard"))]
impl ClipboardSink for SystemClipboard {
    fn write(&mut self, _text: &str) -> CourseTimerResult<()> {
        Err(CourseTimerError::ClipboardFailure(
            "built without clipboard support".to_string(),
        ))
    }
}

/// Keeps the last written text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write(&mut self, text: &str) -> CourseTimerResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
