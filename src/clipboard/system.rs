//! System clipboard access via arboard

/// Plain-text access to the OS clipboard
///
/// Failures are logged and reported as `None`/`false`; a missing clipboard
/// (headless session) is not fatal.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    pub fn read_text(&mut self) -> Option<String> {
        let clipboard = self.inner.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to read clipboard: {}", e);
                None
            }
        }
    }

    pub fn write_text(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.inner.as_mut() else {
            return false;
        };
        match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to write clipboard: {}", e);
                false
            }
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("available", &self.is_available())
            .finish()
    }
}
