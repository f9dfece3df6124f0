// clipboard-privacy/src/transport/memory.rs
//! An in-process clipboard.
//!
//! Useful for library callers that want the redaction flow without touching the
//! OS clipboard, and as the transport double in tests. Reads and writes can be
//! made to fail to exercise the abort paths of a run.

use clipboard_privacy_core::ClipboardPrivacyError;
use std::sync::Mutex;

use super::ClipboardTransport;

#[derive(Debug, Default)]
struct MemoryState {
    content: String,
    writes: Vec<String>,
    reads: usize,
}

#[derive(Debug)]
pub struct MemoryTransport {
    name: String,
    available: bool,
    fail_reads: bool,
    /// Writes with this zero-based index fail.
    fail_write_at: Option<usize>,
    state: Mutex<MemoryState>,
}

impl MemoryTransport {
    pub fn with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: true,
            fail_reads: false,
            fail_write_at: None,
            state: Mutex::new(MemoryState {
                content: content.into(),
                ..MemoryState::default()
            }),
        }
    }

    /// A backend that reports itself missing and refuses every operation.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            available: false,
            ..Self::with_content(name, "")
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_write_at(mut self, index: usize) -> Self {
        self.fail_write_at = Some(index);
        self
    }

    /// Current clipboard content.
    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.lock().writes.clone()
    }

    pub fn read_count(&self) -> usize {
        self.lock().reads
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned lock only means a test thread panicked mid-write.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ClipboardTransport for MemoryTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn read(&self) -> Result<String, ClipboardPrivacyError> {
        if !self.available {
            return Err(ClipboardPrivacyError::ToolUnavailable(self.name.clone()));
        }
        if self.fail_reads {
            return Err(ClipboardPrivacyError::read_failure(&self.name, "simulated read failure"));
        }
        let mut state = self.lock();
        state.reads += 1;
        Ok(state.content.clone())
    }

    fn write(&self, text: &str) -> Result<(), ClipboardPrivacyError> {
        if !self.available {
            return Err(ClipboardPrivacyError::ToolUnavailable(self.name.clone()));
        }
        let mut state = self.lock();
        let index = state.writes.len();
        if self.fail_write_at == Some(index) {
            return Err(ClipboardPrivacyError::write_failure(&self.name, "simulated write failure"));
        }
        state.content = text.to_string();
        state.writes.push(text.to_string());
        Ok(())
    }
}
