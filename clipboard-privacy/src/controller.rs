// clipboard-privacy/src/controller.rs
//! The sanitize → paste → restore state machine.
//!
//! One run walks `Idle → Read → Sanitize → WriteSanitized → SimulatePaste →
//! RestoreOriginal → Idle`. Each step is attempted at most once; there are no
//! retries. A failed read leaves the clipboard untouched. A failed write of
//! the sanitized text leaves it in an unspecified state. When the paste
//! cannot be simulated the sanitized text stays on the clipboard and no
//! restore is attempted.
//!
//! The clipboard is shared with every other process on the desktop. Restoring
//! is a plain overwrite, so anything copied between the sanitized write and
//! the restore is lost.

use clipboard_privacy_core::{ClipboardPrivacyError, SanitizationEngine};
use log::{debug, info};
use std::fmt;
use std::thread;
use std::time::Duration;

use crate::injector::PasteSimulator;
use crate::transport::ClipboardTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteState {
    Idle,
    Read,
    Sanitize,
    WriteSanitized,
    SimulatePaste,
    RestoreOriginal,
}

impl fmt::Display for PasteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The paste was simulated and the original content is back.
    Restored,
    /// The paste was not simulated; the sanitized text is on the clipboard.
    LeftSanitized,
}

pub struct PasteController<'a> {
    transport: &'a dyn ClipboardTransport,
    simulator: &'a dyn PasteSimulator,
    engine: &'a dyn SanitizationEngine,
    restore_delay: Duration,
    state: PasteState,
    visited: Vec<PasteState>,
}

impl<'a> PasteController<'a> {
    pub fn new(
        transport: &'a dyn ClipboardTransport,
        simulator: &'a dyn PasteSimulator,
        engine: &'a dyn SanitizationEngine,
    ) -> Self {
        Self {
            transport,
            simulator,
            engine,
            restore_delay: Duration::ZERO,
            state: PasteState::Idle,
            visited: Vec::new(),
        }
    }

    /// Wait between a successful paste and the restore.
    pub fn with_restore_delay(mut self, delay: Duration) -> Self {
        self.restore_delay = delay;
        self
    }

    pub fn state(&self) -> PasteState {
        self.state
    }

    /// States entered by the last run, in order (excluding the final `Idle`).
    pub fn visited(&self) -> &[PasteState] {
        &self.visited
    }

    /// Performs one full run and returns to `Idle`, whatever the result.
    pub fn run(&mut self) -> Result<RunOutcome, ClipboardPrivacyError> {
        self.visited.clear();
        let result = self.drive();
        self.state = PasteState::Idle;
        match &result {
            Ok(outcome) => debug!("Run finished: {:?}", outcome),
            Err(e) => {
                let last = self.visited.last().copied().unwrap_or(PasteState::Idle);
                debug!("Run aborted in state {}: {}", last, e);
            }
        }
        result
    }

    fn enter(&mut self, state: PasteState) {
        debug!("{} -> {}", self.state, state);
        self.state = state;
        self.visited.push(state);
    }

    fn drive(&mut self) -> Result<RunOutcome, ClipboardPrivacyError> {
        self.enter(PasteState::Read);
        let original = self.transport.read()?;

        self.enter(PasteState::Sanitize);
        let (sanitized, summary) = self.engine.sanitize_with_summary(&original);
        let total: usize = summary.iter().map(|s| s.occurrences).sum();
        info!("Redacted {} match(es) across {} rule(s).", total, summary.len());

        self.enter(PasteState::WriteSanitized);
        self.transport.write(&sanitized)?;

        self.enter(PasteState::SimulatePaste);
        if !self.simulator.simulate_paste() {
            info!(
                "Paste not simulated by '{}'; leaving sanitized content on the clipboard.",
                self.simulator.name()
            );
            return Ok(RunOutcome::LeftSanitized);
        }

        self.enter(PasteState::RestoreOriginal);
        if !self.restore_delay.is_zero() {
            thread::sleep(self.restore_delay);
        }
        self.transport.write(&original)?;
        Ok(RunOutcome::Restored)
    }
}
