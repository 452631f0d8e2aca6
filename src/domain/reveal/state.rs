use std::sync::Arc;

use super::{RevealDelay, RevealSnapshot, RunId};

/// State machine of a single reveal run.
///
/// `revealed` only grows, one character per [`advance`](Self::advance), until it
/// reaches the character count of `target`. A new target means a new `RevealState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    run: RunId,
    target: Arc<str>,
    delay: RevealDelay,
    revealed: usize,
    byte_end: usize,
    total: usize,
}

impl RevealState {
    pub fn new(run: RunId, target: impl Into<Arc<str>>, delay: RevealDelay) -> Self {
        let target = target.into();
        let total = target.chars().count();
        Self {
            run,
            target,
            delay,
            revealed: 0,
            byte_end: 0,
            total,
        }
    }

    pub fn run(&self) -> RunId {
        self.run
    }

    pub fn delay(&self) -> RevealDelay {
        self.delay
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn visible(&self) -> &str {
        &self.target[..self.byte_end]
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot::new(
            self.run,
            Arc::clone(&self.target),
            self.revealed,
            self.byte_end,
            self.total,
        )
    }

    /// Reveal the next character.
    ///
    /// Returns the new snapshot, or `None` when the run is already terminal.
    pub fn advance(&mut self) -> Option<RevealSnapshot> {
        let next = self.target[self.byte_end..].chars().next()?;
        self.byte_end += next.len_utf8();
        self.revealed += 1;
        Some(self.snapshot())
    }
}
