use std::fmt;
use std::sync::Arc;

/// Identifies one reveal run.
///
/// Runs are numbered by whoever starts them; a higher id always means a later run
/// for the same handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RunId(u64);

impl RunId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The visible prefix of a target string at one point of a reveal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSnapshot {
    run: RunId,
    target: Arc<str>,
    revealed: usize,
    byte_end: usize,
    total: usize,
}

impl RevealSnapshot {
    pub(super) fn new(
        run: RunId,
        target: Arc<str>,
        revealed: usize,
        byte_end: usize,
        total: usize,
    ) -> Self {
        Self {
            run,
            target,
            revealed,
            byte_end,
            total,
        }
    }

    pub fn run(&self) -> RunId {
        self.run
    }

    /// The currently visible prefix, without any cursor glyph.
    pub fn visible(&self) -> &str {
        &self.target[..self.byte_end]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters shown so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Number of characters in the target.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }
}
