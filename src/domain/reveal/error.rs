use thiserror::Error;

/// Misuse of the revealer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("reveal delay must not be negative, got {0}ms")]
    NegativeDelay(i64),
}
