//! Incremental text reveal ("typewriter")
//!
//! The pure half of the revealer lives here:
//! - [`RevealDelay`]: validated per-character delay
//! - [`RevealState`]: the state machine that grows the visible prefix one character at a time
//! - [`RevealSnapshot`]: an immutable view of one step, cheap to clone and send
//!
//! Scheduling (timers, cancellation) is done by
//! [`RevealHandle`](crate::infrastructure::reveal_handle::RevealHandle).

mod delay;
mod error;
mod snapshot;
mod state;

pub use delay::RevealDelay;
pub use error::RevealError;
pub use snapshot::{RevealSnapshot, RunId};
pub use state::RevealState;
