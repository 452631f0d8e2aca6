use crossterm::event::{KeyEvent, MouseEvent};

use crate::domain::{reveal::RevealSnapshot, ui::RevealSlot};

/// Raw messages from external sources (input, timers, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq)]
pub enum RawMsg {
    // System events
    Init,
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw terminal events)
    Key(KeyEvent),
    Mouse(MouseEvent),

    // Timer-driven services
    RevealProgress {
        slot: RevealSlot,
        snapshot: RevealSnapshot,
    },
    StarsTick(u64),
    Loaded,

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            RawMsg::Tick | RawMsg::Render | RawMsg::RevealProgress { .. }
        )
    }
}
