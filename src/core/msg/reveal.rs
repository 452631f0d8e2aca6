use crate::domain::{
    reveal::{RevealDelay, RevealSnapshot},
    ui::RevealSlot,
};

/// Messages specific to RevealsState
#[derive(Debug, Clone, PartialEq)]
pub enum RevealMsg {
    /// Reveal a new target in `slot`, restarting from an empty prefix
    Start {
        slot: RevealSlot,
        target: String,
        delay: RevealDelay,
    },
    /// Restart every slot with its current target
    Replay,
    /// A step committed by the slot's revealer
    Progress {
        slot: RevealSlot,
        snapshot: RevealSnapshot,
    },
    /// Stop revealing `slot`, keeping what is visible
    Cancel { slot: RevealSlot },
    CancelAll,
}

impl RevealMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, RevealMsg::Progress { .. })
    }
}
