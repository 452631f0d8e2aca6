use std::time::Duration;

use crate::domain::{
    reveal::{RevealDelay, RunId},
    ui::RevealSlot,
};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    // Render requests are coalesced and delivered via a bounded render request signal.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (timers, terminal, logging)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    // Typewriter commands
    StartReveal {
        slot: RevealSlot,
        run: RunId,
        target: String,
        delay: RevealDelay,
    },
    CancelReveal {
        slot: RevealSlot,
    },
    CancelAllReveals,

    // One-shot timer that ends the fade-in
    ScheduleLoaded {
        after: Duration,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via bounded render request sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::StartReveal { .. } => "StartReveal",
            Cmd::CancelReveal { .. } => "CancelReveal",
            Cmd::CancelAllReveals => "CancelAllReveals",
            Cmd::ScheduleLoaded { .. } => "ScheduleLoaded",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
        }
    }
}
