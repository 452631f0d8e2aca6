/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    // System control
    Init,
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Page lifecycle
    Tick,
    Loaded,

    // Status management
    ShowError(String),
    ClearStatusMessage,
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick)
    }
}
