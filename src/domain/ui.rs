use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Places on the page that show a typewriter reveal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RevealSlot {
    /// Connection status next to the header dot
    Status,
    /// Repository description under the title
    Description,
}

/// Pane that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum Pane {
    #[default]
    Files,
    Code,
    Readme,
}

impl Pane {
    /// Next pane in focus order; `Code` is skipped while the code viewer is hidden.
    pub fn next(self, code_visible: bool) -> Self {
        match self {
            Pane::Files if code_visible => Pane::Code,
            Pane::Files | Pane::Code => Pane::Readme,
            Pane::Readme => Pane::Files,
        }
    }
}
