pub mod explorer;
pub mod reveal;
pub mod stats;
pub mod system;
pub mod ui;

use explorer::ExplorerMsg;
use reveal::RevealMsg;
use stats::StatsMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Typewriter texts (delegated to RevealsState)
    Reveal(RevealMsg),

    // File table and code viewer (delegated to ExplorerState)
    Explorer(ExplorerMsg),

    // Repository counters (delegated to StatsState)
    Stats(StatsMsg),

    // Focus and scrolling (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Reveal(msg) => msg.is_frequent(),
            Msg::Explorer(_) | Msg::Stats(_) | Msg::Ui(_) => false,
        }
    }
}
