pub mod explorer;
pub mod reveal;
pub mod stats;
pub mod system;
pub mod ui;

pub use explorer::ExplorerState;
pub use reveal::{RevealView, RevealsState};
pub use stats::StatsState;
pub use system::SystemState;
pub use ui::UiState;

use crate::{domain::ui::RevealSlot, infrastructure::config::Config};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub reveals: RevealsState,
    pub explorer: ExplorerState,
    pub stats: StatsState,
    pub ui: UiState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the page settings from config
    pub fn new(config: Config) -> Self {
        Self {
            system: SystemState::new(config.load_delay()),
            reveals: RevealsState::new(config.reveal.status_delay, config.reveal.description_delay),
            stats: StatsState::new(config.stats.initial_stars),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn reveal(&self, slot: RevealSlot) -> &RevealView {
        self.reveals.get(slot)
    }
}
