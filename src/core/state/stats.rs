use crate::core::{cmd::Cmd, msg::stats::StatsMsg};

/// Repository counters shown in the stats bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsState {
    pub stars: u64,
}

impl Default for StatsState {
    fn default() -> Self {
        Self { stars: 42_069 }
    }
}

impl StatsState {
    pub fn new(stars: u64) -> Self {
        Self { stars }
    }

    pub fn update(&mut self, msg: StatsMsg) -> Vec<Cmd> {
        match msg {
            StatsMsg::AddStars(0) => vec![],
            StatsMsg::AddStars(n) => {
                self.stars = self.stars.saturating_add(n);
                vec![Cmd::RequestRender]
            }
        }
    }
}
