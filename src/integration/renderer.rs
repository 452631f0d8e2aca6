use color_eyre::eyre::Result;

use crate::{
    core::state::AppState,
    infrastructure::tui::{event_source::SharedTui, Frame},
    presentation::components::Components,
};

/// Draws the page from state; the only place that touches the terminal buffer
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
    frames: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(&mut self, tui: &SharedTui, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        let components = &self.components;
        guard.draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))?;
        self.frames += 1;
        Ok(())
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
