use ratatui::prelude::*;

use crate::{core::state::AppState, domain::repo::FOOTER};

/// Credit line, or the last error while one is shown
#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let line = match state.system.status_message() {
            Some(message) => Line::styled(message.as_str(), Style::new().fg(Color::Red)),
            None => Line::styled(FOOTER, Style::new().fg(Color::DarkGray)),
        };
        frame.render_widget(line.centered(), area);
    }
}
