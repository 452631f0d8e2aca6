//! Repository title, description typewriter and stats

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        repo::{NAME, OWNER, VISIBILITY},
        ui::RevealSlot,
    },
    presentation::widgets::{StatsBar, Typewriter},
};

#[derive(Debug, Clone, Default)]
pub struct TitleComponent;

impl TitleComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [name_area, description_area, stats_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area.inner(Margin::new(1, 0)));

        let name = Line::from(vec![
            Span::raw("📦 "),
            Span::styled(OWNER, Style::new().fg(Color::Cyan)),
            Span::raw(" / "),
            Span::styled(NAME, Style::new().fg(Color::Cyan).bold()),
            Span::raw("  "),
            Span::styled(
                format!(" {VISIBILITY} "),
                Style::new().fg(Color::Black).bg(Color::Gray),
            ),
        ]);
        frame.render_widget(name, name_area);

        let description = Typewriter::from_view(state.reveal(RevealSlot::Description))
            .style(Style::new().fg(Color::Gray));
        frame.render_widget(
            Paragraph::new(Line::from(description)).wrap(Wrap { trim: false }),
            description_area,
        );

        frame.render_widget(Line::from(StatsBar::new(state.stats.stars)), stats_area);
    }
}
