//! Header component
//!
//! Logo, navigation tabs and the connection status typewriter.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        repo::{LOGO, NAV_ITEMS},
        ui::RevealSlot,
    },
    presentation::widgets::{Glitch, Typewriter},
};

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    fn nav(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, item) in NAV_ITEMS.iter().enumerate() {
            spans.push(Span::raw("  "));
            let style = if i == 0 {
                Style::new().fg(Color::White).bold().underlined()
            } else {
                Style::new().fg(Color::Gray)
            };
            spans.push(Span::styled(item.label, style));
            if let Some(badge) = item.badge {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    format!(" {badge} "),
                    Style::new().fg(Color::White).bg(Color::DarkGray),
                ));
            }
        }
        Line::from(spans)
    }

    fn status<'a>(&self, state: &'a AppState) -> Line<'a> {
        let mut spans = vec![Span::styled("● ", Style::new().fg(Color::Green))];
        spans.extend(
            Typewriter::from_view(state.reveal(RevealSlot::Status))
                .style(Style::new().fg(Color::Green).bold())
                .spans(),
        );
        Line::from(spans)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::new().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let logo_text = format!("[{LOGO}]");
        let logo = Glitch::new(&logo_text, state.system.ticks);
        let status = self.status(state);
        // leave room for the revealed text to grow without reflowing the tabs
        let status_width = u16::try_from(state.reveal(RevealSlot::Status).target.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(4);

        let [logo_area, nav_area, status_area] = Layout::horizontal([
            Constraint::Length(logo.width()),
            Constraint::Min(0),
            Constraint::Length(status_width),
        ])
        .areas(inner);

        frame.render_widget(logo, logo_area);
        frame.render_widget(self.nav(), nav_area);
        frame.render_widget(status, status_area);
    }
}
