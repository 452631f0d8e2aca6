//! README panel

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        repo::readme::{self, ReadmeLine},
        ui::Pane,
    },
    presentation::components::pane_border,
};

#[derive(Debug, Clone, Default)]
pub struct ReadmeComponent;

impl ReadmeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" 📄 {} ", readme::FILE_NAME))
            .border_style(pane_border(state.ui.is_focused(Pane::Readme)));

        let lines: Vec<Line> = readme::lines().into_iter().map(to_line).collect();
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((state.ui.readme_scroll, 0)),
            area,
        );
    }
}

fn to_line(line: ReadmeLine) -> Line<'static> {
    match line {
        ReadmeLine::Title => Line::from(vec![
            Span::styled(readme::TITLE, Style::new().bold()),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", readme::VERSION),
                Style::new().fg(Color::Black).bg(Color::Green),
            ),
        ]),
        ReadmeLine::Warning => Line::from(vec![
            Span::styled("▌ ", Style::new().fg(Color::Yellow)),
            Span::styled(readme::WARNING, Style::new().fg(Color::Yellow).italic()),
        ]),
        ReadmeLine::Heading(heading) => {
            Line::styled(format!("## {heading}"), Style::new().fg(Color::Cyan).bold())
        }
        ReadmeLine::Command(command) => Line::from(vec![
            Span::styled("$ ", Style::new().fg(Color::DarkGray)),
            Span::styled(command, Style::new().fg(Color::Green)),
        ]),
        ReadmeLine::Comment(comment) => Line::styled(comment, Style::new().fg(Color::DarkGray)),
        ReadmeLine::Requirement(icon, text) => Line::from(format!("{icon} {text}")),
        ReadmeLine::Feature(feature) => Line::from(vec![
            Span::raw(format!("{} ", feature.icon)),
            Span::styled(feature.title, Style::new().bold()),
            Span::styled(
                format!(" · {}", feature.description),
                Style::new().fg(Color::Gray),
            ),
        ]),
        ReadmeLine::Text(text) => Line::from(text),
        ReadmeLine::Blank => Line::default(),
    }
}
