//! File explorer component
//!
//! Branch bar, latest commit, the file table and the code viewer for the one file
//! that has source.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        repo::{
            FileKind, BRANCH, CODE_FILE, CODE_ICON, CODE_SIZE, CODE_SNIPPET, FILES, LATEST_COMMIT,
        },
        ui::Pane,
    },
    presentation::{components::pane_border, layout::PageLayout},
};

#[derive(Debug, Clone, Default)]
pub struct ExplorerComponent;

impl ExplorerComponent {
    pub fn new() -> Self {
        Self
    }

    fn branch_bar(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(" ⎇ ", Style::new().fg(Color::Gray)),
            Span::styled(BRANCH, Style::new().bold()),
            Span::styled(" ▾", Style::new().fg(Color::Gray)),
            Span::styled(
                format!("   {} files", FILES.len()),
                Style::new().fg(Color::DarkGray),
            ),
        ])
    }

    fn commit(&self, frame: &mut Frame, area: Rect) {
        let commit = LATEST_COMMIT;
        let left = Line::from(vec![
            Span::raw(format!("{} ", commit.avatar)),
            Span::styled(commit.author, Style::new().bold()),
            Span::raw(" "),
            Span::styled(commit.message, Style::new().fg(Color::Gray)),
        ]);
        let right = Line::from(vec![
            Span::styled(commit.hash, Style::new().fg(Color::Yellow)),
            Span::styled(format!(" · {}", commit.time), Style::new().fg(Color::DarkGray)),
        ])
        .right_aligned();
        frame.render_widget(left, area);
        frame.render_widget(right, area);
    }

    fn table(&self, state: &AppState) -> Table<'static> {
        let rows = FILES.iter().map(|entry| {
            let name_style = if state.explorer.is_selected(entry) {
                Style::new().fg(Color::Green).bold().underlined()
            } else if entry.kind == FileKind::Folder {
                Style::new().fg(Color::LightBlue).bold()
            } else {
                Style::new()
            };
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::raw(format!("{} ", entry.icon)),
                    Span::styled(entry.name, name_style),
                ])),
                Cell::from(Span::styled(entry.description, Style::new().fg(Color::Gray))),
                Cell::from(entry.size.unwrap_or("-")).style(Style::new().fg(Color::DarkGray)),
                Cell::from(Line::from(entry.last_modified).right_aligned())
                    .style(Style::new().fg(Color::DarkGray)),
            ])
        });

        let header = Row::new(vec!["Name", "Description", "Size", "Last modified"])
            .style(Style::new().fg(Color::DarkGray).bold());

        let highlight = if state.ui.is_focused(Pane::Files) {
            Style::new().bg(Color::DarkGray)
        } else {
            Style::new().add_modifier(Modifier::REVERSED)
        };

        Table::new(
            rows,
            [
                Constraint::Length(28),
                Constraint::Min(10),
                Constraint::Length(10),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always)
    }

    fn code(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {CODE_ICON} {CODE_FILE} "))
            .title(Line::from(format!(" {CODE_SIZE} ")).right_aligned())
            .border_style(pane_border(state.ui.is_focused(Pane::Code)));

        let lines: Vec<Line> = CODE_SNIPPET
            .lines()
            .enumerate()
            .map(|(i, source)| {
                Line::from(vec![
                    Span::styled(format!("{:>3} ", i + 1), Style::new().fg(Color::DarkGray)),
                    Span::styled(source, code_style(source)),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .scroll((state.explorer.code_scroll, 0)),
            area,
        );
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &PageLayout) {
        frame.render_widget(self.branch_bar(), layout.branch_bar);

        frame.render_widget(
            Block::bordered().border_style(pane_border(state.ui.is_focused(Pane::Files))),
            layout.files,
        );
        self.commit(frame, layout.commit);

        let mut table_state = TableState::default()
            .with_offset(layout.file_offset(state.explorer.cursor))
            .with_selected(Some(state.explorer.cursor));
        frame.render_stateful_widget(self.table(state), layout.file_table, &mut table_state);

        if let Some(code_area) = layout.code {
            self.code(state, frame, code_area);
        }
    }
}

fn code_style(source: &str) -> Style {
    let trimmed = source.trim_start();
    if trimmed.starts_with("//") {
        Style::new().fg(Color::DarkGray).italic()
    } else if ["import", "export", "class", "private", "async", "const", "return"]
        .iter()
        .any(|keyword| trimmed.starts_with(keyword))
    {
        Style::new().fg(Color::Magenta)
    } else {
        Style::new().fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("  // comment", Color::DarkGray)]
    #[case("import { X } from './x';", Color::Magenta)]
    #[case("    return this;", Color::Magenta)]
    #[case("  }", Color::White)]
    fn test_code_style(#[case] source: &str, #[case] fg: Color) {
        assert_eq!(code_style(source).fg, Some(fg));
    }
}
