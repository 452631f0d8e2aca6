//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::PageLayout};

pub mod explorer;
pub mod footer;
pub mod header;
pub mod readme;
pub mod title;

pub use explorer::ExplorerComponent;
pub use footer::FooterComponent;
pub use header::HeaderComponent;
pub use readme::ReadmeComponent;
pub use title::TitleComponent;

/// Border style of a pane that can take focus.
pub(crate) fn pane_border(focused: bool) -> Style {
    if focused {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new().fg(Color::DarkGray)
    }
}

/// Collection of all components on the page
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub title: TitleComponent,
    pub explorer: ExplorerComponent,
    pub readme: ReadmeComponent,
    pub footer: FooterComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole page
    ///
    /// Until the fade-in timer fires every cell is dimmed.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let layout = PageLayout::new(area, state.explorer.show_code);

        self.header.view(state, frame, layout.header);
        self.title.view(state, frame, layout.title);
        self.explorer.view(state, frame, &layout);
        self.readme.view(state, frame, layout.readme);
        self.footer.view(state, frame, layout.footer);

        if !state.system.loaded {
            frame
                .buffer_mut()
                .set_style(area, Style::new().add_modifier(Modifier::DIM));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{
        core::msg::{explorer::ExplorerMsg, system::SystemMsg},
        domain::{
            repo::{self, FILES},
            reveal::RunId,
            ui::{Pane, RevealSlot},
        },
    };

    fn render(state: &AppState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| Components::new().render(frame, state))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.system.update(SystemMsg::Loaded);
        state
    }

    #[test]
    fn test_page_shows_every_section() {
        let state = loaded_state();
        let text = screen(&render(&state, 140, 50));

        assert!(text.contains("[CLK]"));
        assert!(text.contains("Pull Requests"));
        assert!(text.contains("clonkbot / clonkbot"));
        assert!(text.contains("42,069"));
        assert!(text.contains(repo::LATEST_COMMIT.hash));
        assert!(text.contains("consciousness/"));
        assert!(text.contains("## Installation"));
        assert!(text.contains("Built by @clonkbot"));
    }

    #[test]
    fn test_reveals_render_with_cursor() {
        let mut state = loaded_state();
        state.reveals.status.run = Some(RunId::default());
        state.reveals.status.visible = "ONL".to_string();
        state.reveals.description.visible = "The complete".to_string();

        let text = screen(&render(&state, 140, 50));

        assert!(text.contains("ONL_"));
        assert!(text.contains("The complete_"));
        assert!(!text.contains(repo::STATUS_TEXT));
        assert_eq!(state.reveal(RevealSlot::Status).visible, "ONL");
    }

    #[test]
    fn test_page_is_dimmed_until_loaded() {
        let buf = render(&AppState::default(), 100, 30);
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
        assert!(buf[(99, 29)].modifier.contains(Modifier::DIM));

        let buf = render(&loaded_state(), 100, 30);
        assert!(!buf[(99, 29)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_code_viewer_appears_when_brain_is_open() {
        let mut state = loaded_state();
        let hidden = screen(&render(&state, 140, 60));
        assert!(!hidden.contains("class ClonkBot"));

        state
            .explorer
            .update(ExplorerMsg::OpenAt(repo::file_index(repo::CODE_FILE).unwrap()));
        let shown = screen(&render(&state, 140, 60));

        assert!(shown.contains("class ClonkBot"));
        assert!(shown.contains(repo::CODE_SIZE));
    }

    #[test]
    fn test_cursor_row_is_highlighted() {
        let mut state = loaded_state();
        state.explorer.update(ExplorerMsg::CursorDown);
        let area = Rect::new(0, 0, 140, 50);
        let layout = PageLayout::new(area, false);
        let buf = render(&state, area.width, area.height);

        let rows = layout.file_rows();
        let marker = |y| buf[(rows.x, y)].symbol().to_string();
        assert_eq!(marker(rows.y + 1), "▶");
        assert_ne!(marker(rows.y), "▶");
        assert_eq!(buf[(rows.x + 5, rows.y + 1)].bg, Color::DarkGray);
        assert_eq!(state.ui.focus, Pane::Files);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = loaded_state();
        render(&state, 10, 3);
        render(&state, 1, 1);
        assert_eq!(FILES.len(), 12);
    }
}
