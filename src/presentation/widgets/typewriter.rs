use ratatui::prelude::*;

use crate::{core::state::RevealView, domain::repo::CURSOR};

/// Revealed prefix followed by the cursor glyph
pub struct Typewriter<'a> {
    visible: &'a str,
    style: Style,
    cursor_style: Style,
}

impl<'a> Typewriter<'a> {
    pub fn new(visible: &'a str) -> Self {
        Self {
            visible,
            style: Style::default(),
            cursor_style: Style::default().add_modifier(Modifier::SLOW_BLINK),
        }
    }

    pub fn from_view(view: &'a RevealView) -> Self {
        Self::new(&view.visible)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    pub fn spans(&self) -> Vec<Span<'a>> {
        vec![
            Span::styled(self.visible, self.style),
            Span::styled(CURSOR, self.cursor_style),
        ]
    }
}

impl<'a> From<Typewriter<'a>> for Line<'a> {
    fn from(value: Typewriter<'a>) -> Self {
        Line::from(value.spans())
    }
}

impl Widget for Typewriter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self).render(area, buf);
    }
}
