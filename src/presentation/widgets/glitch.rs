use ratatui::prelude::*;

/// Frames per glitch cycle
pub const CYCLE: u64 = 48;
/// Trailing frames of each cycle that are glitched
pub const FRAMES: u64 = 3;

pub fn is_glitching(ticks: u64) -> bool {
    ticks % CYCLE >= CYCLE - FRAMES
}

/// Text that twitches sideways in an alternate colour on a few frames per cycle
pub struct Glitch<'a> {
    text: &'a str,
    ticks: u64,
    style: Style,
    glitch_style: Style,
}

impl<'a> Glitch<'a> {
    pub fn new(text: &'a str, ticks: u64) -> Self {
        Self {
            text,
            ticks,
            style: Style::default().fg(Color::Green).bold(),
            glitch_style: Style::default().fg(Color::Magenta).bold(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn glitch_style(mut self, style: Style) -> Self {
        self.glitch_style = style;
        self
    }

    /// Columns needed including the shift.
    pub fn width(&self) -> u16 {
        u16::try_from(Line::raw(self.text).width())
            .unwrap_or(u16::MAX)
            .saturating_add(1)
    }
}

impl Widget for Glitch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        if is_glitching(self.ticks) {
            let shifted = Rect {
                x: area.x.saturating_add(1),
                width: area.width.saturating_sub(1),
                ..area
            };
            Line::styled(self.text, self.glitch_style).render(shifted, buf);
        } else {
            Line::styled(self.text, self.style).render(area, buf);
        }
    }
}
