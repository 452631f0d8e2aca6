use ratatui::prelude::*;
use thousands::Separable;

use crate::domain::repo::{STAR_ICON, STATIC_STATS};

/// Star counter followed by the fixed repository stats
pub struct StatsBar {
    stars: u64,
}

impl StatsBar {
    pub fn new(stars: u64) -> Self {
        Self { stars }
    }
}

impl From<StatsBar> for Line<'_> {
    fn from(value: StatsBar) -> Self {
        let mut spans = vec![
            Span::raw(format!("{STAR_ICON} ")),
            Span::styled(
                value.stars.separate_with_commas(),
                Style::default().fg(Color::LightYellow).bold(),
            ),
        ];
        for stat in STATIC_STATS {
            spans.push(Span::raw("   "));
            spans.push(Span::raw(format!("{} ", stat.icon)));
            spans.push(Span::styled(stat.value, Style::default().fg(Color::Gray)));
        }
        Line::from(spans)
    }
}
