use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use futures::future;
use ratatui::{backend::TestBackend, buffer::Buffer, prelude::*};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// In-memory terminal for tests, backed by [`TestBackend`]
///
/// `enter`/`exit` only flip a flag and `next` pops a scripted queue without waiting.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame.
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as plain text, one line per row.
    pub fn screen(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.term.size()?)
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.exit()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[test]
    fn test_draw_is_captured() {
        let mut tui = TestTui::new(5, 1).unwrap();
        tui.draw(&mut |frame| frame.render_widget(Paragraph::new("hi"), frame.area()))
            .unwrap();

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen(), "hi   ");
    }

    #[test]
    fn test_resize_changes_frame_size() {
        let mut tui = TestTui::new(5, 1).unwrap();
        tui.resize(Rect::new(0, 0, 3, 2)).unwrap();
        tui.draw(&mut |_| {}).unwrap();

        assert_eq!(tui.buffer().area, Rect::new(0, 0, 3, 2));
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut tui = TestTui::new(1, 1).unwrap();
        tui.enter().unwrap();
        tui.suspend().unwrap();
        assert!(!tui.is_entered());
        tui.resume().unwrap();

        assert!(tui.is_entered());
        assert_eq!(tui.suspend_count(), 1);
    }
}
