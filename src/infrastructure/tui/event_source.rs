use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

pub type SharedTui = Arc<Mutex<dyn TuiLike>>;

/// Where the app loop pulls its next terminal event from
pub enum EventSource {
    /// Events produced by the terminal backend itself
    Real(SharedTui),
    /// A fixed script; the loop ends when it runs dry
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: SharedTui) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::TestTui;

    #[tokio::test]
    async fn test_scripted_events_run_dry() {
        let mut source = EventSource::test([Event::Init, Event::Tick]);

        assert!(matches!(source.next().await, Some(Event::Init)));
        assert!(matches!(source.next().await, Some(Event::Tick)));
        assert!(source.next().await.is_none());
    }

    #[tokio::test]
    async fn test_real_source_reads_from_backend() {
        let tui = TestTui::with_events(10, 5, [Event::Resize(20, 10)]).unwrap();
        let mut source = EventSource::real(Arc::new(Mutex::new(tui)));

        assert!(matches!(source.next().await, Some(Event::Resize(20, 10))));
        assert!(source.next().await.is_none());
    }
}
