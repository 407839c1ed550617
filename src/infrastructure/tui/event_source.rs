use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui;

/// Where the runner pulls terminal events from
pub enum EventSource {
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<tui::Event> {
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
    use crate::infrastructure::tui::{test::TestTui, Event};

    #[tokio::test]
    async fn test_source_drains_in_order() {
        let mut source = EventSource::test([Event::Tick, Event::Resize(10, 5)]);
        assert_eq!(source.next().await, Some(Event::Tick));
        assert_eq!(source.next().await, Some(Event::Resize(10, 5)));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn real_source_reads_from_tui() {
        let tui = TestTui::with_events(20, 5, [Event::Quit]).expect("test tui");
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::new(Mutex::new(tui));
        let mut source = EventSource::real(tui);
        assert_eq!(source.next().await, Some(Event::Quit));
        assert_eq!(source.next().await, None);
    }
}
