use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::records::SiteContent;

/// Delay the mock CMS waits before resolving, matching the reference site.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1500);

/// Errors from the content store.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content fetch channel disconnected before resolving")]
    FetchAborted,
}

/// Lifecycle of the one-shot content fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentState {
    Loading,
    Ready(SiteContent),
    /// Terminal failure state. Not reachable in the reference
    /// configuration; sections without a content dependency keep working.
    Failed(String),
}

impl ContentState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn content(&self) -> Option<&SiteContent> {
        match self {
            Self::Ready(c) => Some(c),
            _ => None,
        }
    }
}

/// One-shot simulated CMS fetch.
///
/// `fetch` spawns a thread that sleeps the configured delay and then sends
/// the sample content over a channel. `poll` transitions
/// `Loading -> Ready` exactly once. No retry, no cancellation, no
/// duplicate-fetch guard: the caller fetches once at app start.
pub struct ContentStore {
    rx: Receiver<SiteContent>,
    state: ContentState,
}

impl ContentStore {
    pub fn fetch(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            thread::sleep(delay);
            // The receiver may already be gone on shutdown; nothing to do.
            let _ = tx.send(SiteContent::sample());
        });
        tracing::debug!(?delay, "content fetch started");
        Self {
            rx,
            state: ContentState::Loading,
        }
    }

    /// Resolve immediately, for tests and headless tools.
    pub fn ready() -> Self {
        let (tx, rx) = mpsc::channel();
        // Receiver is held locally, the send cannot fail.
        let _ = tx.send(SiteContent::sample());
        let mut store = Self {
            rx,
            state: ContentState::Loading,
        };
        store.poll();
        store
    }

    /// Advance the fetch state machine; call once per UI frame.
    pub fn poll(&mut self) -> &ContentState {
        if self.state.is_loading() {
            match self.rx.try_recv() {
                Ok(content) => {
                    tracing::info!(
                        skills = content.skills.len(),
                        projects = content.projects.len(),
                        "content fetch resolved"
                    );
                    self.state = ContentState::Ready(content);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.state =
                        ContentState::Failed(ContentError::FetchAborted.to_string());
                }
            }
        }
        &self.state
    }

    pub fn state(&self) -> &ContentState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_resolves_after_delay() {
        let mut store = ContentStore::fetch(Duration::from_millis(10));
        assert!(store.state().is_loading());

        // Bounded wait; the fetch resolves exactly once.
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while store.poll().is_loading() {
            assert!(std::time::Instant::now() < deadline, "fetch never resolved");
            thread::sleep(Duration::from_millis(5));
        }
        let content = store.state().content().expect("ready");
        assert_eq!(content.skills.len(), 15);
    }

    #[test]
    fn ready_store_skips_delay() {
        let store = ContentStore::ready();
        assert!(store.state().content().is_some());
    }

    #[test]
    fn poll_after_ready_is_stable() {
        let mut store = ContentStore::ready();
        let first = store.state().clone();
        store.poll();
        assert_eq!(*store.state(), first);
    }
}
