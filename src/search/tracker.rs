// Request tokens: keep a slow, older search from overwriting a newer one.
//
// Every tracked search gets a monotonically increasing `RequestId`. Results
// are published through `LatestResults`, which only accepts an envelope whose
// id is newer than the one it already holds.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::SearchResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids. The first id is 1.
#[derive(Debug, Default)]
pub struct RequestCounter {
    last: AtomicU64,
}

impl RequestCounter {
    pub fn issue(&self) -> RequestId {
        RequestId(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued id, if any.
    pub fn latest(&self) -> Option<RequestId> {
        match self.last.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RequestId(n)),
        }
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        self.latest() == Some(id)
    }
}

/// Holds the newest published result envelope.
#[derive(Debug, Default)]
pub struct LatestResults {
    current: Mutex<Option<(RequestId, Arc<SearchResults>)>>,
}

impl LatestResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `results` if `id` is newer than what is held. Returns whether
    /// the envelope was accepted.
    pub async fn offer(&self, id: RequestId, results: SearchResults) -> bool {
        let mut current = self.current.lock().await;
        match current.as_ref() {
            Some((held, _)) if *held >= id => false,
            _ => {
                *current = Some((id, Arc::new(results)));
                true
            }
        }
    }

    pub async fn current(&self) -> Option<Arc<SearchResults>> {
        self.current
            .lock()
            .await
            .as_ref()
            .map(|(_, results)| Arc::clone(results))
    }

    pub async fn current_id(&self) -> Option<RequestId> {
        self.current.lock().await.as_ref().map(|(id, _)| *id)
    }
}
