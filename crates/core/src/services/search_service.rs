use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::stock::SearchResult;
use crate::providers::traits::DashboardApi;

/// What a debounced keystroke ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query was sent and answered.
    Results(Vec<SearchResult>),
    /// The query was empty; the result list should close.
    Cleared,
    /// A newer keystroke arrived during the quiet period; nothing was sent.
    Superseded,
    /// The request failed; keep showing the previous results.
    Failed,
}

/// Debounced stock search.
///
/// Each call waits for the quiet period, then sends the query only if no newer
/// call was made in the meantime. Starting a new call cancels the pending
/// timer of the previous one; a request already on the wire is not cancelled.
pub struct SearchDebouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle one keystroke's worth of query text.
    pub async fn search(&self, api: &dyn DashboardApi, query: &str) -> SearchOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(query, "search superseded by newer input");
            return SearchOutcome::Superseded;
        }

        if query.is_empty() {
            return SearchOutcome::Cleared;
        }

        match api.search(query).await {
            Ok(results) => SearchOutcome::Results(results),
            Err(e) => {
                warn!(error = %e, "search failed");
                SearchOutcome::Failed
            }
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}
