use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::events::{DashboardEvent, EventBus};
use crate::models::portfolio::StatusMessage;
use crate::models::ticker::partition_by_market;
use crate::models::watchlist::WatchlistItem;
use crate::providers::scope::FetchScope;
use crate::providers::traits::DashboardApi;

/// Watchlist reads and mutations.
///
/// Mutations publish `WatchlistChanged` so sibling views refetch their own
/// copy; there is no shared list to keep in sync.
pub struct WatchlistService;

impl WatchlistService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the watchlist; on failure log and show an empty list.
    pub async fn load(&self, api: &dyn DashboardApi) -> Vec<WatchlistItem> {
        match api.watchlist().await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "failed to fetch watchlist");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, items: &[WatchlistItem], ticker: &str) -> bool {
        items.iter().any(|item| item.ticker == ticker)
    }

    pub async fn is_watchlisted(&self, api: &dyn DashboardApi, ticker: &str) -> bool {
        let items = self.load(api).await;
        self.contains(&items, ticker)
    }

    pub async fn add(
        &self,
        api: &dyn DashboardApi,
        bus: &EventBus,
        ticker: &str,
    ) -> Result<StatusMessage, CoreError> {
        let status = api.add_to_watchlist(ticker).await?;
        bus.publish(DashboardEvent::WatchlistChanged);
        Ok(status)
    }

    pub async fn remove(
        &self,
        api: &dyn DashboardApi,
        bus: &EventBus,
        ticker: &str,
    ) -> Result<StatusMessage, CoreError> {
        let status = api.remove_from_watchlist(ticker).await?;
        bus.publish(DashboardEvent::WatchlistChanged);
        Ok(status)
    }

    /// Flip membership given the caller's current view of it.
    /// Returns the new membership state.
    pub async fn toggle(
        &self,
        api: &dyn DashboardApi,
        bus: &EventBus,
        ticker: &str,
        currently_watchlisted: bool,
    ) -> Result<bool, CoreError> {
        if currently_watchlisted {
            self.remove(api, bus, ticker).await?;
            Ok(false)
        } else {
            self.add(api, bus, ticker).await?;
            Ok(true)
        }
    }

    /// Keep a live copy of the watchlist for one view.
    ///
    /// Loads once, then refetches whenever `WatchlistChanged` is published.
    /// The background task ends with the scope or when the receiver is dropped.
    pub fn watch(
        &self,
        api: Arc<dyn DashboardApi>,
        bus: &EventBus,
        scope: &FetchScope,
    ) -> watch::Receiver<Vec<WatchlistItem>> {
        let (tx, rx) = watch::channel(Vec::new());
        let mut events = bus.subscribe();
        let service = WatchlistService::new();

        // Detached: the scope aborts it.
        let _task = scope.spawn(async move {
            tx.send_replace(service.load(api.as_ref()).await);
            loop {
                match events.recv().await {
                    Ok(DashboardEvent::WatchlistChanged) | Err(RecvError::Lagged(_)) => {
                        let items = service.load(api.as_ref()).await;
                        if tx.send(items).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(RecvError::Closed) => break,
                }
            }
            debug!("watchlist feed stopped");
            Ok(())
        });

        rx
    }

    /// Split into (domestic, overseas).
    pub fn split_by_market<'a>(
        &self,
        items: &'a [WatchlistItem],
    ) -> (Vec<&'a WatchlistItem>, Vec<&'a WatchlistItem>) {
        partition_by_market(items, |item| item.ticker.as_str())
    }
}

impl Default for WatchlistService {
    fn default() -> Self {
        Self::new()
    }
}
