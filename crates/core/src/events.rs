use tokio::sync::broadcast;
use tracing::trace;

/// Default number of buffered events per subscriber.
pub const DEFAULT_CAPACITY: usize = 16;

/// Signals exchanged between sibling views.
///
/// Events carry no payload: receivers refetch their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardEvent {
    /// The watchlist was mutated; listeners should refetch it.
    WatchlistChanged,
    /// A holding was added or removed; listeners should refetch the portfolio.
    PortfolioChanged,
}

impl DashboardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardEvent::WatchlistChanged => "watchlist-change",
            DashboardEvent::PortfolioChanged => "portfolio-change",
        }
    }
}

/// Injected publish/subscribe channel. Cloning shares the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DashboardEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.sender.subscribe()
    }

    /// Returns how many subscribers received the event.
    pub fn publish(&self, event: DashboardEvent) -> usize {
        // No subscribers is not an error; lagging listeners skip ahead.
        let delivered = self.sender.send(event).unwrap_or(0);
        trace!(event = event.name(), delivered, "published dashboard event");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
