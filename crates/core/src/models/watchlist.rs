use serde::{Deserialize, Serialize};

use super::ticker::{format_price, Market};

/// `GET /watchlist` entry. The list is keyed by ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

impl WatchlistItem {
    pub fn market(&self) -> Market {
        Market::of(&self.ticker)
    }

    /// `₩72,500` for domestic tickers, `$189.30` otherwise.
    pub fn display_price(&self) -> String {
        format_price(&self.ticker, self.price)
    }
}
