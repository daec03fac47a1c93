use serde::{Deserialize, Serialize};

use super::ticker::Market;

/// A position as returned by `GET /portfolio`.
///
/// `current_value`, `pl` and `pl_percent` are computed server-side from
/// `shares`, `avg_price` and `current_price`; they are displayed as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    pub shares: f64,
    pub avg_price: f64,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub current_value: f64,
    #[serde(default)]
    pub pl: f64,
    #[serde(default)]
    pub pl_percent: f64,
    #[serde(default)]
    pub purchase_date: Option<String>,
}

impl Holding {
    /// `shares * avg_price`
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.avg_price
    }

    pub fn market(&self) -> Market {
        Market::of(&self.ticker)
    }
}

/// Body of `POST /portfolio`, sent by the add-holding form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHolding {
    pub ticker: String,
    pub shares: f64,
    pub avg_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
}

impl NewHolding {
    /// Ticker is uppercased, as the form does before submitting.
    pub fn new(ticker: impl Into<String>, shares: f64, avg_price: f64) -> Self {
        Self {
            ticker: ticker.into().trim().to_uppercase(),
            shares,
            avg_price,
            purchase_date: None,
        }
    }

    pub fn with_purchase_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.purchase_date = if date.trim().is_empty() { None } else { Some(date) };
        self
    }
}

/// Acknowledgement returned by watchlist/portfolio mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
