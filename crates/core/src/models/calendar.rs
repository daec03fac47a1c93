use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a smart-calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Macro,
    Earnings,
    Dividend,
    Expiration,
    #[serde(other)]
    Other,
}

/// `GET /calendar/smart`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub country: String,
    pub event: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<EventKind>,
    /// Set for watchlist-derived entries (earnings, dividends)
    #[serde(default)]
    pub ticker: Option<String>,
}

impl CalendarEvent {
    pub fn is_high_impact(&self) -> bool {
        self.impact == "High"
    }

    /// An empty ticker string counts as no ticker.
    pub fn has_ticker(&self) -> bool {
        self.ticker.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn tone(&self) -> EventTone {
        match self.kind {
            Some(EventKind::Expiration) => EventTone::Expiration,
            Some(EventKind::Earnings) => EventTone::Earnings,
            Some(EventKind::Dividend) => EventTone::Dividend,
            _ if self.is_high_impact() => EventTone::HighImpact,
            _ => EventTone::Normal,
        }
    }
}

/// Highlight style of a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTone {
    Expiration,
    Earnings,
    Dividend,
    HighImpact,
    Normal,
}

/// Type filter tabs of the calendar widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarFilter {
    #[default]
    All,
    /// Entries tied to one of the user's tickers
    Mine,
    /// Market-wide entries, excluding earnings and dividends
    Macro,
}

/// Days of one calendar month, ready for a 7-column grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (0 = Sunday)
    pub leading_blanks: u32,
    pub days: Vec<NaiveDate>,
}
