use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point-in-time quote for an index, commodity or FX pair.
///
/// `change_percent` is expected to carry the same sign as `change`;
/// the server is trusted on that, nothing here re-checks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
}

impl MarketQuote {
    /// Flat or rising quotes render in the "up" color.
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

/// `GET /market/summary`: display name → quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketSummary {
    pub quotes: HashMap<String, MarketQuote>,
}

impl MarketSummary {
    /// Quote for a display key; unknown keys render as an all-zero quote.
    pub fn quote_or_default(&self, key: &str) -> MarketQuote {
        self.quotes.get(key).copied().unwrap_or_default()
    }

    /// The overview tiles in display order, each resolved against this summary.
    pub fn overview(&self) -> Vec<(&'static str, MarketQuote)> {
        OVERVIEW_INDICES
            .iter()
            .map(|(label, key)| (*label, self.quote_or_default(key)))
            .collect()
    }
}

/// (tile label, summary key) pairs shown on the landing page.
pub const OVERVIEW_INDICES: [(&str, &str); 8] = [
    ("S&P 500", "S&P 500"),
    ("Nasdaq", "Nasdaq"),
    ("Dow Jones", "Dow Jones"),
    ("Gold", "Gold"),
    ("Bitcoin", "Bitcoin"),
    ("10Y Yield", "10Y Treasury Yield"),
    ("Crude Oil", "WTI Crude Oil"),
    ("USD/KRW", "USD/KRW"),
];

/// A single gainer/loser row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    /// Day-over-day change in percent.
    #[serde(default)]
    pub change: f64,
}

/// `GET /market/movers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketMovers {
    #[serde(default)]
    pub gainers: Vec<Mover>,
    #[serde(default)]
    pub losers: Vec<Mover>,
}

/// `GET /market/news`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketNewsItem {
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub provider: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegimeIndicators {
    #[serde(default)]
    pub usd_krw: f64,
    #[serde(default)]
    pub kospi_change: f64,
}

/// `GET /market/regime`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketRegime {
    pub regime: String,
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub indicators: RegimeIndicators,
}

/// The three independent feeds of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardSource {
    MarketSummary,
    Recommendations,
    Movers,
}

impl std::fmt::Display for DashboardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardSource::MarketSummary => write!(f, "market summary"),
            DashboardSource::Recommendations => write!(f, "recommendations"),
            DashboardSource::Movers => write!(f, "market movers"),
        }
    }
}

/// How one feed fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceOutcome {
    Loaded,
    Failed(String),
}

/// Landing page data with per-feed outcomes: a failed feed leaves its slot
/// empty while the others still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingDashboard {
    pub market: Option<MarketSummary>,
    pub recommendations: Option<Vec<super::consult::Recommendation>>,
    pub movers: Option<MarketMovers>,
    pub outcomes: HashMap<DashboardSource, SourceOutcome>,
}

impl LandingDashboard {
    pub fn outcome(&self, source: DashboardSource) -> Option<&SourceOutcome> {
        self.outcomes.get(&source)
    }

    /// True when every feed loaded.
    pub fn is_complete(&self) -> bool {
        !self.outcomes.is_empty()
            && self.outcomes.values().all(|o| *o == SourceOutcome::Loaded)
    }

    /// Feeds that failed, in a stable order.
    pub fn failed_sources(&self) -> Vec<DashboardSource> {
        let mut failed: Vec<DashboardSource> = self
            .outcomes
            .iter()
            .filter(|(_, o)| matches!(o, SourceOutcome::Failed(_)))
            .map(|(s, _)| *s)
            .collect();
        failed.sort_by_key(|s| *s as u8);
        failed
    }
}
