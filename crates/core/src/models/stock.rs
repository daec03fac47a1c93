use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One trading session. Sequences arrive ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    /// ISO-8601 timestamp as sent by the server
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl OhlcBar {
    /// A close above the open draws a rising candle.
    pub fn is_rising(&self) -> bool {
        self.close > self.open
    }
}

/// `GET /stock/{ticker}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockDetail {
    pub ticker: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub summary: String,
    /// Company fundamentals, rendered as-is.
    #[serde(default)]
    pub details: Value,
    #[serde(default)]
    pub history: Vec<OhlcBar>,
    #[serde(default)]
    pub seasonality: Value,
}

/// `GET /search?query=`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub ticker: String,
    #[serde(default)]
    pub name_kr: String,
    #[serde(default)]
    pub name_en: String,
}

/// `GET /stock/{ticker}/competitors`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
}

impl Competitor {
    /// Market cap in billions, e.g. `$2.9B`; missing or zero renders `-`.
    pub fn formatted_market_cap(&self) -> String {
        match self.market_cap {
            Some(cap) if cap != 0.0 => format!("${:.1}B", cap / 1e9),
            _ => "-".to_string(),
        }
    }
}

/// `GET /stock/{ticker}/news`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsBriefingItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub polarity: f64,
}

/// `GET /stock/{ticker}/events`: dated annotations for the price chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockEvent {
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /analyze/volatility/{ticker}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolatilityAnalysis {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub move_type: String,
    #[serde(default)]
    pub cause: String,
    #[serde(default)]
    pub explanation: String,
}

/// Everything the stock detail view shows on mount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockPage {
    /// `None` when the detail request failed
    pub detail: Option<StockDetail>,
    pub chart: Vec<super::chart::ChartBar>,
    pub events: Vec<StockEvent>,
    pub watchlisted: bool,
}
