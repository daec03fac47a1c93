use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Visual tone of a recommendation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionTone {
    Buy,
    Sell,
    Hold,
}

impl ActionTone {
    /// Classify a free-text action such as `"STRONG BUY (적극 매수)"`.
    /// Buy wins over sell when both appear.
    pub fn from_action(action: &str) -> Self {
        if action.contains("BUY") || action.contains("매수") {
            ActionTone::Buy
        } else if action.contains("SELL") || action.contains("매도") {
            ActionTone::Sell
        } else {
            ActionTone::Hold
        }
    }
}

impl std::fmt::Display for ActionTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionTone::Buy => write!(f, "Buy"),
            ActionTone::Sell => write!(f, "Sell"),
            ActionTone::Hold => write!(f, "Hold"),
        }
    }
}

/// Server-side analysis sections, passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsultAnalysis {
    #[serde(default)]
    pub technical: Map<String, Value>,
    #[serde(default)]
    pub fundamental: Map<String, Value>,
    #[serde(default)]
    pub sentiment: Map<String, Value>,
}

/// `GET /consult/{ticker}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    #[serde(default)]
    pub ticker: String,
    pub action: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub analysis: ConsultAnalysis,
}

impl Consultation {
    pub fn tone(&self) -> ActionTone {
        ActionTone::from_action(&self.action)
    }
}

/// `GET /recommendations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub price: f64,
}

impl Recommendation {
    pub fn tone(&self) -> ActionTone {
        ActionTone::from_action(&self.action)
    }
}

/// Body of `POST /chat/guide`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub ticker: String,
    pub message: String,
}

/// Response of `POST /chat/guide` (markdown text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// `GET /portfolio/analyze`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub advice: Vec<String>,
    #[serde(default)]
    pub risk_level: String,
}
