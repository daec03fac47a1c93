use serde::{Deserialize, Serialize};

/// Body of `POST /time-machine`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeMachineRequest {
    pub ticker: String,
    /// Invested amount in dollars
    pub amount: f64,
    /// Purchase date, `YYYY-MM-DD`
    pub date: String,
}

/// Response of `POST /time-machine`. ROI is computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeMachineResult {
    #[serde(default)]
    pub ticker: String,
    pub past_date: String,
    pub past_price: f64,
    pub current_price: f64,
    pub shares: f64,
    pub initial_investment: f64,
    pub current_value: f64,
    pub profit: f64,
    /// Percent
    pub roi: f64,
}

/// Something money can buy, used to make a profit tangible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub price: f64,
    pub name: String,
    /// Counter word shown after the count
    pub unit: String,
}

impl ReferenceItem {
    pub fn new(price: f64, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            price,
            name: name.into(),
            unit: unit.into(),
        }
    }

    /// Default catalogue, ascending by price.
    pub fn catalogue() -> Vec<ReferenceItem> {
        vec![
            ReferenceItem::new(20.0, "치킨 🍗", "마리"),
            ReferenceItem::new(1_000.0, "최신 아이폰 📱", "대"),
            ReferenceItem::new(5_000.0, "명품 가방 👜", "개"),
            ReferenceItem::new(30_000.0, "중형 세단 🚗", "대"),
            ReferenceItem::new(100_000.0, "포르쉐 911 🏎️", "대"),
            ReferenceItem::new(500_000.0, "서울 아파트 전세 🏠", "채"),
            ReferenceItem::new(1_000_000.0, "개인 섬 🏝️", "개"),
        ]
    }
}

/// Result of mapping an amount onto the reference catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub item: ReferenceItem,
    /// `floor(amount / item.price)`
    pub count: u64,
    /// False when the amount is below even the cheapest item; `item` is then
    /// the cheapest entry and `count` is 0.
    pub affordable: bool,
}
