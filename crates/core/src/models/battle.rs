use serde::{Deserialize, Serialize};

/// A position held by one of the AI fund managers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagerPick {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "return", default)]
    pub return_pct: f64,
    #[serde(default)]
    pub price: f64,
}

/// `GET /battle`: one contestant of the simulated fund battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundManager {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "return", default)]
    pub return_pct: f64,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub portfolio: Vec<ManagerPick>,
}

impl FundManager {
    pub fn is_leader(&self) -> bool {
        self.rank == 1
    }
}
