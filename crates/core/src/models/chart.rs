use serde::{Deserialize, Serialize};

use super::stock::OhlcBar;

/// Short moving-average window (trading sessions).
pub const SHORT_MA_WINDOW: usize = 20;

/// Long moving-average window (trading sessions).
pub const LONG_MA_WINDOW: usize = 60;

/// A single candle for chart rendering, with its moving averages merged in.
///
/// Averages are computed here; the frontend only renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    #[serde(flatten)]
    pub bar: OhlcBar,

    /// Mean close over the trailing 20 bars; `None` until the window fills
    pub ma20: Option<f64>,

    /// Mean close over the trailing 60 bars; `None` until the window fills
    pub ma60: Option<f64>,
}
