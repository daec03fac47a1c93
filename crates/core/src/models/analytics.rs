use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Totals shown on the portfolio summary card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Sum of current market values
    pub total_value: f64,

    /// Sum of `shares * avg_price`
    pub total_cost: f64,

    /// `total_value - total_cost`
    pub total_return: f64,

    /// Return relative to cost, in percent; 0 when there is no cost basis
    pub return_percent: f64,
}

/// One slice of the allocation pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub ticker: String,
    pub value: f64,
}

/// Display bucket for a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrelationBucket {
    /// Exactly 1 (the diagonal)
    Identity,
    StrongPositive,
    WeakPositive,
    StrongNegative,
    WeakNegative,
    Neutral,
}

impl std::fmt::Display for CorrelationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationBucket::Identity => write!(f, "identity"),
            CorrelationBucket::StrongPositive => write!(f, "strong positive"),
            CorrelationBucket::WeakPositive => write!(f, "weak positive"),
            CorrelationBucket::StrongNegative => write!(f, "strong negative"),
            CorrelationBucket::WeakNegative => write!(f, "weak negative"),
            CorrelationBucket::Neutral => write!(f, "neutral"),
        }
    }
}

/// A matrix row: the row asset plus one coefficient per column asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRow {
    pub asset: String,
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

/// `GET /portfolio/correlation`
///
/// Symmetric with a unit diagonal by construction on the server;
/// neither property is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    #[serde(default)]
    pub assets: Vec<String>,
    #[serde(default)]
    pub matrix: Vec<CorrelationRow>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Coefficient at (row, column), if both are present.
    pub fn value(&self, row_asset: &str, col_asset: &str) -> Option<f64> {
        self.matrix
            .iter()
            .find(|r| r.asset == row_asset)
            .and_then(|r| r.values.get(col_asset).copied())
    }
}

/// Qualitative band of the fear & greed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    ExtremeFear,
    Fear,
    Greed,
    ExtremeGreed,
}

impl Sentiment {
    /// Band lower bounds are inclusive: 25 is Fear, 50 is Greed, 75 is Extreme Greed.
    pub fn from_score(value: f64) -> Self {
        if value < 25.0 {
            Sentiment::ExtremeFear
        } else if value < 50.0 {
            Sentiment::Fear
        } else if value < 75.0 {
            Sentiment::Greed
        } else {
            Sentiment::ExtremeGreed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::ExtremeFear => "Extreme Fear",
            Sentiment::Fear => "Fear",
            Sentiment::Greed => "Greed",
            Sentiment::ExtremeGreed => "Extreme Greed",
        }
    }

    /// Hex color of the band's gauge segment.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::ExtremeFear => "#EF4444",
            Sentiment::Fear => "#F87171",
            Sentiment::Greed => "#34D399",
            Sentiment::ExtremeGreed => "#10B981",
        }
    }

    /// All bands in gauge order (left to right).
    pub const ALL: [Sentiment; 4] = [
        Sentiment::ExtremeFear,
        Sentiment::Fear,
        Sentiment::Greed,
        Sentiment::ExtremeGreed,
    ];
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Radii of the half-donut gauge, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeDimensions {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Radius of the needle's pivot circle and half-width of its base
    pub base_radius: f64,
}

impl GaugeDimensions {
    /// Needle reaches two thirds of the way from the inner to the outer ring.
    pub fn needle_length(&self) -> f64 {
        (self.inner_radius + 2.0 * self.outer_radius) / 3.0
    }
}

impl Default for GaugeDimensions {
    fn default() -> Self {
        Self {
            inner_radius: 50.0,
            outer_radius: 80.0,
            base_radius: 5.0,
        }
    }
}

/// Needle triangle of the fear & greed gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeedleGeometry {
    /// Degrees from the positive x-axis; 180 at score 0, 0 at score 100
    pub angle_deg: f64,
    pub pivot: Point,
    pub tip: Point,
    pub base_left: Point,
    pub base_right: Point,
}

impl NeedleGeometry {
    /// SVG path of the needle polygon (base → base → tip → base).
    pub fn svg_path(&self) -> String {
        format!(
            "M{} {}L{} {} L{} {} L{} {}",
            self.base_left.x,
            self.base_left.y,
            self.base_right.x,
            self.base_right.y,
            self.tip.x,
            self.tip.y,
            self.base_left.x,
            self.base_left.y,
        )
    }
}

/// Everything the gauge widget draws for one score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub value: f64,
    pub sentiment: Sentiment,
    pub needle: NeedleGeometry,
}
