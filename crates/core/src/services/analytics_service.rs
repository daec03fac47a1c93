use crate::models::analytics::{
    CorrelationBucket, CorrelationMatrix, GaugeDimensions, GaugeReading, NeedleGeometry, Point,
    Sentiment,
};

/// Points of the 0–100 scale covered by each gauge segment.
pub const GAUGE_SEGMENT_SIZE: f64 = 25.0;

/// Display derivations for analytics widgets: correlation heatmap and
/// fear & greed gauge. All pure, recomputed on every refresh.
pub struct AnalyticsService {
    dimensions: GaugeDimensions,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::with_dimensions(GaugeDimensions::default())
    }

    pub fn with_dimensions(dimensions: GaugeDimensions) -> Self {
        Self { dimensions }
    }

    // ── Correlation heatmap ─────────────────────────────────────────

    /// Bucket a correlation coefficient. First match wins:
    /// exactly 1, above 0.5, above 0, below -0.5, below 0, otherwise neutral.
    pub fn correlation_bucket(&self, value: f64) -> CorrelationBucket {
        if value == 1.0 {
            CorrelationBucket::Identity
        } else if value > 0.5 {
            CorrelationBucket::StrongPositive
        } else if value > 0.0 {
            CorrelationBucket::WeakPositive
        } else if value < -0.5 {
            CorrelationBucket::StrongNegative
        } else if value < 0.0 {
            CorrelationBucket::WeakNegative
        } else {
            CorrelationBucket::Neutral
        }
    }

    /// Cell text: positive values carry an explicit `+`.
    pub fn format_coefficient(&self, value: f64) -> String {
        if value > 0.0 {
            format!("+{value}")
        } else {
            format!("{value}")
        }
    }

    /// Bucket of every cell, row by row in `assets` column order.
    /// Missing cells are `None`.
    pub fn heatmap(&self, matrix: &CorrelationMatrix) -> Vec<Vec<Option<CorrelationBucket>>> {
        matrix
            .matrix
            .iter()
            .map(|row| {
                matrix
                    .assets
                    .iter()
                    .map(|col| row.values.get(col).map(|v| self.correlation_bucket(*v)))
                    .collect()
            })
            .collect()
    }

    // ── Fear & greed gauge ──────────────────────────────────────────

    /// Needle angle in degrees: 180 at 0, 90 at 50, 0 at 100.
    pub fn needle_angle(&self, value: f64) -> f64 {
        180.0 * (1.0 - value / 100.0)
    }

    /// Needle triangle around `pivot`.
    ///
    /// Tip at `pivot + length·(cos θ, sin θ)` with `θ = -angle·π/180`
    /// (screen y grows downward); base corners `base_radius` away from the
    /// pivot, perpendicular to the needle.
    pub fn needle(&self, value: f64, pivot: Point) -> NeedleGeometry {
        let angle_deg = self.needle_angle(value);
        let radians = -angle_deg * std::f64::consts::PI / 180.0;
        let (sin, cos) = radians.sin_cos();
        let length = self.dimensions.needle_length();
        let r = self.dimensions.base_radius;

        NeedleGeometry {
            angle_deg,
            pivot,
            tip: Point {
                x: pivot.x + length * cos,
                y: pivot.y + length * sin,
            },
            base_left: Point {
                x: pivot.x + r * sin,
                y: pivot.y - r * cos,
            },
            base_right: Point {
                x: pivot.x - r * sin,
                y: pivot.y + r * cos,
            },
        }
    }

    /// Label, color band and needle for a 0–100 score.
    pub fn fear_greed(&self, value: f64, pivot: Point) -> GaugeReading {
        GaugeReading {
            value,
            sentiment: Sentiment::from_score(value),
            needle: self.needle(value, pivot),
        }
    }

    /// The four equal gauge segments, left to right: (band, points covered).
    pub fn gauge_segments(&self) -> Vec<(Sentiment, f64)> {
        Sentiment::ALL
            .iter()
            .map(|s| (*s, GAUGE_SEGMENT_SIZE))
            .collect()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
