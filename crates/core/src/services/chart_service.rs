use crate::models::chart::{ChartBar, LONG_MA_WINDOW, SHORT_MA_WINDOW};
use crate::models::stock::OhlcBar;

/// Generates chart-ready data sets from fetched price history.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Simple moving average of `close` over a trailing window.
    ///
    /// `ma[i]` is the mean of `close[i-window+1..=i]` once the window has filled
    /// (`i >= window - 1`) and `None` before. Each window is summed oldest to
    /// newest. A series shorter than the window, or a zero window, yields all `None`.
    pub fn moving_average(&self, bars: &[OhlcBar], window: usize) -> Vec<Option<f64>> {
        if window == 0 {
            return vec![None; bars.len()];
        }

        (0..bars.len())
            .map(|i| {
                if i + 1 < window {
                    return None;
                }
                let sum: f64 = bars[i + 1 - window..=i].iter().map(|b| b.close).sum();
                Some(sum / window as f64)
            })
            .collect()
    }

    /// Candles with the 20- and 60-session averages merged into each record.
    pub fn build_chart(&self, bars: &[OhlcBar]) -> Vec<ChartBar> {
        let ma20 = self.moving_average(bars, SHORT_MA_WINDOW);
        let ma60 = self.moving_average(bars, LONG_MA_WINDOW);

        bars.iter()
            .zip(ma20)
            .zip(ma60)
            .map(|((bar, ma20), ma60)| ChartBar {
                bar: bar.clone(),
                ma20,
                ma60,
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
