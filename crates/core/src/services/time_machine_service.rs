use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::errors::CoreError;
use crate::models::time_machine::{Comparison, ReferenceItem, TimeMachineRequest, TimeMachineResult};
use crate::providers::traits::DashboardApi;

/// "What if I had bought back then?" calculator.
///
/// The ROI itself comes from the server; this service builds the request
/// and turns the profit into something tangible.
pub struct TimeMachineService {
    catalogue: Vec<ReferenceItem>,
}

impl TimeMachineService {
    pub fn new() -> Self {
        Self::with_catalogue(ReferenceItem::catalogue())
    }

    /// Use a custom reference list. It must be sorted ascending by price.
    pub fn with_catalogue(catalogue: Vec<ReferenceItem>) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &[ReferenceItem] {
        &self.catalogue
    }

    /// Most expensive catalogue item the amount can buy, and how many.
    ///
    /// Scans ascending and keeps the last affordable item. When the amount is
    /// below the cheapest price the cheapest item is still returned, with
    /// `count == 0` and `affordable == false`. `None` only for an empty catalogue.
    pub fn compare(&self, amount: f64) -> Option<Comparison> {
        let first = self.catalogue.first()?;
        let mut best = first;
        let mut affordable = false;
        for item in &self.catalogue {
            if amount >= item.price {
                best = item;
                affordable = true;
            }
        }

        let count = if best.price > 0.0 && amount > 0.0 {
            (amount / best.price).floor() as u64
        } else {
            0
        };

        Some(Comparison {
            item: best.clone(),
            count,
            affordable,
        })
    }

    /// Purchase date `years` calendar years before `today`.
    ///
    /// Feb 29 rolls over to Mar 1 in non-leap target years. `None` when the
    /// target year is outside the calendar range.
    pub fn past_date(&self, today: NaiveDate, years: u32) -> Option<NaiveDate> {
        let year = today.year().checked_sub(i32::try_from(years).ok()?)?;
        NaiveDate::from_ymd_opt(year, today.month(), today.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// Build the request for the form inputs.
    pub fn build_request(
        &self,
        ticker: &str,
        amount: f64,
        years: u32,
        today: NaiveDate,
    ) -> Result<TimeMachineRequest, CoreError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(CoreError::ValidationError("Please select a stock first.".into()));
        }
        if !(amount.is_finite() && amount > 0.0) {
            return Err(CoreError::ValidationError(format!(
                "Investment amount must be positive, got {amount}"
            )));
        }

        let date = self.past_date(today, years).ok_or_else(|| {
            CoreError::ValidationError(format!("Cannot go back {years} years"))
        })?;

        Ok(TimeMachineRequest {
            ticker: ticker.to_string(),
            amount,
            date: date.format("%Y-%m-%d").to_string(),
        })
    }

    /// Validate, then ask the server. Validation failures never hit the network.
    pub async fn calculate(
        &self,
        api: &dyn DashboardApi,
        ticker: &str,
        amount: f64,
        years: u32,
        today: NaiveDate,
    ) -> Result<TimeMachineResult, CoreError> {
        let request = self.build_request(ticker, amount, years, today)?;
        api.time_machine(&request).await.map_err(|e| {
            warn!(ticker = %request.ticker, error = %e, "time machine calculation failed");
            e
        })
    }
}

impl Default for TimeMachineService {
    fn default() -> Self {
        Self::new()
    }
}
