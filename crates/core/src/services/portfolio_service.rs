use tracing::warn;

use crate::errors::CoreError;
use crate::events::{DashboardEvent, EventBus};
use crate::models::analytics::{AllocationSlice, PortfolioTotals};
use crate::models::portfolio::{Holding, NewHolding};
use crate::models::ticker::{partition_by_market, Market};
use crate::providers::traits::DashboardApi;

/// Aggregates fetched holdings and drives portfolio mutations.
///
/// The server owns the holdings; every mutation is followed by a full refetch,
/// so the list returned here is always the server's latest answer.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Reduce holdings to the summary card totals.
    ///
    /// Empty input yields all zeros, and so does `return_percent` whenever
    /// there is no cost basis.
    pub fn totals(&self, holdings: &[Holding]) -> PortfolioTotals {
        let total_value: f64 = holdings.iter().map(|h| h.current_value).sum();
        let total_cost: f64 = holdings.iter().map(Holding::cost_basis).sum();
        let total_return = total_value - total_cost;
        let return_percent = if total_cost > 0.0 {
            total_return / total_cost * 100.0
        } else {
            0.0
        };

        PortfolioTotals {
            total_value,
            total_cost,
            total_return,
            return_percent,
        }
    }

    /// One pie slice per holding, in list order.
    pub fn allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        holdings
            .iter()
            .map(|h| AllocationSlice {
                ticker: h.ticker.clone(),
                value: h.current_value,
            })
            .collect()
    }

    /// Split into (domestic, overseas) tables.
    pub fn split_by_market<'a>(&self, holdings: &'a [Holding]) -> (Vec<&'a Holding>, Vec<&'a Holding>) {
        partition_by_market(holdings, |h| h.ticker.as_str())
    }

    /// Holdings listed on the given market, in list order.
    pub fn holdings_in<'a>(&self, holdings: &'a [Holding], market: Market) -> Vec<&'a Holding> {
        holdings.iter().filter(|h| h.market() == market).collect()
    }

    /// Fetch holdings; on failure log and show an empty portfolio.
    pub async fn load(&self, api: &dyn DashboardApi) -> Vec<Holding> {
        match api.portfolio().await {
            Ok(holdings) => holdings,
            Err(e) => {
                warn!(error = %e, "failed to fetch portfolio");
                Vec::new()
            }
        }
    }

    /// Submit the add-holding form, then refetch.
    ///
    /// Errors are returned (not swallowed) so the form can show an inline message.
    pub async fn add_holding(
        &self,
        api: &dyn DashboardApi,
        bus: &EventBus,
        holding: NewHolding,
    ) -> Result<Vec<Holding>, CoreError> {
        self.validate_new_holding(&holding)?;
        api.add_holding(&holding).await?;
        bus.publish(DashboardEvent::PortfolioChanged);
        api.portfolio().await
    }

    /// Remove a holding by ticker, then refetch.
    pub async fn remove_holding(
        &self,
        api: &dyn DashboardApi,
        bus: &EventBus,
        ticker: &str,
    ) -> Result<Vec<Holding>, CoreError> {
        api.remove_holding(ticker).await?;
        bus.publish(DashboardEvent::PortfolioChanged);
        api.portfolio().await
    }

    /// Rules:
    /// - Ticker must not be empty
    /// - Shares and average price must be positive and finite
    fn validate_new_holding(&self, holding: &NewHolding) -> Result<(), CoreError> {
        if holding.ticker.is_empty() {
            return Err(CoreError::ValidationError("Ticker is required".into()));
        }
        if !(holding.shares.is_finite() && holding.shares > 0.0) {
            return Err(CoreError::ValidationError(format!(
                "Shares must be positive, got {}",
                holding.shares
            )));
        }
        if !(holding.avg_price.is_finite() && holding.avg_price > 0.0) {
            return Err(CoreError::ValidationError(format!(
                "Average price must be positive, got {}",
                holding.avg_price
            )));
        }
        Ok(())
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
