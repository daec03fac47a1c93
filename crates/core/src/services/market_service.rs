use std::collections::HashMap;
use std::future::Future;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::analytics::CorrelationMatrix;
use crate::models::battle::FundManager;
use crate::models::calendar::CalendarEvent;
use crate::models::consult::{Consultation, PortfolioAnalysis};
use crate::models::market::{
    DashboardSource, LandingDashboard, MarketNewsItem, MarketRegime, SourceOutcome,
};
use crate::models::stock::{
    Competitor, NewsBriefingItem, StockPage, VolatilityAnalysis,
};
use crate::providers::traits::DashboardApi;
use crate::services::chart_service::ChartService;

/// Fetches what each view needs on mount.
///
/// Widgets fail independently: a failed request is logged and the widget
/// falls back to its empty state. Nothing is retried.
pub struct MarketService {
    chart_service: ChartService,
}

impl MarketService {
    pub fn new() -> Self {
        Self {
            chart_service: ChartService::new(),
        }
    }

    /// Landing page: market summary, recommendations and movers, fetched
    /// concurrently. Each feed records its own outcome, so two successes still
    /// render when the third fails.
    pub async fn load_landing(&self, api: &dyn DashboardApi) -> LandingDashboard {
        let (market, recommendations, movers) = tokio::join!(
            api.market_summary(),
            api.recommendations(),
            api.market_movers(),
        );

        let mut outcomes = HashMap::new();
        let market = record(&mut outcomes, DashboardSource::MarketSummary, market);
        let recommendations = record(&mut outcomes, DashboardSource::Recommendations, recommendations);
        let movers = record(&mut outcomes, DashboardSource::Movers, movers);

        LandingDashboard {
            market,
            recommendations,
            movers,
            outcomes,
        }
    }

    /// Stock detail view: detail, chart events and watchlist membership,
    /// fetched concurrently; the candle chart is derived from the history.
    pub async fn load_stock_page(&self, api: &dyn DashboardApi, ticker: &str) -> StockPage {
        let (detail, events, watchlist) = tokio::join!(
            api.stock_detail(ticker),
            api.stock_events(ticker),
            api.watchlist(),
        );

        let detail = match detail {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(ticker, error = %e, "failed to fetch stock detail");
                None
            }
        };
        let chart = detail
            .as_ref()
            .map(|d| self.chart_service.build_chart(&d.history))
            .unwrap_or_default();
        let events = events.unwrap_or_else(|e| {
            warn!(ticker, error = %e, "failed to fetch stock events");
            Vec::new()
        });
        let watchlisted = watchlist
            .map(|items| items.iter().any(|item| item.ticker == ticker))
            .unwrap_or_else(|e| {
                warn!(ticker, error = %e, "failed to fetch watchlist");
                false
            });

        StockPage {
            detail,
            chart,
            events,
            watchlisted,
        }
    }

    pub async fn consultation(&self, api: &dyn DashboardApi, ticker: &str) -> Option<Consultation> {
        or_none("consultation", api.consultation(ticker)).await
    }

    pub async fn competitors(&self, api: &dyn DashboardApi, ticker: &str) -> Vec<Competitor> {
        or_default("competitors", api.competitors(ticker)).await
    }

    pub async fn news_briefing(&self, api: &dyn DashboardApi, ticker: &str) -> Vec<NewsBriefingItem> {
        or_default("news briefing", api.stock_news(ticker)).await
    }

    pub async fn volatility(&self, api: &dyn DashboardApi, ticker: &str) -> Option<VolatilityAnalysis> {
        or_none("volatility analysis", api.volatility(ticker)).await
    }

    pub async fn market_news(&self, api: &dyn DashboardApi) -> Vec<MarketNewsItem> {
        or_default("market news", api.market_news()).await
    }

    pub async fn market_regime(&self, api: &dyn DashboardApi) -> Option<MarketRegime> {
        or_none("market regime", api.market_regime()).await
    }

    pub async fn portfolio_analysis(&self, api: &dyn DashboardApi) -> Option<PortfolioAnalysis> {
        or_none("portfolio analysis", api.portfolio_analysis()).await
    }

    /// Empty matrix on failure; the heatmap hides itself when empty.
    pub async fn correlation(&self, api: &dyn DashboardApi) -> CorrelationMatrix {
        or_default("portfolio correlation", api.portfolio_correlation()).await
    }

    pub async fn battle(&self, api: &dyn DashboardApi) -> Vec<FundManager> {
        or_default("fund battle", api.battle()).await
    }

    pub async fn smart_calendar(&self, api: &dyn DashboardApi) -> Vec<CalendarEvent> {
        or_default("smart calendar", api.smart_calendar()).await
    }

    /// Chat answers are shown inline, so the error is returned.
    pub async fn ask_guide(
        &self,
        api: &dyn DashboardApi,
        ticker: &str,
        message: &str,
    ) -> Result<String, CoreError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(CoreError::ValidationError("Message must not be empty".into()));
        }
        Ok(api.chat_guide(ticker, message).await?.response)
    }
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new()
    }
}

fn record<T>(
    outcomes: &mut HashMap<DashboardSource, SourceOutcome>,
    source: DashboardSource,
    result: Result<T, CoreError>,
) -> Option<T> {
    match result {
        Ok(value) => {
            outcomes.insert(source, SourceOutcome::Loaded);
            Some(value)
        }
        Err(e) => {
            warn!(source = %source, error = %e, "landing feed failed");
            outcomes.insert(source, SourceOutcome::Failed(e.to_string()));
            None
        }
    }
}

async fn or_none<T, F>(widget: &str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T, CoreError>>,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(widget, error = %e, "widget fetch failed");
            None
        }
    }
}

async fn or_default<T, F>(widget: &str, fut: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, CoreError>>,
{
    or_none(widget, fut).await.unwrap_or_default()
}
