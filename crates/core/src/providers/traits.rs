use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::analytics::CorrelationMatrix;
use crate::models::battle::FundManager;
use crate::models::calendar::CalendarEvent;
use crate::models::consult::{ChatReply, Consultation, PortfolioAnalysis, Recommendation};
use crate::models::market::{MarketMovers, MarketNewsItem, MarketRegime, MarketSummary};
use crate::models::portfolio::{Holding, NewHolding, StatusMessage};
use crate::models::stock::{
    Competitor, NewsBriefingItem, SearchResult, StockDetail, StockEvent, VolatilityAnalysis,
};
use crate::models::time_machine::{TimeMachineRequest, TimeMachineResult};
use crate::models::watchlist::WatchlistItem;

/// Trait abstraction over the remote dashboard API.
///
/// Every number the dashboard shows is computed behind this trait.
/// `HttpDashboardApi` talks to the real service; tests plug in a mock.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    // ── Market ──────────────────────────────────────────────────────

    /// `GET /market/summary`
    async fn market_summary(&self) -> Result<MarketSummary, CoreError>;

    /// `GET /market/movers`
    async fn market_movers(&self) -> Result<MarketMovers, CoreError>;

    /// `GET /market/news`
    async fn market_news(&self) -> Result<Vec<MarketNewsItem>, CoreError>;

    /// `GET /market/regime`
    async fn market_regime(&self) -> Result<MarketRegime, CoreError>;

    /// `GET /recommendations`
    async fn recommendations(&self) -> Result<Vec<Recommendation>, CoreError>;

    // ── Stock ───────────────────────────────────────────────────────

    /// `GET /stock/{ticker}`
    async fn stock_detail(&self, ticker: &str) -> Result<StockDetail, CoreError>;

    /// `GET /consult/{ticker}`
    async fn consultation(&self, ticker: &str) -> Result<Consultation, CoreError>;

    /// `GET /search?query=`
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, CoreError>;

    /// `POST /chat/guide`
    async fn chat_guide(&self, ticker: &str, message: &str) -> Result<ChatReply, CoreError>;

    /// `GET /stock/{ticker}/competitors`
    async fn competitors(&self, ticker: &str) -> Result<Vec<Competitor>, CoreError>;

    /// `GET /stock/{ticker}/news`
    async fn stock_news(&self, ticker: &str) -> Result<Vec<NewsBriefingItem>, CoreError>;

    /// `GET /stock/{ticker}/events`
    async fn stock_events(&self, ticker: &str) -> Result<Vec<StockEvent>, CoreError>;

    /// `GET /analyze/volatility/{ticker}`
    async fn volatility(&self, ticker: &str) -> Result<VolatilityAnalysis, CoreError>;

    // ── Watchlist ───────────────────────────────────────────────────

    /// `GET /watchlist`
    async fn watchlist(&self) -> Result<Vec<WatchlistItem>, CoreError>;

    /// `POST /watchlist/{ticker}`
    async fn add_to_watchlist(&self, ticker: &str) -> Result<StatusMessage, CoreError>;

    /// `DELETE /watchlist/{ticker}`
    async fn remove_from_watchlist(&self, ticker: &str) -> Result<StatusMessage, CoreError>;

    // ── Portfolio ───────────────────────────────────────────────────

    /// `GET /portfolio`
    async fn portfolio(&self) -> Result<Vec<Holding>, CoreError>;

    /// `POST /portfolio`
    async fn add_holding(&self, holding: &NewHolding) -> Result<StatusMessage, CoreError>;

    /// `DELETE /portfolio/{ticker}`
    async fn remove_holding(&self, ticker: &str) -> Result<StatusMessage, CoreError>;

    /// `GET /portfolio/analyze`
    async fn portfolio_analysis(&self) -> Result<PortfolioAnalysis, CoreError>;

    /// `GET /portfolio/correlation`
    async fn portfolio_correlation(&self) -> Result<CorrelationMatrix, CoreError>;

    // ── Features ────────────────────────────────────────────────────

    /// `GET /battle`
    async fn battle(&self) -> Result<Vec<FundManager>, CoreError>;

    /// `GET /calendar/smart`
    async fn smart_calendar(&self) -> Result<Vec<CalendarEvent>, CoreError>;

    /// `POST /time-machine`
    async fn time_machine(&self, request: &TimeMachineRequest)
        -> Result<TimeMachineResult, CoreError>;
}
