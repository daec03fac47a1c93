pub mod errors;
pub mod events;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use models::{
    analytics::{
        AllocationSlice, CorrelationBucket, CorrelationMatrix, GaugeReading, Point, PortfolioTotals,
    },
    battle::FundManager,
    calendar::{CalendarEvent, CalendarFilter, MonthGrid},
    chart::ChartBar,
    consult::{Consultation, PortfolioAnalysis},
    market::{LandingDashboard, MarketNewsItem, MarketRegime},
    portfolio::{Holding, NewHolding, StatusMessage},
    settings::Settings,
    stock::{Competitor, NewsBriefingItem, OhlcBar, StockPage, VolatilityAnalysis},
    time_machine::{Comparison, TimeMachineResult},
    watchlist::WatchlistItem,
};
use providers::{http::HttpDashboardApi, scope::FetchScope, traits::DashboardApi};
use services::{
    analytics_service::AnalyticsService,
    calendar_service::CalendarService,
    chart_service::ChartService,
    market_service::MarketService,
    portfolio_service::PortfolioService,
    search_service::{SearchDebouncer, SearchOutcome},
    time_machine_service::TimeMachineService,
    watchlist_service::WatchlistService,
};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use errors::CoreError;
use events::{DashboardEvent, EventBus};

/// Main entry point for the market dashboard core library.
/// Holds the API client, the event bus and all services views call into.
#[must_use]
pub struct MarketDashboard {
    api: Arc<dyn DashboardApi>,
    events: EventBus,
    settings: Settings,
    portfolio_service: PortfolioService,
    chart_service: ChartService,
    analytics_service: AnalyticsService,
    market_service: MarketService,
    watchlist_service: WatchlistService,
    calendar_service: CalendarService,
    time_machine_service: TimeMachineService,
}

impl std::fmt::Debug for MarketDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDashboard")
            .field("base_url", &self.settings.base_url)
            .field("subscribers", &self.events.subscriber_count())
            .finish()
    }
}

impl MarketDashboard {
    /// Talk to the HTTP API described by `settings`.
    pub fn connect(settings: Settings) -> Result<Self, CoreError> {
        let api = HttpDashboardApi::new(&settings)?;
        Ok(Self::with_api(Arc::new(api), settings))
    }

    /// Use any `DashboardApi` implementation (tests, alternative transports).
    pub fn with_api(api: Arc<dyn DashboardApi>, settings: Settings) -> Self {
        Self {
            api,
            events: EventBus::default(),
            settings,
            portfolio_service: PortfolioService::new(),
            chart_service: ChartService::new(),
            analytics_service: AnalyticsService::new(),
            market_service: MarketService::new(),
            watchlist_service: WatchlistService::new(),
            calendar_service: CalendarService::new(),
            time_machine_service: TimeMachineService::new(),
        }
    }

    /// Share an existing bus, e.g. one owned by the application shell.
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn DashboardApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    /// A fetch scope for one view; drop it on teardown.
    pub fn scope(&self, view: impl Into<String>) -> FetchScope {
        FetchScope::new(view)
    }

    // ── Landing page ────────────────────────────────────────────────

    /// Market summary, recommendations and movers with per-feed outcomes.
    pub async fn load_landing(&self) -> LandingDashboard {
        self.market_service.load_landing(self.api.as_ref()).await
    }

    pub async fn market_news(&self) -> Vec<MarketNewsItem> {
        self.market_service.market_news(self.api.as_ref()).await
    }

    pub async fn market_regime(&self) -> Option<MarketRegime> {
        self.market_service.market_regime(self.api.as_ref()).await
    }

    /// Label and needle geometry of the fear & greed gauge.
    #[must_use]
    pub fn fear_greed(&self, value: f64, pivot: Point) -> GaugeReading {
        self.analytics_service.fear_greed(value, pivot)
    }

    // ── Stock detail ────────────────────────────────────────────────

    pub async fn load_stock_page(&self, ticker: &str) -> StockPage {
        self.market_service.load_stock_page(self.api.as_ref(), ticker).await
    }

    /// Candles with 20/60-session moving averages.
    #[must_use]
    pub fn build_chart(&self, bars: &[OhlcBar]) -> Vec<ChartBar> {
        self.chart_service.build_chart(bars)
    }

    pub async fn consultation(&self, ticker: &str) -> Option<Consultation> {
        self.market_service.consultation(self.api.as_ref(), ticker).await
    }

    pub async fn competitors(&self, ticker: &str) -> Vec<Competitor> {
        self.market_service.competitors(self.api.as_ref(), ticker).await
    }

    pub async fn news_briefing(&self, ticker: &str) -> Vec<NewsBriefingItem> {
        self.market_service.news_briefing(self.api.as_ref(), ticker).await
    }

    pub async fn volatility(&self, ticker: &str) -> Option<VolatilityAnalysis> {
        self.market_service.volatility(self.api.as_ref(), ticker).await
    }

    /// Ask the chat guide about a ticker; returns the markdown answer.
    pub async fn ask_guide(&self, ticker: &str, message: &str) -> Result<String, CoreError> {
        self.market_service
            .ask_guide(self.api.as_ref(), ticker, message)
            .await
    }

    // ── Search ──────────────────────────────────────────────────────

    /// A debouncer for one search input. Each input gets its own so typing
    /// in one never supersedes a query pending in another.
    pub fn search_box(&self) -> SearchDebouncer {
        SearchDebouncer::new(self.settings.search_debounce())
    }

    /// Debounced search through `search_box`; call on every keystroke.
    pub async fn search(&self, search_box: &SearchDebouncer, query: &str) -> SearchOutcome {
        search_box.search(self.api.as_ref(), query).await
    }

    // ── Watchlist ───────────────────────────────────────────────────

    pub async fn watchlist(&self) -> Vec<WatchlistItem> {
        self.watchlist_service.load(self.api.as_ref()).await
    }

    /// Live watchlist for a view, refreshed on every `WatchlistChanged`.
    pub fn watch_watchlist(&self, scope: &FetchScope) -> watch::Receiver<Vec<WatchlistItem>> {
        self.watchlist_service
            .watch(Arc::clone(&self.api), &self.events, scope)
    }

    pub async fn add_to_watchlist(&self, ticker: &str) -> Result<StatusMessage, CoreError> {
        self.watchlist_service
            .add(self.api.as_ref(), &self.events, ticker)
            .await
    }

    pub async fn remove_from_watchlist(&self, ticker: &str) -> Result<StatusMessage, CoreError> {
        self.watchlist_service
            .remove(self.api.as_ref(), &self.events, ticker)
            .await
    }

    /// Flip membership; returns whether the ticker is now watchlisted.
    pub async fn toggle_watchlist(
        &self,
        ticker: &str,
        currently_watchlisted: bool,
    ) -> Result<bool, CoreError> {
        self.watchlist_service
            .toggle(self.api.as_ref(), &self.events, ticker, currently_watchlisted)
            .await
    }

    // ── Portfolio ───────────────────────────────────────────────────

    pub async fn portfolio(&self) -> Vec<Holding> {
        self.portfolio_service.load(self.api.as_ref()).await
    }

    #[must_use]
    pub fn portfolio_totals(&self, holdings: &[Holding]) -> PortfolioTotals {
        self.portfolio_service.totals(holdings)
    }

    #[must_use]
    pub fn portfolio_allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        self.portfolio_service.allocation(holdings)
    }

    /// Submit a new holding and return the refetched portfolio.
    pub async fn add_holding(&self, holding: NewHolding) -> Result<Vec<Holding>, CoreError> {
        self.portfolio_service
            .add_holding(self.api.as_ref(), &self.events, holding)
            .await
    }

    /// Remove a holding and return the refetched portfolio.
    pub async fn remove_holding(&self, ticker: &str) -> Result<Vec<Holding>, CoreError> {
        self.portfolio_service
            .remove_holding(self.api.as_ref(), &self.events, ticker)
            .await
    }

    pub async fn portfolio_analysis(&self) -> Option<PortfolioAnalysis> {
        self.market_service.portfolio_analysis(self.api.as_ref()).await
    }

    pub async fn correlation(&self) -> CorrelationMatrix {
        self.market_service.correlation(self.api.as_ref()).await
    }

    #[must_use]
    pub fn correlation_bucket(&self, value: f64) -> CorrelationBucket {
        self.analytics_service.correlation_bucket(value)
    }

    // ── Features ────────────────────────────────────────────────────

    pub async fn battle(&self) -> Vec<FundManager> {
        self.market_service.battle(self.api.as_ref()).await
    }

    pub async fn smart_calendar(&self) -> Vec<CalendarEvent> {
        self.market_service.smart_calendar(self.api.as_ref()).await
    }

    #[must_use]
    pub fn filter_calendar<'a>(
        &self,
        events: &'a [CalendarEvent],
        filter: CalendarFilter,
        selected: Option<NaiveDate>,
    ) -> Vec<&'a CalendarEvent> {
        self.calendar_service.filter(events, filter, selected)
    }

    pub fn month_grid(&self, year: i32, month: u32) -> Result<MonthGrid, CoreError> {
        self.calendar_service.month_grid(year, month)
    }

    /// Run the time machine for an investment made `years` before today.
    pub async fn time_machine(
        &self,
        ticker: &str,
        amount: f64,
        years: u32,
    ) -> Result<TimeMachineResult, CoreError> {
        let today = chrono::Utc::now().date_naive();
        self.time_machine_service
            .calculate(self.api.as_ref(), ticker, amount, years, today)
            .await
    }

    /// What a profit could buy.
    #[must_use]
    pub fn compare_profit(&self, amount: f64) -> Option<Comparison> {
        self.time_machine_service.compare(amount)
    }
}
