use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::traits::DashboardApi;
use crate::errors::CoreError;
use crate::models::analytics::CorrelationMatrix;
use crate::models::battle::FundManager;
use crate::models::calendar::CalendarEvent;
use crate::models::consult::{
    ChatReply, ChatRequest, Consultation, PortfolioAnalysis, Recommendation,
};
use crate::models::market::{MarketMovers, MarketNewsItem, MarketRegime, MarketSummary};
use crate::models::portfolio::{Holding, NewHolding, StatusMessage};
use crate::models::settings::Settings;
use crate::models::stock::{
    Competitor, NewsBriefingItem, SearchResult, StockDetail, StockEvent, VolatilityAnalysis,
};
use crate::models::time_machine::{TimeMachineRequest, TimeMachineResult};
use crate::models::watchlist::WatchlistItem;

/// Longest error body kept in an `Api` error message.
const MAX_ERROR_BODY: usize = 200;

/// JSON-over-HTTP client for the dashboard API.
///
/// - **Base URL**: from `Settings` (default `http://localhost:9000/api`).
/// - **Timeout**: from `Settings`, applied to every request.
/// - **Errors**: non-2xx responses become `CoreError::Api`; nothing is retried.
/// - **Schema**: responses are trusted; missing optional fields default.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: Client,
    base_url: Url,
}

impl HttpDashboardApi {
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(&settings.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Each segment is percent-encoded,
    /// so tickers like `^KS11` or `BRK/B` stay a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, CoreError> {
        let url = self.endpoint(segments)?;
        self.execute(self.client.request(Method::GET, url.clone()), &url)
            .await
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        self.execute(self.client.request(method, url.clone()).json(body), &url)
            .await
    }

    async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<T, CoreError> {
        let url = self.endpoint(segments)?;
        self.execute(self.client.request(method, url.clone()), &url)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T, CoreError> {
        let endpoint = url.path().to_string();
        debug!(endpoint = %endpoint, "dashboard api request");
        let response = request.send().await?;
        Self::read_json(response, &endpoint).await
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
        endpoint: &str,
    ) -> Result<T, CoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_detail(&body);
            warn!(endpoint, status = status.as_u16(), "dashboard api returned an error");
            return Err(CoreError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            CoreError::Deserialization(format!("Failed to parse response of {endpoint}: {e}"))
        })
    }
}

/// Error bodies look like `{"detail": "..."}`; fall back to the raw text.
fn extract_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
    let text = detail.unwrap_or_else(|| body.trim().to_string());
    text.chars().take(MAX_ERROR_BODY).collect()
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn market_summary(&self) -> Result<MarketSummary, CoreError> {
        self.get(&["market", "summary"]).await
    }

    async fn market_movers(&self) -> Result<MarketMovers, CoreError> {
        self.get(&["market", "movers"]).await
    }

    async fn market_news(&self) -> Result<Vec<MarketNewsItem>, CoreError> {
        self.get(&["market", "news"]).await
    }

    async fn market_regime(&self) -> Result<MarketRegime, CoreError> {
        self.get(&["market", "regime"]).await
    }

    async fn recommendations(&self) -> Result<Vec<Recommendation>, CoreError> {
        self.get(&["recommendations"]).await
    }

    async fn stock_detail(&self, ticker: &str) -> Result<StockDetail, CoreError> {
        self.get(&["stock", ticker]).await
    }

    async fn consultation(&self, ticker: &str) -> Result<Consultation, CoreError> {
        self.get(&["consult", ticker]).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, CoreError> {
        let url = self.endpoint(&["search"])?;
        let request = self
            .client
            .request(Method::GET, url.clone())
            .query(&[("query", query)]);
        self.execute(request, &url).await
    }

    async fn chat_guide(&self, ticker: &str, message: &str) -> Result<ChatReply, CoreError> {
        let body = ChatRequest {
            ticker: ticker.to_string(),
            message: message.to_string(),
        };
        self.send_json(Method::POST, &["chat", "guide"], &body).await
    }

    async fn competitors(&self, ticker: &str) -> Result<Vec<Competitor>, CoreError> {
        self.get(&["stock", ticker, "competitors"]).await
    }

    async fn stock_news(&self, ticker: &str) -> Result<Vec<NewsBriefingItem>, CoreError> {
        self.get(&["stock", ticker, "news"]).await
    }

    async fn stock_events(&self, ticker: &str) -> Result<Vec<StockEvent>, CoreError> {
        self.get(&["stock", ticker, "events"]).await
    }

    async fn volatility(&self, ticker: &str) -> Result<VolatilityAnalysis, CoreError> {
        self.get(&["analyze", "volatility", ticker]).await
    }

    async fn watchlist(&self) -> Result<Vec<WatchlistItem>, CoreError> {
        self.get(&["watchlist"]).await
    }

    async fn add_to_watchlist(&self, ticker: &str) -> Result<StatusMessage, CoreError> {
        self.send_empty(Method::POST, &["watchlist", ticker]).await
    }

    async fn remove_from_watchlist(&self, ticker: &str) -> Result<StatusMessage, CoreError> {
        self.send_empty(Method::DELETE, &["watchlist", ticker]).await
    }

    async fn portfolio(&self) -> Result<Vec<Holding>, CoreError> {
        self.get(&["portfolio"]).await
    }

    async fn add_holding(&self, holding: &NewHolding) -> Result<StatusMessage, CoreError> {
        self.send_json(Method::POST, &["portfolio"], holding).await
    }

    async fn remove_holding(&self, ticker: &str) -> Result<StatusMessage, CoreError> {
        self.send_empty(Method::DELETE, &["portfolio", ticker]).await
    }

    async fn portfolio_analysis(&self) -> Result<PortfolioAnalysis, CoreError> {
        self.get(&["portfolio", "analyze"]).await
    }

    async fn portfolio_correlation(&self) -> Result<CorrelationMatrix, CoreError> {
        self.get(&["portfolio", "correlation"]).await
    }

    async fn battle(&self) -> Result<Vec<FundManager>, CoreError> {
        self.get(&["battle"]).await
    }

    async fn smart_calendar(&self) -> Result<Vec<CalendarEvent>, CoreError> {
        self.get(&["calendar", "smart"]).await
    }

    async fn time_machine(
        &self,
        request: &TimeMachineRequest,
    ) -> Result<TimeMachineResult, CoreError> {
        self.send_json(Method::POST, &["time-machine"], request).await
    }
}
