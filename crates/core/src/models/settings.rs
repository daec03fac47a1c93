use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;

/// Base URL of the local development API server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api";

/// Client configuration for talking to the dashboard API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root of the JSON API; endpoint paths are appended to it (e.g. `/market/summary`).
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Quiet period after the last keystroke before a search query is sent.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `DASHBOARD_API_URL`, `DASHBOARD_TIMEOUT_SECS`
    /// and `DASHBOARD_SEARCH_DEBOUNCE_MS` when set.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup("DASHBOARD_API_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                settings.base_url = trimmed.to_string();
            }
        }
        if let Some(raw) = lookup("DASHBOARD_TIMEOUT_SECS") {
            settings.timeout_secs = parse_number("DASHBOARD_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = lookup("DASHBOARD_SEARCH_DEBOUNCE_MS") {
            settings.search_debounce_ms = parse_number("DASHBOARD_SEARCH_DEBOUNCE_MS", &raw)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(CoreError::ValidationError(
                "Request timeout must be at least one second".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, CoreError> {
    raw.trim().parse().map_err(|_| {
        CoreError::ValidationError(format!("{key} must be a non-negative integer, got '{raw}'"))
    })
}
