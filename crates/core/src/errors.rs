use thiserror::Error;

/// Unified error type for the entire market-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({endpoint}, status {status}): {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Request cancelled")]
    Cancelled,

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    /// Message suitable for an inline form error (portfolio add, time machine).
    pub fn user_message(&self) -> String {
        match self {
            CoreError::ValidationError(msg) => msg.clone(),
            CoreError::Cancelled => "Request was cancelled.".to_string(),
            CoreError::NotFound(what) => format!("{what} could not be found."),
            _ => "Something went wrong while talking to the server. Please try again.".to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query strings so search terms don't end up in logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        if e.is_decode() {
            CoreError::Deserialization(sanitized)
        } else {
            CoreError::Network(sanitized)
        }
    }
}

impl From<futures::future::Aborted> for CoreError {
    fn from(_: futures::future::Aborted) -> Self {
        CoreError::Cancelled
    }
}
