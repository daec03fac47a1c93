use serde::{Deserialize, Serialize};

/// Exchange suffixes of the two domestic venues (KOSPI, KOSDAQ).
pub const DOMESTIC_SUFFIXES: [&str; 2] = [".KS", ".KQ"];

/// Which table an instrument is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    /// Listed on KOSPI (`.KS`) or KOSDAQ (`.KQ`), priced in won
    Domestic,
    /// Everything else, priced in dollars
    Overseas,
}

impl Market {
    /// Classify a ticker by its exchange suffix. Case-sensitive exact suffix match:
    /// `005930.KS` is domestic, `005930.ks` and `AAPL` are overseas.
    pub fn of(ticker: &str) -> Self {
        if DOMESTIC_SUFFIXES.iter().any(|s| ticker.ends_with(s)) {
            Market::Domestic
        } else {
            Market::Overseas
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Market::Domestic => "₩",
            Market::Overseas => "$",
        }
    }

    /// Format a price the way this market displays it:
    /// won as a thousands-grouped integer, dollars with two decimals.
    pub fn format_price(&self, price: f64) -> String {
        match self {
            Market::Domestic => format!("₩{}", group_thousands(price.round() as i64)),
            Market::Overseas => format!("${price:.2}"),
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Market::Domestic => write!(f, "Domestic"),
            Market::Overseas => write!(f, "Overseas"),
        }
    }
}

/// Shorthand for `Market::of(ticker) == Market::Domestic`.
pub fn is_domestic(ticker: &str) -> bool {
    Market::of(ticker) == Market::Domestic
}

/// Price string with the currency symbol implied by the ticker's suffix.
pub fn format_price(ticker: &str, price: f64) -> String {
    Market::of(ticker).format_price(price)
}

/// Split items into (domestic, overseas), preserving order within each side.
pub fn partition_by_market<T, F>(items: &[T], ticker_of: F) -> (Vec<&T>, Vec<&T>)
where
    F: Fn(&T) -> &str,
{
    items
        .iter()
        .partition(|item| Market::of(ticker_of(item)) == Market::Domestic)
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

