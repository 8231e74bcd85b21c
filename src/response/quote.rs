//! `GLOBAL_QUOTE` document
use serde::{Deserialize, Serialize};

/// `GLOBAL_QUOTE` response
///
/// Unknown symbols come back as an empty `Global Quote` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalQuote {
    /// The quote, if the provider returned one
    #[serde(rename = "Global Quote")]
    pub quote: Option<QuoteFields>,
}

/// Fields of a global quote
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteFields {
    /// Stock symbol
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    /// Latest price
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    /// Date of the latest trade
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
}
