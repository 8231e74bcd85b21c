//! Current market price
use thiserror::Error;

use crate::response::quote::GlobalQuote;

/// The quote did not carry a usable price
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// No `Global Quote` object, or no `05. price` in it
    #[error("could not retrieve current stock price")]
    Missing,

    /// The price was not a number
    #[error("current price is not a valid number: {0:?}")]
    InvalidPrice(String),
}

/// Read the latest price out of a `GLOBAL_QUOTE` document
pub fn current_price(quote: &GlobalQuote) -> Result<f64, QuoteError> {
    let raw = quote
        .quote
        .as_ref()
        .and_then(|fields| fields.price.as_deref())
        .ok_or(QuoteError::Missing)?;

    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| QuoteError::InvalidPrice(raw.to_owned()))
}
