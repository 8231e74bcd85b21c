//! Run configuration
use crate::client::{API_KEY_VAR, AlphaVantage, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::request::Request;
use crate::valuation::ProjectionAssumptions;

/// Environment variable holding the symbol to value
pub const SYMBOL_VAR: &str = "STOCK_SYMBOL";

/// Everything a run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Alpha Vantage API key
    pub api_key: String,
    /// Symbol to value
    pub symbol: String,
    /// Model assumptions
    pub assumptions: ProjectionAssumptions,
    /// Query endpoint
    pub base_url: String,
}

impl Config {
    /// Build a configuration from optional values.
    ///
    /// Blank values count as missing.
    ///
    /// # Errors
    ///
    /// [`Error::MissingConfig`] naming the environment variable for the first missing value.
    pub fn new(api_key: Option<String>, symbol: Option<String>) -> Result<Self> {
        let api_key = non_blank(api_key).ok_or(Error::MissingConfig(API_KEY_VAR))?;
        let symbol = non_blank(symbol).ok_or(Error::MissingConfig(SYMBOL_VAR))?;
        Ok(Self {
            api_key,
            symbol,
            assumptions: ProjectionAssumptions::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Replace the model assumptions
    pub fn with_assumptions(mut self, assumptions: ProjectionAssumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    /// Replace the query endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Client configured with this key and endpoint
    pub fn client<C: Request>(&self) -> AlphaVantage<C> {
        AlphaVantage::new()
            .with_key(self.api_key.clone())
            .with_base_url(self.base_url.clone())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
