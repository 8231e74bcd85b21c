//! Error types
use thiserror::Error;

use crate::request::Function;
use crate::valuation::quote::QuoteError;
use crate::valuation::snapshot::ParseError;
use crate::valuation::dcf::ValuationError;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a valuation run
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was set on the client
    #[error("API key not set")]
    MissingApiKey,

    /// A required configuration value was not provided
    #[error("{0} not found, set it in the environment or pass it on the command line")]
    MissingConfig(&'static str),

    /// The transport failed before a response was read
    #[error("transport error: {0}")]
    Transport(String),

    /// reqwest transport failure
    #[cfg(feature = "reqwest")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-200 response from the API
    #[error("API returned status {status}: {message}")]
    ApiError {
        /// Value of the `X-Request-Id` header, if any
        request_id: Option<String>,
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// The payload carried an explicit `Error Message` field
    #[error("error from API for {symbol} ({function}): {message}")]
    Provider {
        /// Function that was queried
        function: Function,
        /// Symbol that was queried
        symbol: String,
        /// Message reported by the provider
        message: String,
    },

    /// The body was not valid JSON, or did not match the document shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A required financial field was missing or malformed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The DCF could not be evaluated
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// The current price could not be read
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Anything else
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Process exit code for this error category
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingApiKey | Self::MissingConfig(_) => 2,
            Self::Transport(_) | Self::ApiError { .. } | Self::Provider { .. } | Self::Json(_) => 3,
            #[cfg(feature = "reqwest")]
            Self::Http(_) => 3,
            Self::Parse(_) | Self::Quote(_) => 4,
            Self::Valuation(_) => 5,
            Self::Custom(_) => 1,
        }
    }
}
