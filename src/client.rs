//! Alpha Vantage API client
use crate::request::Request;

/// Query endpoint of the Alpha Vantage API
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";

/// The Alpha Vantage API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request = reqwest::Client> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// The Alpha Vantage API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request = crate::request::HyperClient> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// The Alpha Vantage API client.
///
/// You must provide your own HTTP client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl<Client: Request> AlphaVantage<Client> {
    /// Create a new client with a fresh HTTP client and no API key.
    ///
    /// Set the key with [`with_key`](Self::with_key) before making requests.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with the API key taken from the environment.
    ///
    /// Loads `.env` if present, then reads [`API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`](crate::Error::MissingConfig) if the variable is not set.
    #[cfg(feature = "dotenvy")]
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR).map_err(|_| crate::Error::MissingConfig(API_KEY_VAR))?;

        Ok(Self::new().with_key(api_key))
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dcfval::AlphaVantage;
    ///
    /// let client = AlphaVantage::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different query endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Query endpoint used by this instance.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<Client: Request> Default for AlphaVantage<Client> {
    fn default() -> Self {
        Self::new()
    }
}
