//! Query builder shared by every endpoint

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::AlphaVantage;
use crate::error::{Error, Result};
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw};
use crate::request::{Function, Request};

/// Query request builder for a single function and symbol
pub struct Query<'a, Client: Request, P: Processor = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Function to query
    pub function: Function,
    /// Stock symbol
    pub symbol: String,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> Query<'a, C, Raw> {
    /// Create a new query (returns raw JSON by default)
    pub fn new(client: &'a AlphaVantage<C>, function: Function, symbol: impl Into<String>) -> Self {
        Self {
            client,
            function,
            symbol: symbol.into(),
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Query<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Decode the response body into `T`
    pub fn decode<T: DeserializeOwned>(self) -> Query<'a, C, Json<T>> {
        Query {
            client: self.client,
            function: self.function,
            symbol: self.symbol,
            processor: Json::new(),
        }
    }

    /// Full request URL, including the API key
    pub fn url(&self) -> Result<String> {
        let apikey = self.client.api_key().ok_or(Error::MissingApiKey)?;
        let query = serde_urlencoded::to_string(Params {
            function: self.function,
            symbol: &self.symbol,
            apikey,
        })
        .map_err(|e| Error::Custom(format!("Failed to encode query: {e}")))?;
        Ok(format!("{}?{}", self.client.base_url(), query))
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Query<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let result = match self.url() {
            Ok(url) => {
                debug!(function = %self.function, symbol = %self.symbol, "querying Alpha Vantage");
                let response = self.client.client().get(&url).await;
                self.processor.process(self.function, &self.symbol, response)
            }
            Err(error) => Err(error),
        };

        result.inspect_err(|error| {
            warn!(function = %self.function, symbol = %self.symbol, %error, "query failed");
        })
    }
}

#[derive(Serialize)]
struct Params<'p> {
    function: Function,
    symbol: &'p str,
    apikey: &'p str,
}
