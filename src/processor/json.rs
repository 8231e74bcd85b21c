//! JSON document processor
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::processor::{Processor, ensure_ok};
use crate::request::Function;
use crate::response::Response;

/// Fields Alpha Vantage sets on an HTTP 200 response when the query was rejected.
/// `Information` and `Note` carry throttling and quota messages.
const REJECTION_FIELDS: [&str; 3] = ["Error Message", "Information", "Note"];

/// Processor that decodes the body into `T`
pub struct Json<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Json<T> {
    /// Create a new JSON processor
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for Json<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Processor for Json<T> {
    type Output = T;

    fn process<R: Response>(&self, function: Function, symbol: &str, response: Result<R>) -> Result<T> {
        let resp = ensure_ok(response?)?;

        let value: serde_json::Value = serde_json::from_str(resp.body())?;
        if let Some(message) = REJECTION_FIELDS.iter().find_map(|field| value.get(*field)) {
            return Err(Error::Provider {
                function,
                symbol: symbol.to_owned(),
                message: message.as_str().map(str::to_owned).unwrap_or_else(|| message.to_string()),
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}
