//! Response processors
//!
//! A processor turns the transport result of a query into the output the
//! caller asked for: the raw body with [`Raw`], or a serde document with
//! [`Json`]. Both reject non-200 responses.
use crate::error::{Error, Result};
use crate::request::Function;
use crate::response::Response;

mod json;

pub use json::Json;

/// Converts a response into a typed output
pub trait Processor {
    /// Output of the processor
    type Output;

    /// Process the response of a query for `function` and `symbol`
    fn process<R: Response>(&self, function: Function, symbol: &str, response: Result<R>) -> Result<Self::Output>;
}

/// Raw processor returning the response body unchanged
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, _function: Function, _symbol: &str, response: Result<R>) -> Result<String> {
        let resp = ensure_ok(response?)?;
        Ok(resp.body().to_owned())
    }
}

fn ensure_ok<R: Response>(resp: R) -> Result<R> {
    if resp.status() != 200 {
        return Err(Error::ApiError {
            request_id: resp.request_id().to_owned(),
            status: resp.status(),
            message: resp.body().to_owned(),
        });
    }
    Ok(resp)
}
