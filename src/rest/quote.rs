//! Quote endpoint

use crate::client::AlphaVantage;
use crate::processor::Json;
use crate::request::{Function, Query, Request};
use crate::response::quote::GlobalQuote;

/// Get the latest quote for a stock
pub fn global_quote<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> Query<'a, Client, Json<GlobalQuote>> {
    Query::new(client, Function::GlobalQuote, symbol).decode()
}
