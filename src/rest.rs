//! REST API endpoints for Alpha Vantage
//!
//! Every endpoint returns a [`Query`] builder; call `.get()` to execute it.
use crate::client::AlphaVantage;
use crate::request::{Function, Query, Request};

pub mod fundamentals;
pub mod quote;

/// Query any supported function and get the raw JSON body back
///
/// # Example
/// ```no_run
/// # use dcfval::AlphaVantage;
/// # use dcfval::request::Function;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let json = dcfval::rest::query(&client, Function::Overview, "IBM")
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn query<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    function: Function,
    symbol: impl Into<String>,
) -> Query<'a, Client> {
    Query::new(client, function, symbol)
}
