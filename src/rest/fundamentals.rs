//! Fundamental data endpoints returning decoded documents

use crate::client::AlphaVantage;
use crate::processor::Json;
use crate::request::{Function, Query, Request};
use crate::response::fundamentals::{BalanceSheet, CashFlow, CompanyOverview, IncomeStatement};

/// Get income statements for a stock
///
/// # Example
/// ```no_run
/// # use dcfval::AlphaVantage;
/// # async fn example() {
/// # let client = AlphaVantage::default().with_key("api-key");
/// let statement = dcfval::rest::fundamentals::income_statement(&client, "IBM")
///     .get()
///     .await
///     .unwrap();
/// println!("{:?}", statement.annual_reports);
/// # }
/// ```
pub fn income_statement<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> Query<'a, Client, Json<IncomeStatement>> {
    Query::new(client, Function::IncomeStatement, symbol).decode()
}

/// Get cash flow statements for a stock
pub fn cash_flow<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> Query<'a, Client, Json<CashFlow>> {
    Query::new(client, Function::CashFlow, symbol).decode()
}

/// Get balance sheets for a stock
pub fn balance_sheet<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> Query<'a, Client, Json<BalanceSheet>> {
    Query::new(client, Function::BalanceSheet, symbol).decode()
}

/// Get company overview for a stock
pub fn company_overview<'a, Client: Request>(
    client: &'a AlphaVantage<Client>,
    symbol: impl Into<String>,
) -> Query<'a, Client, Json<CompanyOverview>> {
    Query::new(client, Function::Overview, symbol).decode()
}

#[cfg(all(test, feature = "dotenvy", any(feature = "hyper", feature = "reqwest")))]
mod tests {
    use super::*;

    fn setup() -> crate::AlphaVantage {
        crate::AlphaVantage::from_env()
            .expect("Failed to create client. Make sure ALPHA_VANTAGE_API_KEY is set in .env file")
    }

    #[tokio::test]
    #[ignore]
    async fn test_cash_flow() {
        let client = setup();
        let result = cash_flow(&client, "IBM").get().await;
        assert!(result.is_ok(), "Failed to fetch cash flow: {result:?}");
    }

    #[tokio::test]
    #[ignore]
    async fn test_company_overview() {
        let client = setup();
        let result = company_overview(&client, "IBM").get().await;
        assert!(result.is_ok(), "Failed to fetch company overview: {result:?}");
    }
}
