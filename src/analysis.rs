//! End-to-end valuation of one symbol
use futures::future::try_join4;
use serde::Serialize;
use tracing::info;

use crate::client::AlphaVantage;
use crate::error::Result;
use crate::request::Request;
use crate::rest::{fundamentals, quote};
use crate::valuation::{
    FinancialSnapshot, ProjectionAssumptions, ValuationResult, Verdict, calculate_dcf, current_price,
};

/// Outcome of a complete run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Stock symbol
    pub symbol: String,
    /// Company name from the overview, if provided
    pub name: Option<String>,
    /// Figures the model ran on
    pub snapshot: FinancialSnapshot,
    /// Assumptions the model ran with
    pub assumptions: ProjectionAssumptions,
    /// Model output
    pub valuation: ValuationResult,
    /// Current market price
    pub price: f64,
    /// Intrinsic value against price
    pub verdict: Verdict,
}

/// Value `symbol` and compare it with the market.
///
/// The four statement queries run concurrently. The quote is only requested
/// once the valuation has succeeded, so a company that cannot be valued costs
/// no extra API call.
///
/// # Errors
///
/// Any failed query, missing field, undefined model input or unusable quote
/// aborts the run. No partial result is returned.
pub async fn valuate<Client: Request>(
    client: &AlphaVantage<Client>,
    symbol: &str,
    assumptions: ProjectionAssumptions,
) -> Result<Analysis> {
    let (income, cash_flow, balance_sheet, overview) = try_join4(
        fundamentals::income_statement(client, symbol).get(),
        fundamentals::cash_flow(client, symbol).get(),
        fundamentals::balance_sheet(client, symbol).get(),
        fundamentals::company_overview(client, symbol).get(),
    )
    .await?;

    let snapshot = FinancialSnapshot::from_documents(&income, &cash_flow, &balance_sheet, &overview)?;
    let valuation = calculate_dcf(&snapshot, &assumptions)?;
    info!(
        symbol,
        intrinsic_value = valuation.intrinsic_value_per_share,
        enterprise_value = valuation.enterprise_value,
        "valuation complete"
    );

    let global_quote = quote::global_quote(client, symbol).get().await?;
    let price = current_price(&global_quote)?;
    let verdict = Verdict::classify(valuation.intrinsic_value_per_share, price);

    Ok(Analysis {
        symbol: symbol.to_owned(),
        name: overview.name,
        snapshot,
        assumptions,
        valuation,
        price,
        verdict,
    })
}
