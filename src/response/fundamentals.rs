//! Fundamental data documents
//!
//! Alpha Vantage reports every figure as a string, and uses `"None"` for
//! figures it does not have. Fields are kept as optional strings here and
//! converted by [`FinancialSnapshot`](crate::valuation::FinancialSnapshot).
use serde::{Deserialize, Serialize};

/// `INCOME_STATEMENT` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Stock symbol
    pub symbol: Option<String>,
    /// Annual reports, most recent first
    pub annual_reports: Option<Vec<IncomeReport>>,
}

/// One annual income statement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    /// Fiscal year end, `YYYY-MM-DD`
    pub fiscal_date_ending: Option<String>,
    /// Reporting currency
    pub reported_currency: Option<String>,
    /// Total revenue
    pub total_revenue: Option<String>,
}

/// `CASH_FLOW` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    /// Stock symbol
    pub symbol: Option<String>,
    /// Annual reports, most recent first
    pub annual_reports: Option<Vec<CashFlowReport>>,
}

/// One annual cash flow statement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    /// Fiscal year end, `YYYY-MM-DD`
    pub fiscal_date_ending: Option<String>,
    /// Reporting currency
    pub reported_currency: Option<String>,
    /// Free cash flow
    pub free_cash_flow: Option<String>,
}

/// `BALANCE_SHEET` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Stock symbol
    pub symbol: Option<String>,
    /// Annual reports, most recent first
    pub annual_reports: Option<Vec<BalanceSheetReport>>,
}

/// One annual balance sheet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetReport {
    /// Fiscal year end, `YYYY-MM-DD`
    pub fiscal_date_ending: Option<String>,
    /// Total liabilities
    pub total_liabilities: Option<String>,
    /// Cash and cash equivalents
    pub cash_and_cash_equivalents: Option<String>,
}

/// `OVERVIEW` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyOverview {
    /// Stock symbol
    pub symbol: Option<String>,
    /// Company name
    pub name: Option<String>,
    /// Trading currency
    pub currency: Option<String>,
    /// Shares outstanding
    pub shares_outstanding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_field_names() {
        let cash_flow: CashFlow = serde_json::from_str(
            r#"{"symbol":"IBM","annualReports":[{"fiscalDateEnding":"2023-12-31","reportedCurrency":"USD","freeCashFlow":"11200000000","operatingCashflow":"13931000000"}],"quarterlyReports":[]}"#,
        )
        .unwrap();
        let report = &cash_flow.annual_reports.unwrap()[0];
        assert_eq!(report.free_cash_flow.as_deref(), Some("11200000000"));
        assert_eq!(report.fiscal_date_ending.as_deref(), Some("2023-12-31"));

        let overview: CompanyOverview =
            serde_json::from_str(r#"{"Symbol":"IBM","Name":"International Business Machines","SharesOutstanding":"926000000"}"#)
                .unwrap();
        assert_eq!(overview.shares_outstanding.as_deref(), Some("926000000"));
        assert_eq!(overview.name.as_deref(), Some("International Business Machines"));
    }

    #[test]
    fn missing_lists_decode_as_none() {
        let sheet: BalanceSheet = serde_json::from_str("{}").unwrap();
        assert!(sheet.annual_reports.is_none());
    }
}
