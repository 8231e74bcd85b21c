//! Extraction of the figures the model needs from the provider documents
use serde::Serialize;
use thiserror::Error;

use crate::request::Function;
use crate::response::fundamentals::{BalanceSheet, CashFlow, CompanyOverview, IncomeStatement};

/// A required figure could not be read from a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `annualReports` was absent or empty
    #[error("no annual reports in {document} response")]
    MissingReports {
        /// Document the reports were expected in
        document: Function,
    },

    /// The field was absent
    #[error("missing field '{field}' in {document} response")]
    MissingField {
        /// Document the field was expected in
        document: Function,
        /// Provider name of the field
        field: &'static str,
    },

    /// The field was present but not a usable number
    #[error("field '{field}' is not a valid number: {value:?}")]
    InvalidNumber {
        /// Provider name of the field
        field: &'static str,
        /// Raw value
        value: String,
    },
}

/// Most recent annual figures for one company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSnapshot {
    /// Fiscal year end of the cash flow report
    pub fiscal_date_ending: Option<String>,
    /// Free cash flow
    pub free_cash_flow: f64,
    /// Total revenue
    pub total_revenue: f64,
    /// Shares outstanding
    pub shares_outstanding: u64,
    /// Total liabilities, used as the debt figure
    pub total_liabilities: f64,
    /// Cash and cash equivalents
    pub cash_and_equivalents: f64,
}

impl FinancialSnapshot {
    /// Build a snapshot from index 0 of each document's annual reports.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered, naming the offending document or field.
    pub fn from_documents(
        income: &IncomeStatement,
        cash_flow: &CashFlow,
        balance_sheet: &BalanceSheet,
        overview: &CompanyOverview,
    ) -> Result<Self, ParseError> {
        let cash_flow_report = latest(&cash_flow.annual_reports, Function::CashFlow)?;
        let income_report = latest(&income.annual_reports, Function::IncomeStatement)?;
        let balance_report = latest(&balance_sheet.annual_reports, Function::BalanceSheet)?;

        let free_cash_flow = decimal(
            &cash_flow_report.free_cash_flow,
            Function::CashFlow,
            "freeCashFlow",
        )?;
        let total_revenue = decimal(
            &income_report.total_revenue,
            Function::IncomeStatement,
            "totalRevenue",
        )?;
        let shares_outstanding = count(
            &overview.shares_outstanding,
            Function::Overview,
            "SharesOutstanding",
        )?;
        let total_liabilities = decimal(
            &balance_report.total_liabilities,
            Function::BalanceSheet,
            "totalLiabilities",
        )?;
        let cash_and_equivalents = decimal(
            &balance_report.cash_and_cash_equivalents,
            Function::BalanceSheet,
            "cashAndCashEquivalents",
        )?;

        Ok(Self {
            fiscal_date_ending: cash_flow_report.fiscal_date_ending.clone(),
            free_cash_flow,
            total_revenue,
            shares_outstanding,
            total_liabilities,
            cash_and_equivalents,
        })
    }
}

fn latest<T>(reports: &Option<Vec<T>>, document: Function) -> Result<&T, ParseError> {
    reports
        .as_deref()
        .and_then(|reports| reports.first())
        .ok_or(ParseError::MissingReports { document })
}

fn field<'v>(value: &'v Option<String>, document: Function, field: &'static str) -> Result<&'v str, ParseError> {
    value
        .as_deref()
        .map(str::trim)
        .ok_or(ParseError::MissingField { document, field })
}

fn decimal(value: &Option<String>, document: Function, name: &'static str) -> Result<f64, ParseError> {
    let raw = field(value, document, name)?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field: name,
            value: raw.to_owned(),
        })
}

fn count(value: &Option<String>, document: Function, name: &'static str) -> Result<u64, ParseError> {
    let raw = field(value, document, name)?;
    raw.parse::<u64>().map_err(|_| ParseError::InvalidNumber {
        field: name,
        value: raw.to_owned(),
    })
}
