//! Alpha Vantage query functions used by the valuation
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The `function` parameter of an Alpha Vantage query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Function {
    /// Annual and quarterly income statements
    IncomeStatement,
    /// Annual and quarterly cash flow statements
    CashFlow,
    /// Annual and quarterly balance sheets
    BalanceSheet,
    /// Company overview and key metrics
    Overview,
    /// Latest price and volume
    GlobalQuote,
}

impl Function {
    /// Wire name of the function
    pub const fn as_str(&self) -> &'static str {
        match self {
            Function::IncomeStatement => "INCOME_STATEMENT",
            Function::CashFlow => "CASH_FLOW",
            Function::BalanceSheet => "BALANCE_SHEET",
            Function::Overview => "OVERVIEW",
            Function::GlobalQuote => "GLOBAL_QUOTE",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Function {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INCOME_STATEMENT" => Ok(Function::IncomeStatement),
            "CASH_FLOW" => Ok(Function::CashFlow),
            "BALANCE_SHEET" => Ok(Function::BalanceSheet),
            "OVERVIEW" => Ok(Function::Overview),
            "GLOBAL_QUOTE" => Ok(Function::GlobalQuote),
            _ => Err(crate::error::Error::Custom(format!("Invalid function: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for function in [
            Function::IncomeStatement,
            Function::CashFlow,
            Function::BalanceSheet,
            Function::Overview,
            Function::GlobalQuote,
        ] {
            let json = serde_json::to_string(&function).unwrap();
            assert_eq!(json, format!("\"{}\"", function.as_str()));
            assert_eq!(function.as_str().parse::<Function>().unwrap(), function);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("cash_flow".parse::<Function>().unwrap(), Function::CashFlow);
        assert!("TIME_SERIES_DAILY".parse::<Function>().is_err());
    }
}
