//! The DCF model
use serde::Serialize;
use thiserror::Error;

use crate::valuation::assumptions::ProjectionAssumptions;
use crate::valuation::snapshot::FinancialSnapshot;

/// The model is undefined for the given inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// Terminal value needs a discount rate strictly above the terminal growth rate
    #[error(
        "discount rate ({discount_rate}) must be greater than terminal growth rate ({terminal_growth_rate})"
    )]
    DiscountNotAboveTerminalGrowth {
        /// Discount rate
        discount_rate: f64,
        /// Terminal growth rate
        terminal_growth_rate: f64,
    },

    /// Per-share value is undefined without shares
    #[error("shares outstanding is zero")]
    ZeroShares,

    /// At least one projected year is required
    #[error("forecast horizon must be at least one year")]
    EmptyHorizon,

    /// A rate was NaN or infinite
    #[error("assumption {name} is not finite: {value}")]
    NonFiniteAssumption {
        /// Assumption name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// Output of [`calculate_dcf`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Latest free cash flow over latest revenue. Reported only; the projection does not use it.
    pub fcf_margin: Option<f64>,
    /// Projected free cash flow, year 1 first
    pub projected_fcf: Vec<f64>,
    /// Present value of the projected cash flows
    pub pv_fcf: f64,
    /// Terminal value at the end of the horizon
    pub terminal_value: f64,
    /// Present value of the terminal value
    pub pv_terminal_value: f64,
    /// Enterprise value
    pub enterprise_value: f64,
    /// Equity value
    pub equity_value: f64,
    /// Intrinsic value per share
    pub intrinsic_value_per_share: f64,
}

/// Value a company from its latest annual figures.
///
/// Free cash flow grows at `growth_rate` for `forecast_years`, each year is
/// discounted at `discount_rate`, and a Gordon growth terminal value is added
/// at the horizon. Equity value subtracts total liabilities as a stand-in for
/// debt and adds cash.
///
/// # Errors
///
/// Fails with a [`ValuationError`] before any division that would be undefined.
pub fn calculate_dcf(
    snapshot: &FinancialSnapshot,
    assumptions: &ProjectionAssumptions,
) -> Result<ValuationResult, ValuationError> {
    assumptions.validate()?;
    if snapshot.shares_outstanding == 0 {
        return Err(ValuationError::ZeroShares);
    }

    let fcf_margin =
        (snapshot.total_revenue != 0.0).then(|| snapshot.free_cash_flow / snapshot.total_revenue);

    let growth = 1.0 + assumptions.growth_rate;
    let discount = 1.0 + assumptions.discount_rate;

    let mut projected_fcf = Vec::with_capacity(assumptions.forecast_years as usize);
    let mut fcf = snapshot.free_cash_flow;
    let mut discount_factor = 1.0;
    let mut pv_fcf = 0.0;
    for _ in 0..assumptions.forecast_years {
        fcf *= growth;
        discount_factor *= discount;
        pv_fcf += fcf / discount_factor;
        projected_fcf.push(fcf);
    }

    // `fcf` and `discount_factor` now hold the final horizon year.
    let terminal_value = fcf * (1.0 + assumptions.terminal_growth_rate)
        / (assumptions.discount_rate - assumptions.terminal_growth_rate);
    let pv_terminal_value = terminal_value / discount_factor;

    let enterprise_value = pv_fcf + pv_terminal_value;
    let equity_value = enterprise_value + snapshot.cash_and_equivalents - snapshot.total_liabilities;
    let intrinsic_value_per_share = equity_value / snapshot.shares_outstanding as f64;

    Ok(ValuationResult {
        fcf_margin,
        projected_fcf,
        pv_fcf,
        terminal_value,
        pv_terminal_value,
        enterprise_value,
        equity_value,
        intrinsic_value_per_share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn snapshot() -> FinancialSnapshot {
        FinancialSnapshot {
            fiscal_date_ending: None,
            free_cash_flow: 100.0,
            total_revenue: 1000.0,
            shares_outstanding: 100,
            total_liabilities: 30.0,
            cash_and_equivalents: 50.0,
        }
    }

    #[test]
    fn projects_five_years_at_constant_growth() {
        let result = calculate_dcf(&snapshot(), &ProjectionAssumptions::default()).unwrap();
        let expected = [105.0, 110.25, 115.7625, 121.550625, 127.62815625];
        assert_eq!(result.projected_fcf.len(), expected.len());
        for (actual, expected) in result.projected_fcf.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn values_reference_company() {
        let result = calculate_dcf(&snapshot(), &ProjectionAssumptions::default()).unwrap();
        assert_relative_eq!(result.pv_fcf, 447.574456, max_relative = 1e-6);
        assert_relative_eq!(result.terminal_value, 2012.597849, max_relative = 1e-6);
        assert_relative_eq!(result.pv_terminal_value, 1308.050510, max_relative = 1e-6);
        assert_relative_eq!(result.enterprise_value, 1755.624966, max_relative = 1e-6);
        assert_relative_eq!(result.equity_value, 1775.624966, max_relative = 1e-6);
        assert_relative_eq!(result.intrinsic_value_per_share, 17.756250, max_relative = 1e-6);
    }

    #[test]
    fn margin_is_reported_but_not_applied() {
        let base = calculate_dcf(&snapshot(), &ProjectionAssumptions::default()).unwrap();
        let mut doubled_revenue = snapshot();
        doubled_revenue.total_revenue = 2000.0;
        let other = calculate_dcf(&doubled_revenue, &ProjectionAssumptions::default()).unwrap();

        assert_eq!(base.fcf_margin, Some(0.1));
        assert_eq!(other.fcf_margin, Some(0.05));
        assert_eq!(base.intrinsic_value_per_share, other.intrinsic_value_per_share);
    }

    #[test]
    fn zero_revenue_has_no_margin() {
        let mut no_revenue = snapshot();
        no_revenue.total_revenue = 0.0;
        let result = calculate_dcf(&no_revenue, &ProjectionAssumptions::default()).unwrap();
        assert_eq!(result.fcf_margin, None);
    }

    #[test]
    fn is_deterministic() {
        let assumptions = ProjectionAssumptions::default();
        let first = calculate_dcf(&snapshot(), &assumptions).unwrap();
        let second = calculate_dcf(&snapshot(), &assumptions).unwrap();
        assert_eq!(
            first.intrinsic_value_per_share.to_bits(),
            second.intrinsic_value_per_share.to_bits()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn discount_equal_to_terminal_growth_fails() {
        let assumptions = ProjectionAssumptions {
            discount_rate: 0.025,
            terminal_growth_rate: 0.025,
            ..Default::default()
        };
        let err = calculate_dcf(&snapshot(), &assumptions).unwrap_err();
        assert_eq!(
            err,
            ValuationError::DiscountNotAboveTerminalGrowth {
                discount_rate: 0.025,
                terminal_growth_rate: 0.025
            }
        );
    }

    #[test]
    fn zero_shares_fails() {
        let mut no_shares = snapshot();
        no_shares.shares_outstanding = 0;
        let err = calculate_dcf(&no_shares, &ProjectionAssumptions::default()).unwrap_err();
        assert_eq!(err, ValuationError::ZeroShares);
    }

    #[test]
    fn longer_horizon_projects_more_years() {
        let assumptions = ProjectionAssumptions {
            forecast_years: 10,
            ..Default::default()
        };
        let result = calculate_dcf(&snapshot(), &assumptions).unwrap();
        assert_eq!(result.projected_fcf.len(), 10);
        assert_relative_eq!(result.projected_fcf[9], 100.0 * 1.05_f64.powi(10), max_relative = 1e-12);
    }
}
