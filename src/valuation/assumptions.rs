//! Projection assumptions
use serde::{Deserialize, Serialize};

use crate::valuation::dcf::ValuationError;

/// Annual growth applied to free cash flow over the forecast horizon
pub const DEFAULT_GROWTH_RATE: f64 = 0.05;
/// Number of explicitly projected years
pub const DEFAULT_FORECAST_YEARS: u32 = 5;
/// Discount rate (WACC)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.09;
/// Perpetual growth rate after the horizon
pub const DEFAULT_TERMINAL_GROWTH_RATE: f64 = 0.025;

/// Fixed inputs of the DCF model. None of them is derived from company data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Annual free cash flow growth
    pub growth_rate: f64,
    /// Forecast horizon in years
    pub forecast_years: u32,
    /// Discount rate
    pub discount_rate: f64,
    /// Terminal growth rate
    pub terminal_growth_rate: f64,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            growth_rate: DEFAULT_GROWTH_RATE,
            forecast_years: DEFAULT_FORECAST_YEARS,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            terminal_growth_rate: DEFAULT_TERMINAL_GROWTH_RATE,
        }
    }
}

impl ProjectionAssumptions {
    /// Check that the terminal value formula is defined for these assumptions.
    ///
    /// # Errors
    ///
    /// - [`ValuationError::NonFiniteAssumption`] if any rate is NaN or infinite
    /// - [`ValuationError::EmptyHorizon`] if `forecast_years` is zero
    /// - [`ValuationError::DiscountNotAboveTerminalGrowth`] if the discount rate does not exceed
    ///   the terminal growth rate
    pub fn validate(&self) -> Result<(), ValuationError> {
        for (name, value) in [
            ("growth_rate", self.growth_rate),
            ("discount_rate", self.discount_rate),
            ("terminal_growth_rate", self.terminal_growth_rate),
        ] {
            if !value.is_finite() {
                return Err(ValuationError::NonFiniteAssumption { name, value });
            }
        }
        if self.forecast_years == 0 {
            return Err(ValuationError::EmptyHorizon);
        }
        if self.discount_rate <= self.terminal_growth_rate {
            return Err(ValuationError::DiscountNotAboveTerminalGrowth {
                discount_rate: self.discount_rate,
                terminal_growth_rate: self.terminal_growth_rate,
            });
        }
        Ok(())
    }
}
