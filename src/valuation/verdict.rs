//! Intrinsic value against market price
use std::fmt;

use serde::Serialize;

/// How the market price compares with the intrinsic value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Intrinsic value above price
    Undervalued,
    /// Intrinsic value below price
    Overvalued,
    /// Exactly equal. Practically unreachable with floating point inputs.
    FairlyValued,
}

impl Verdict {
    /// Compare intrinsic value per share with the current price
    pub fn classify(intrinsic_value: f64, price: f64) -> Self {
        if intrinsic_value > price {
            Verdict::Undervalued
        } else if intrinsic_value < price {
            Verdict::Overvalued
        } else {
            Verdict::FairlyValued
        }
    }

    /// Human readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Verdict::Undervalued => "undervalued",
            Verdict::Overvalued => "overvalued",
            Verdict::FairlyValued => "fairly valued",
        }
    }

    /// Coloured square printed after the conclusion
    pub const fn marker(&self) -> &'static str {
        match self {
            Verdict::Undervalued => "🟩",
            Verdict::Overvalued => "🟥",
            Verdict::FairlyValued => "🟨",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_comparison() {
        assert_eq!(Verdict::classify(18.0, 15.0), Verdict::Undervalued);
        assert_eq!(Verdict::classify(12.0, 15.0), Verdict::Overvalued);
        assert_eq!(Verdict::classify(15.0, 15.0), Verdict::FairlyValued);
    }

    #[test]
    fn labels() {
        assert_eq!(Verdict::Undervalued.to_string(), "undervalued");
        assert_eq!(Verdict::Overvalued.to_string(), "overvalued");
        assert_eq!(Verdict::FairlyValued.to_string(), "fairly valued");
    }
}
