//! Console rendering of an [`Analysis`]
use std::fmt;

use crate::analysis::Analysis;

/// Progress line printed before the run starts
pub fn progress(symbol: &str) -> String {
    format!("Calculating intrinsic value for {symbol}...")
}

/// Plain text report: intrinsic value, market price and conclusion.
///
/// With `detailed` set the model breakdown is printed first.
pub struct Report<'a> {
    analysis: &'a Analysis,
    detailed: bool,
}

impl<'a> Report<'a> {
    /// Summary report
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            analysis,
            detailed: false,
        }
    }

    /// Include the projection and intermediate values
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        if self.detailed {
            let v = &a.valuation;
            if let Some(name) = &a.name {
                writeln!(f, "Company: {name} ({})", a.symbol)?;
            }
            if let Some(date) = &a.snapshot.fiscal_date_ending {
                writeln!(f, "Fiscal year ending: {date}")?;
            }
            writeln!(f, "Latest free cash flow: ${:.2}", a.snapshot.free_cash_flow)?;
            if let Some(margin) = v.fcf_margin {
                writeln!(f, "FCF margin: {:.2}%", margin * 100.0)?;
            }
            for (year, fcf) in v.projected_fcf.iter().enumerate() {
                writeln!(f, "  Year {}: ${fcf:.2}", year + 1)?;
            }
            writeln!(f, "PV of projected FCF: ${:.2}", v.pv_fcf)?;
            writeln!(f, "Terminal value: ${:.2}", v.terminal_value)?;
            writeln!(f, "PV of terminal value: ${:.2}", v.pv_terminal_value)?;
            writeln!(f, "Enterprise value: ${:.2}", v.enterprise_value)?;
            writeln!(f, "Equity value: ${:.2}", v.equity_value)?;
        }
        writeln!(
            f,
            "Intrinsic Value per Share: ${:.2}",
            a.valuation.intrinsic_value_per_share
        )?;
        writeln!(f, "Current Market Price: ${:.2}", a.price)?;
        write!(
            f,
            "Conclusion: The stock appears to be **{}** {}",
            a.verdict,
            a.verdict.marker()
        )
    }
}
