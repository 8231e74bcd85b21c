//! Discounted cash flow valuation
//!
//! The flow is: build a [`FinancialSnapshot`] from the four fundamental
//! documents, run [`calculate_dcf`] with a set of [`ProjectionAssumptions`],
//! then compare the per-share result with the market price through
//! [`Verdict::classify`].

pub mod assumptions;
pub mod dcf;
pub mod quote;
pub mod snapshot;
pub mod verdict;

pub use assumptions::ProjectionAssumptions;
pub use dcf::{ValuationError, ValuationResult, calculate_dcf};
pub use quote::{QuoteError, current_price};
pub use snapshot::{FinancialSnapshot, ParseError};
pub use verdict::Verdict;
