//! Discounted cash flow valuation from Alpha Vantage fundamentals
//!
//! # Quick Start
//!
//! ```no_run
//! use dcfval::AlphaVantage;
//! use dcfval::analysis;
//! use dcfval::report::Report;
//! use dcfval::valuation::ProjectionAssumptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantage::default().with_key("your_api_key");
//!     let analysis = analysis::valuate(&client, "IBM", ProjectionAssumptions::default()).await?;
//!     println!("{}", Report::new(&analysis));
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! Each endpoint returns a [`Query`](request::Query) builder. Call `.get()` to execute:
//!
//! ```no_run
//! use dcfval::AlphaVantage;
//! use dcfval::request::Function;
//! use dcfval::rest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AlphaVantage::default().with_key("your_api_key");
//!
//! // Decoded document
//! let cash_flow = rest::fundamentals::cash_flow(&client, "IBM").get().await?;
//!
//! // Raw JSON response
//! let json = rest::query(&client, Function::Overview, "IBM").get().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client.
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest).
//!
//! - **`dotenvy`** - Adds `AlphaVantage::from_env()`, which loads `ALPHA_VANTAGE_API_KEY`
//!   from `.env` or the environment.
//!
//! - **`cli`** (default) - Builds the `dcfval` binary.

#![warn(missing_docs)]

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod execute;
pub mod processor;
pub mod report;
pub mod request;
pub mod response;
pub mod rest;
pub mod valuation;

pub use analysis::{Analysis, valuate};
pub use config::Config;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

/// The Alpha Vantage API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type AlphaVantage = client::AlphaVantage<reqwest::Client>;

/// The Alpha Vantage API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type AlphaVantage = client::AlphaVantage<request::HyperClient>;

#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::AlphaVantage;
