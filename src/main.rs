use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dcfval::report::{self, Report};
use dcfval::valuation::ProjectionAssumptions;
use dcfval::valuation::assumptions::{
    DEFAULT_DISCOUNT_RATE, DEFAULT_FORECAST_YEARS, DEFAULT_GROWTH_RATE, DEFAULT_TERMINAL_GROWTH_RATE,
};
use dcfval::client::{API_KEY_VAR, DEFAULT_BASE_URL};
use dcfval::config::SYMBOL_VAR;
use dcfval::{AlphaVantage, Config, Error};

/// Estimate intrinsic value per share with a discounted cash flow model
/// and compare it with the current market price.
#[derive(Debug, Parser)]
#[command(name = "dcfval", author, version, about)]
struct Cli {
    /// Stock symbol to value
    #[arg(long, short, env = SYMBOL_VAR)]
    symbol: Option<String>,

    /// Alpha Vantage API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Alpha Vantage query endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Annual free cash flow growth over the forecast horizon
    #[arg(long, default_value_t = DEFAULT_GROWTH_RATE)]
    growth_rate: f64,

    /// Number of projected years
    #[arg(long, default_value_t = DEFAULT_FORECAST_YEARS)]
    forecast_years: u32,

    /// Discount rate (WACC)
    #[arg(long, default_value_t = DEFAULT_DISCOUNT_RATE)]
    discount_rate: f64,

    /// Perpetual growth rate after the horizon
    #[arg(long, default_value_t = DEFAULT_TERMINAL_GROWTH_RATE)]
    terminal_growth_rate: f64,

    /// Print the projection and intermediate values
    #[arg(long, short)]
    detailed: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config, Error> {
        let assumptions = ProjectionAssumptions {
            growth_rate: self.growth_rate,
            forecast_years: self.forecast_years,
            discount_rate: self.discount_rate,
            terminal_growth_rate: self.terminal_growth_rate,
        };
        Ok(Config::new(self.api_key, self.symbol)?
            .with_assumptions(assumptions)
            .with_base_url(self.base_url))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "dcfval=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let detailed = cli.detailed;

    match run(cli, detailed).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: Cli, detailed: bool) -> Result<(), Error> {
    let config = cli.into_config()?;
    let client: AlphaVantage = config.client();

    println!("{}", report::progress(&config.symbol));
    let analysis = dcfval::valuate(&client, &config.symbol, config.assumptions).await?;
    println!("{}", Report::new(&analysis).detailed(detailed));
    Ok(())
}
