use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use flight_planner::Error;
use flight_planner::app::search_dataset;
use flight_planner::output::to_json;
use flight_planner::planner::QueryConfig;

/// Find flight itineraries between two airports, cheapest first.
#[derive(Parser, Debug)]
#[command(name = "flight-planner", version)]
struct Cli {
    /// CSV file of flights
    dataset: PathBuf,

    /// Origin airport code, e.g. BTW
    origin: String,

    /// Destination airport code, e.g. REJ
    destination: String,

    /// Number of bags to carry
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    bags: i64,

    /// Search for a return trip as well
    #[arg(long = "return")]
    return_trip: bool,

    /// Minimum layover between flights, in hours
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min_layover: i64,

    /// Maximum layover between flights, in hours
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    max_layover: i64,

    /// Maximum number of intermediate stops (0 = unbounded)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    max_stops: i64,

    /// Maximum total price (0 = unbounded)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    max_price: f64,
}

impl Cli {
    fn query_config(&self) -> QueryConfig {
        QueryConfig::new(&self.origin, &self.destination)
            .with_bags(self.bags)
            .with_return_trip(self.return_trip)
            .with_layover_hours(self.min_layover, self.max_layover)
            .with_max_stops(self.max_stops)
            .with_max_price(self.max_price)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    let json = search_dataset(&cli.dataset, &cli.query_config())
        .and_then(|result| to_json(&result.trips).map_err(Error::from));

    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Search failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
