//! End-to-end search: query, dataset, planner.

use std::path::Path;

use tracing::{info, warn};

use crate::dataset::load_flights;
use crate::domain::FlightRecord;
use crate::error::Error;
use crate::planner::{FlightIndex, Planner, Query, QueryConfig, SearchResult};

/// Validate the query, load the dataset at `path` and search it.
///
/// The query is checked before the dataset is touched, so bad parameters
/// are reported even when the path is wrong too.
pub fn search_dataset(path: impl AsRef<Path>, config: &QueryConfig) -> Result<SearchResult, Error> {
    let query = config.validate()?;
    let records = load_flights(path)?;
    search_validated(records, &query)
}

/// Same as [`search_dataset`], for flights already in memory.
pub fn search_records(
    records: impl IntoIterator<Item = FlightRecord>,
    config: &QueryConfig,
) -> Result<SearchResult, Error> {
    let query = config.validate()?;
    search_validated(records, &query)
}

fn search_validated(
    records: impl IntoIterator<Item = FlightRecord>,
    query: &Query,
) -> Result<SearchResult, Error> {
    let index = FlightIndex::from_records(records);
    if index.is_empty() {
        warn!("Flight dataset has no flights");
    }
    info!(
        airports = index.airport_count(),
        flights = index.flight_count(),
        "Built flight index"
    );

    let result = Planner::new(&index).search(query)?;
    info!(
        trips = result.len(),
        routes_explored = result.routes_explored,
        "Search complete"
    );

    Ok(result)
}
