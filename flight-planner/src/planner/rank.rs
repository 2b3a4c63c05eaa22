//! Trip ranking for search results.

use crate::domain::Trip;

/// Rank trips by total price, cheapest first.
///
/// The sort is stable: trips with equal prices keep the order in which
/// the search found them.
pub fn rank_trips(mut trips: Vec<Trip>) -> Vec<Trip> {
    trips.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
    trips
}
