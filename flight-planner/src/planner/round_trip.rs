//! Round-trip combination.

use crate::domain::Trip;

/// Pair every outbound trip with every return trip.
///
/// Output is outbound-major: all pairings of the first outbound trip, then
/// the second, and so on. No layover constraint applies between the two
/// legs. An empty `back` yields no trips.
pub fn combine_round_trips(outbound: &[Trip], back: &[Trip]) -> Vec<Trip> {
    outbound
        .iter()
        .flat_map(|there| back.iter().map(move |return_leg| there.combined_with(return_leg)))
        .collect()
}
