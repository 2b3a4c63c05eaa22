//! Admissibility of a flight as the next step of a trip.

use crate::domain::{FlightRecord, Trip};

use super::config::Query;

/// Decide whether `flight` may be appended to `trip` under `query`.
///
/// A flight is rejected if:
/// - it lands at an airport the trip already visited
/// - it carries fewer bags than the traveller checks in
/// - it does not depart strictly after the previous flight arrives
/// - the layover since the previous arrival is outside the query window
/// - the trip would go over the price limit
/// - the trip already has more flights than the stop limit
///
/// Layover checks only apply once the trip has a flight.
pub fn is_admissible(flight: &FlightRecord, trip: &Trip, query: &Query) -> bool {
    if trip.has_visited(&flight.destination) {
        return false;
    }

    if query.bags() > flight.bags_allowed {
        return false;
    }

    if let Some(previous) = trip.last_flight() {
        if flight.departure <= previous.arrival {
            return false;
        }

        let layover = flight.layover_after(previous);
        if layover < query.min_layover() || layover > query.max_layover() {
            return false;
        }
    }

    if let Some(max_price) = query.max_price() {
        let price =
            trip.total_price() + flight.base_price + f64::from(query.bags()) * flight.bag_price;
        if price > max_price {
            return false;
        }
    }

    if let Some(max_stops) = query.max_stops() {
        if trip.flight_count() > max_stops {
            return false;
        }
    }

    true
}
