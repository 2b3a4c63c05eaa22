//! BFS itinerary search algorithm.
//!
//! Enumerates every admissible simple path of flights from the query origin
//! to the destination, exploring partial trips breadth-first.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::domain::{AirportCode, Trip};

use super::admissibility::is_admissible;
use super::config::Query;
use super::flight_index::FlightIndex;
use super::rank::rank_trips;
use super::round_trip::combine_round_trips;

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No flight departs from the requested origin
    #[error("origin airport '{0}' is invalid (unknown)")]
    UnknownOrigin(AirportCode),

    /// No flight arrives at the requested destination
    #[error("destination airport '{0}' is invalid (unknown)")]
    UnknownDestination(AirportCode),
}

/// Result of itinerary search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Found trips, cheapest first.
    pub trips: Vec<Trip>,

    /// Number of partial trips taken off the queue.
    pub routes_explored: usize,
}

impl SearchResult {
    /// Returns the number of trips found.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns true if no trip was found.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Itinerary planner over a flight index.
pub struct Planner<'a> {
    index: &'a FlightIndex,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(index: &'a FlightIndex) -> Self {
        Self { index }
    }

    /// Check that the query's airports exist in the dataset.
    ///
    /// The origin must be the departure airport of some flight and the
    /// destination the arrival airport of some flight.
    pub fn check_locations(&self, query: &Query) -> Result<(), SearchError> {
        if !self.index.is_origin(query.origin()) {
            return Err(SearchError::UnknownOrigin(*query.origin()));
        }
        if !self.index.is_destination(query.destination()) {
            return Err(SearchError::UnknownDestination(*query.destination()));
        }
        Ok(())
    }

    /// Search for trips matching the query, cheapest first.
    ///
    /// For return queries the outbound results are combined with a second
    /// search pass; no trips come back if that pass finds nothing.
    pub fn search(&self, query: &Query) -> Result<SearchResult, SearchError> {
        self.check_locations(query)?;

        info!(%query, "Searching itineraries");

        let outbound = self.find_one_way(query);
        let mut routes_explored = outbound.routes_explored;
        let mut trips = outbound.trips;

        if query.is_return_trip() && !trips.is_empty() {
            // The return pass runs the same query again, origin and
            // destination are not swapped.
            let back = self.find_one_way(query);
            routes_explored += back.routes_explored;

            let outbound_count = trips.len();
            trips = combine_round_trips(&trips, &back.trips);

            debug!(
                outbound = outbound_count,
                back = back.trips.len(),
                combined = trips.len(),
                "Round trips combined"
            );
        }

        Ok(SearchResult {
            trips: rank_trips(trips),
            routes_explored,
        })
    }

    /// Enumerate all one-way trips from origin to destination.
    ///
    /// Trips come back in discovery order, unranked. A trip that reaches
    /// the destination is still expanded further; it can never come back
    /// to the destination, so every result is distinct.
    pub fn find_one_way(&self, query: &Query) -> SearchResult {
        let mut trips = Vec::new();
        let mut routes_explored = 0;

        let mut queue: VecDeque<Trip> = VecDeque::new();
        queue.push_back(Trip::new(*query.origin(), *query.destination(), query.bags()));

        while let Some(trip) = queue.pop_front() {
            routes_explored += 1;

            let airport = trip.current_stop();
            trace!(
                airport = %airport,
                flights = trip.flight_count(),
                queued = queue.len(),
                "BFS exploring airport"
            );

            for flight in self.index.departures_from(&airport) {
                if is_admissible(flight, &trip, query) {
                    queue.push_back(trip.extended_with(flight));
                }
            }

            if trip.is_at(query.destination()) {
                trips.push(trip.finalize());
            }
        }

        debug!(
            results = trips.len(),
            routes_explored, "One-way search complete"
        );

        SearchResult {
            trips,
            routes_explored,
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
