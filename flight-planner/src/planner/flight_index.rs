//! Departures index over a flight dataset.
//!
//! The planner only ever asks one question of the dataset: "which flights
//! leave from airport X?". The index answers it with a single map lookup,
//! keeping flights in dataset order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{AirportCode, FlightRecord};

/// Adjacency index of flights keyed by departure airport.
///
/// Built once, then only read. Searches borrow it, so several searches can
/// run against the same index.
#[derive(Debug, Default)]
pub struct FlightIndex {
    /// Map from airport -> flights departing from it, in dataset order.
    departures: HashMap<AirportCode, Vec<Arc<FlightRecord>>>,

    /// Airports that appear as the destination of some flight.
    destinations: HashSet<AirportCode>,

    /// Total number of flights indexed.
    flight_count: usize,
}

impl FlightIndex {
    /// Build the index from a flat collection of flights.
    pub fn from_records(records: impl IntoIterator<Item = FlightRecord>) -> Self {
        let mut index = Self::default();

        for record in records {
            index.destinations.insert(record.destination);
            index
                .departures
                .entry(record.origin)
                .or_default()
                .push(Arc::new(record));
            index.flight_count += 1;
        }

        index
    }

    /// Get flights departing from an airport.
    pub fn departures_from(&self, airport: &AirportCode) -> &[Arc<FlightRecord>] {
        self.departures
            .get(airport)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if some flight departs from this airport.
    pub fn is_origin(&self, airport: &AirportCode) -> bool {
        self.departures.contains_key(airport)
    }

    /// Check if some flight arrives at this airport.
    pub fn is_destination(&self, airport: &AirportCode) -> bool {
        self.destinations.contains(airport)
    }

    /// Get the number of distinct airports seen as origin or destination.
    pub fn airport_count(&self) -> usize {
        self.departures
            .keys()
            .chain(self.destinations.iter())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Get the total number of flights.
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// Returns true if no flights were indexed.
    pub fn is_empty(&self) -> bool {
        self.flight_count == 0
    }
}
