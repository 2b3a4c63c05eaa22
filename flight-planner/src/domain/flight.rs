//! Scheduled flight records.

use chrono::Duration;

use super::{AirportCode, Timestamp};

/// A single scheduled flight.
///
/// Records are loaded once and never modified. The index and every trip
/// that uses a flight share it through an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    /// Flight identifier (e.g., "XC233")
    pub flight_no: String,
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Local departure time
    pub departure: Timestamp,
    /// Local arrival time
    pub arrival: Timestamp,
    /// Ticket price without bags
    pub base_price: f64,
    /// Price per checked bag
    pub bag_price: f64,
    /// Maximum number of bags allowed on this flight
    pub bags_allowed: u32,
}

impl FlightRecord {
    /// Returns the time spent in the air.
    ///
    /// Arrival is expected to be after departure; this is not checked, so
    /// malformed records yield a negative duration.
    pub fn duration(&self) -> Duration {
        self.arrival.since(&self.departure)
    }

    /// Returns the flight duration in whole seconds.
    pub fn duration_secs(&self) -> i64 {
        self.duration().num_seconds()
    }

    /// Returns the gap between arriving on `previous` and departing on this flight.
    pub fn layover_after(&self, previous: &FlightRecord) -> Duration {
        self.departure.since(&previous.arrival)
    }
}
