//! Domain types for the flight itinerary planner.
//!
//! This module contains the core domain model: airport codes, flight
//! records with their timestamps, and the trips built from them. Types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod airport;
mod flight;
mod timestamp;
mod travel_time;
mod trip;

pub use airport::{AirportCode, InvalidAirportCode};
pub use flight::FlightRecord;
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
pub use travel_time::TravelTime;
pub use trip::Trip;
