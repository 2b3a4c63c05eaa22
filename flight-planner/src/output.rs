//! JSON output for search results.
//!
//! Field order of the DTOs below is part of the output format: trips and
//! flights serialize with their keys in declaration order.

use serde::Serialize;

use crate::domain::{FlightRecord, Trip};

/// A flight within a trip.
#[derive(Debug, Serialize)]
pub struct FlightDto {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    /// Departure time as written in the dataset
    pub departure: String,
    /// Arrival time as written in the dataset
    pub arrival: String,
    pub base_price: f64,
    pub bag_price: f64,
    pub bags_allowed: u32,
}

impl From<&FlightRecord> for FlightDto {
    fn from(flight: &FlightRecord) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            departure: flight.departure.to_string(),
            arrival: flight.arrival.to_string(),
            base_price: flight.base_price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
        }
    }
}

/// A trip in search results.
#[derive(Debug, Serialize)]
pub struct TripDto {
    /// Flights in travel order
    pub flights: Vec<FlightDto>,

    /// Smallest bag allowance over all flights
    pub bags_allowed: u32,

    /// Bags requested by the traveller
    pub bags_count: u32,

    pub destination: String,

    pub origin: String,

    /// Price of all flights including bags
    pub total_price: f64,

    /// Rendered travel time, e.g. "6:55:00" or "1 day, 19:50:00"
    pub travel_time: String,
}

impl From<&Trip> for TripDto {
    fn from(trip: &Trip) -> Self {
        Self {
            flights: trip.flights().iter().map(|f| FlightDto::from(f.as_ref())).collect(),
            bags_allowed: trip.bags_allowed(),
            bags_count: trip.bags_count(),
            destination: trip.destination().to_string(),
            origin: trip.origin().to_string(),
            total_price: trip.total_price(),
            travel_time: trip
                .travel_time()
                .map(|t| t.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Render trips as a pretty-printed JSON array with 4-space indentation.
pub fn to_json(trips: &[Trip]) -> Result<String, serde_json::Error> {
    let dtos: Vec<TripDto> = trips.iter().map(TripDto::from).collect();

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    dtos.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
