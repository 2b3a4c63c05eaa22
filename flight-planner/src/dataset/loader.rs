//! CSV flight dataset reader.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::DatasetError;
use crate::domain::{AirportCode, FlightRecord, Timestamp};

/// A dataset row as it appears in the file.
#[derive(Debug, Deserialize)]
struct FlightRow {
    flight_no: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
}

impl FlightRow {
    fn into_record(self) -> Result<FlightRecord, String> {
        let origin = AirportCode::parse(&self.origin).map_err(|e| format!("origin: {e}"))?;
        let destination =
            AirportCode::parse(&self.destination).map_err(|e| format!("destination: {e}"))?;
        let departure = Timestamp::parse(&self.departure)
            .map_err(|e| format!("departure '{}': {e}", self.departure))?;
        let arrival = Timestamp::parse(&self.arrival)
            .map_err(|e| format!("arrival '{}': {e}", self.arrival))?;

        Ok(FlightRecord {
            flight_no: self.flight_no,
            origin,
            destination,
            departure,
            arrival,
            base_price: self.base_price,
            bag_price: self.bag_price,
            bags_allowed: self.bags_allowed,
        })
    }
}

/// Load flights from a CSV file.
///
/// The file needs a header row naming the columns `flight_no`, `origin`,
/// `destination`, `departure`, `arrival`, `base_price`, `bag_price` and
/// `bags_allowed`, in any order. Other columns are ignored.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<FlightRecord>, DatasetError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let flights = parse_flights(file)?;

    info!(
        path = %path.display(),
        flights = flights.len(),
        "Loaded flight dataset"
    );

    Ok(flights)
}

/// Read flights from CSV data.
///
/// Stops at the first row that cannot be read; the error names its line.
pub fn parse_flights<R: io::Read>(input: R) -> Result<Vec<FlightRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers = reader.headers()?.clone();

    let mut flights = Vec::new();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: FlightRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| DatasetError::InvalidRecord {
                    line,
                    reason: deserialize_reason(&e),
                })?;
        let flight = row
            .into_record()
            .map_err(|reason| DatasetError::InvalidRecord { line, reason })?;

        flights.push(flight);
    }

    debug!(flights = flights.len(), "Parsed flight rows");

    Ok(flights)
}

/// Strip csv's position prefix; the caller reports the line itself.
fn deserialize_reason(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}
