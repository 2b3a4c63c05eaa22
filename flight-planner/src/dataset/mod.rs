//! Flight dataset loading.
//!
//! Reads a CSV file of scheduled flights into `FlightRecord`s. The loader
//! is the only part of the crate that touches the filesystem; the planner
//! works on records already in memory.

mod error;
mod loader;

pub use error::DatasetError;
pub use loader::{load_flights, parse_flights};
