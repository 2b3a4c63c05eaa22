//! Flight itinerary planner.
//!
//! Answers: "Which combinations of flights take me from A to B with my
//! bags, and what do they cost?" Flights are read from a CSV dataset,
//! every admissible itinerary is enumerated and the results come back
//! cheapest first.

pub mod app;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod output;
pub mod planner;

pub use error::Error;
