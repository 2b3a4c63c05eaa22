//! Itinerary planner using BFS search.
//!
//! This module implements the core search that answers:
//! "Which combinations of flights take me from A to B, and what do they cost?"
//!
//! The algorithm enumerates every admissible simple path breadth-first,
//! optionally pairs results into round trips, and ranks them by price.

mod admissibility;
mod config;
mod flight_index;
mod rank;
mod round_trip;
mod search;

pub use admissibility::is_admissible;
pub use config::{Query, QueryConfig, QueryError};
pub use flight_index::FlightIndex;
pub use rank::rank_trips;
pub use round_trip::combine_round_trips;
pub use search::{Planner, SearchError, SearchResult};
