//! Query configuration for the itinerary planner.
//!
//! `QueryConfig` is what callers fill in (from the command line or code);
//! it is unchecked. `QueryConfig::validate` turns it into a `Query`, the
//! only form the planner accepts.

use std::fmt;

use chrono::Duration;

use crate::domain::{AirportCode, InvalidAirportCode};

/// Error from query validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Origin airport was empty
    #[error("origin airport must be specified")]
    MissingOrigin,

    /// Destination airport was empty
    #[error("destination airport must be specified")]
    MissingDestination,

    /// Origin or destination is not a valid airport code
    #[error("{field}: {source}")]
    InvalidAirport {
        field: &'static str,
        source: InvalidAirportCode,
    },

    /// Origin and destination are the same airport
    #[error("origin airport {0} must be different from destination airport")]
    SameOriginAndDestination(AirportCode),

    /// Bag count below zero
    #[error("number of bags must not be negative: {0}")]
    NegativeBags(i64),

    /// Bag count beyond what any flight could allow
    #[error("number of bags is out of range: {0}")]
    TooManyBags(i64),

    /// Stop limit below zero
    #[error("maximum number of stops must not be negative: {0}")]
    NegativeMaxStops(i64),

    /// Price limit below zero (or not a number)
    #[error("maximum price must not be negative: {0}")]
    InvalidMaxPrice(f64),

    /// Minimum layover below zero
    #[error("minimum layover must not be negative: {0}h")]
    NegativeMinLayover(i64),

    /// Maximum layover below zero
    #[error("maximum layover must not be negative: {0}h")]
    NegativeMaxLayover(i64),

    /// Minimum layover above maximum layover
    #[error("minimum layover ({min}h) must not exceed maximum layover ({max}h)")]
    InvertedLayover { min: i64, max: i64 },

    /// Layover too large to represent
    #[error("layover of {0}h is out of range")]
    LayoverOutOfRange(i64),
}

/// Unvalidated query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    /// Origin airport code.
    pub origin: String,

    /// Destination airport code.
    pub destination: String,

    /// Number of checked bags.
    pub bags: i64,

    /// Whether to search for a return trip as well.
    pub return_trip: bool,

    /// Minimum time between arriving and the next departure (hours).
    pub min_layover_hours: i64,

    /// Maximum time between arriving and the next departure (hours).
    pub max_layover_hours: i64,

    /// Maximum number of stops, 0 for no limit.
    pub max_stops: i64,

    /// Maximum total price, 0 for no limit.
    pub max_price: f64,
}

impl QueryConfig {
    /// Create a one-way query with default constraints.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Set the number of checked bags.
    pub fn with_bags(mut self, bags: i64) -> Self {
        self.bags = bags;
        self
    }

    /// Request a return trip.
    pub fn with_return_trip(mut self, return_trip: bool) -> Self {
        self.return_trip = return_trip;
        self
    }

    /// Set the allowed layover window in hours.
    pub fn with_layover_hours(mut self, min: i64, max: i64) -> Self {
        self.min_layover_hours = min;
        self.max_layover_hours = max;
        self
    }

    /// Set the maximum number of stops (0 for no limit).
    pub fn with_max_stops(mut self, max_stops: i64) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Set the maximum total price (0 for no limit).
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    /// Validate the parameters and build a query.
    ///
    /// Pure: nothing outside `self` is consulted.
    pub fn validate(&self) -> Result<Query, QueryError> {
        if self.origin.is_empty() {
            return Err(QueryError::MissingOrigin);
        }
        if self.destination.is_empty() {
            return Err(QueryError::MissingDestination);
        }

        let origin = AirportCode::parse(&self.origin).map_err(|source| {
            QueryError::InvalidAirport {
                field: "origin",
                source,
            }
        })?;
        let destination = AirportCode::parse(&self.destination).map_err(|source| {
            QueryError::InvalidAirport {
                field: "destination",
                source,
            }
        })?;

        if origin == destination {
            return Err(QueryError::SameOriginAndDestination(origin));
        }

        let bags = u32::try_from(self.bags).map_err(|_| {
            if self.bags < 0 {
                QueryError::NegativeBags(self.bags)
            } else {
                QueryError::TooManyBags(self.bags)
            }
        })?;
        let max_stops = usize::try_from(self.max_stops)
            .map_err(|_| QueryError::NegativeMaxStops(self.max_stops))?;

        if self.max_price.is_nan() || self.max_price < 0.0 {
            return Err(QueryError::InvalidMaxPrice(self.max_price));
        }

        if self.min_layover_hours < 0 {
            return Err(QueryError::NegativeMinLayover(self.min_layover_hours));
        }
        if self.max_layover_hours < 0 {
            return Err(QueryError::NegativeMaxLayover(self.max_layover_hours));
        }
        if self.min_layover_hours > self.max_layover_hours {
            return Err(QueryError::InvertedLayover {
                min: self.min_layover_hours,
                max: self.max_layover_hours,
            });
        }

        let layover = |hours: i64| {
            Duration::try_hours(hours).ok_or(QueryError::LayoverOutOfRange(hours))
        };

        Ok(Query {
            origin,
            destination,
            bags,
            return_trip: self.return_trip,
            min_layover: layover(self.min_layover_hours)?,
            max_layover: layover(self.max_layover_hours)?,
            max_stops: (max_stops > 0).then_some(max_stops),
            max_price: (self.max_price > 0.0).then_some(self.max_price),
        })
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            bags: 0,
            return_trip: false,
            min_layover_hours: 1,
            max_layover_hours: 6,
            max_stops: 0,
            max_price: 0.0,
        }
    }
}

/// A validated itinerary query.
///
/// Obtained from `QueryConfig::validate`. Unbounded limits are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    origin: AirportCode,
    destination: AirportCode,
    bags: u32,
    return_trip: bool,
    min_layover: Duration,
    max_layover: Duration,
    max_stops: Option<usize>,
    max_price: Option<f64>,
}

impl Query {
    /// Returns the origin airport.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the number of checked bags.
    pub fn bags(&self) -> u32 {
        self.bags
    }

    /// Returns true if a return trip was requested.
    pub fn is_return_trip(&self) -> bool {
        self.return_trip
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        self.min_layover
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        self.max_layover
    }

    /// Returns the stop limit, if any.
    pub fn max_stops(&self) -> Option<usize> {
        self.max_stops
    }

    /// Returns the price limit, if any.
    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}, {} bag(s), {}, layover {}-{}h, max stops: ",
            self.origin,
            self.destination,
            self.bags,
            if self.return_trip { "return" } else { "one-way" },
            self.min_layover.num_hours(),
            self.max_layover.num_hours(),
        )?;
        match self.max_stops {
            Some(n) => write!(f, "{n}")?,
            None => f.write_str("unbounded")?,
        }
        f.write_str(", max price: ")?;
        match self.max_price {
            Some(p) => write!(f, "{p}"),
            None => f.write_str("unbounded"),
        }
    }
}
