//! Flight timestamps.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Duration, NaiveDateTime};

/// Format of dataset timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A local departure or arrival time as written in the dataset.
///
/// Keeps the parsed instant for comparisons and arithmetic, and the text it
/// was parsed from for output. Ordering and equality use the instant only,
/// so `2021-09-02T8:20:00` and `2021-09-02T08:20:00` compare equal.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Timestamp;
///
/// let arrival = Timestamp::parse("2021-09-02T8:20:00").unwrap();
/// assert_eq!(arrival.as_str(), "2021-09-02T8:20:00");
/// assert_eq!(arrival, Timestamp::parse("2021-09-02T08:20:00").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Timestamp {
    at: NaiveDateTime,
    text: String,
}

impl Timestamp {
    /// Parse a timestamp such as `2021-09-02T05:50:00`.
    ///
    /// Single-digit hours (`2021-09-02T8:20:00`) are accepted.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        let at = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
        Ok(Self {
            at,
            text: s.to_string(),
        })
    }

    /// Returns the text this timestamp was parsed from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the time elapsed from `earlier` to `self`.
    pub fn since(&self, earlier: &Timestamp) -> Duration {
        self.at.signed_duration_since(earlier.at)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
