//! Travel time rendering.
//!
//! Trip durations are accumulated as whole seconds and rendered as
//! `H:MM:SS`, with a `<n> day(s), ` prefix once the duration spans at least
//! one full day.

use std::fmt;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Total travel time of a trip, in whole seconds.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::TravelTime;
///
/// assert_eq!(TravelTime::from_secs(6 * 3600 + 55 * 60).to_string(), "6:55:00");
/// assert_eq!(TravelTime::from_secs(24 * 3600 + 19 * 3600 + 50 * 60).to_string(), "1 day, 19:50:00");
/// assert_eq!(TravelTime::from_secs(2 * 24 * 3600 + 3 * 3600).to_string(), "2 days, 3:00:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelTime(i64);

impl TravelTime {
    /// Create a travel time from a number of seconds.
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Returns the number of seconds.
    pub fn as_secs(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Floor division keeps the clock part in 0..24h even for negative
        // durations, which only arise from malformed input.
        let days = self.0.div_euclid(SECS_PER_DAY);
        let rem = self.0.rem_euclid(SECS_PER_DAY);
        let (hours, minutes, seconds) = (rem / 3600, rem % 3600 / 60, rem % 60);

        if days != 0 {
            let unit = if days.abs() == 1 { "day" } else { "days" };
            write!(f, "{days} {unit}, ")?;
        }
        write!(f, "{hours}:{minutes:02}:{seconds:02}")
    }
}
