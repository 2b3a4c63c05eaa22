//! Airport code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code '{input}': {reason}")]
pub struct InvalidAirportCode {
    input: String,
    reason: &'static str,
}

impl InvalidAirportCode {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A valid 3-letter IATA airport code.
///
/// Codes are always 3 uppercase ASCII letters. Any `AirportCode` value is
/// valid by construction and cheap to copy, so it can key maps and sit in
/// the visited-stops list of every partial trip.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let btw = AirportCode::parse("BTW").unwrap();
/// assert_eq!(btw.as_str(), "BTW");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("btw").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("").is_err());
/// assert!(AirportCode::parse("BTWX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidAirportCode::new(s, "must be specified"));
        }

        if bytes.len() != 3 {
            return Err(InvalidAirportCode::new(s, "must be exactly 3 characters"));
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAirportCode::new(
                s,
                "must be uppercase ASCII letters A-Z",
            ));
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
