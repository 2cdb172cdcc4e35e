//! Station identifier type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Maximum length of a station code.
const MAX_LEN: usize = 10;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

impl InvalidStationId {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A station short code, such as `MX` or `CABY`.
///
/// Station ids are 1 to 10 ASCII letters or digits. Parsing trims
/// surrounding whitespace and upper-cases the input, so ids coming from
/// request bodies or data files compare equal regardless of case.
///
/// # Examples
///
/// ```
/// use rail_server::domain::StationId;
///
/// let mx = StationId::parse(" mx ").unwrap();
/// assert_eq!(mx.as_str(), "MX");
/// assert_eq!(mx, StationId::parse("MX").unwrap());
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("MONTREUX-01").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse and normalise a station id.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let normalized = s.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        if normalized.len() > MAX_LEN {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must be at most 10 characters",
            });
        }

        if !normalized
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must be alphanumeric",
            });
        }

        Ok(StationId(normalized))
    }

    /// Returns the normalised id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
