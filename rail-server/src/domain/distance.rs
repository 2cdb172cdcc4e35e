//! Distance type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};

/// Two distances closer than this are considered equal.
const TOLERANCE_KM: f64 = 1e-4;

/// Error returned when constructing an invalid distance.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid distance {kilometers}: {reason}")]
pub struct InvalidDistance {
    kilometers: f64,
    reason: &'static str,
}

/// A non-negative distance in kilometres.
///
/// Equality is approximate: distances within 0.0001 km of each other compare
/// equal, which absorbs the drift that accumulates when summing segment
/// lengths. Ordering treats such near-equal values as `Equal` as well.
///
/// # Examples
///
/// ```
/// use rail_server::domain::Distance;
///
/// let a = Distance::from_kilometers(0.65).unwrap();
/// let b = Distance::from_kilometers(0.35).unwrap();
/// assert_eq!(a + b, Distance::from_kilometers(1.0).unwrap());
///
/// assert!(Distance::from_kilometers(-1.0).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Distance(f64);

impl Distance {
    /// Create a distance from a number of kilometres.
    ///
    /// Negative and non-finite values are rejected.
    pub fn from_kilometers(kilometers: f64) -> Result<Self, InvalidDistance> {
        if !kilometers.is_finite() {
            return Err(InvalidDistance {
                kilometers,
                reason: "must be finite",
            });
        }
        if kilometers < 0.0 {
            return Err(InvalidDistance {
                kilometers,
                reason: "must not be negative",
            });
        }
        Ok(Distance(kilometers))
    }

    /// The zero distance.
    pub const fn zero() -> Self {
        Distance(0.0)
    }

    /// Returns the distance in kilometres.
    pub fn kilometers(&self) -> f64 {
        self.0
    }

    /// Approximate equality within 0.0001 km.
    pub fn approx_eq(&self, other: &Distance) -> bool {
        (self.0 - other.0).abs() < TOLERANCE_KM
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::zero(), |acc, d| acc + d)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.approx_eq(other) {
            Some(Ordering::Equal)
        } else {
            self.0.partial_cmp(&other.0)
        }
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({} km)", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn km(v: f64) -> Distance {
        Distance::from_kilometers(v).unwrap()
    }

    #[test]
    fn accepts_non_negative() {
        assert!(Distance::from_kilometers(0.0).is_ok());
        assert!(Distance::from_kilometers(12.5).is_ok());
    }

    #[test]
    fn rejects_negative() {
        let err = Distance::from_kilometers(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid distance -1: must not be negative");
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Distance::from_kilometers(f64::NAN).is_err());
        assert!(Distance::from_kilometers(f64::INFINITY).is_err());
    }

    #[test]
    fn addition() {
        assert_eq!((km(1.5) + km(2.25)).kilometers(), 3.75);
    }

    #[test]
    fn sum_of_segments() {
        let total: Distance = [km(0.65), km(0.35)].into_iter().sum();
        assert_eq!(total, km(1.0));
    }

    #[test]
    fn equality_within_tolerance() {
        assert_eq!(km(10.0), km(10.00005));
        assert_ne!(km(10.0), km(10.001));
    }

    #[test]
    fn ordering() {
        assert!(km(3.0) < km(10.0));
        assert!(km(10.0) > km(3.0));
        assert!(!(km(10.0) < km(10.00005)));
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(Distance::zero().kilometers(), 0.0);
    }

    #[test]
    fn display() {
        assert_eq!(km(1.0).to_string(), "1.00 km");
        assert_eq!(km(0.656).to_string(), "0.66 km");
    }
}
