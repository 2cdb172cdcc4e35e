//! Analytic code type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Maximum length of an analytic code, in characters.
const MAX_LEN: usize = 50;

/// Error returned when parsing an invalid analytic code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid analytic code: {reason}")]
pub struct InvalidAnalyticCode {
    reason: &'static str,
}

/// A free-form tag that categorises a trip (passenger, freight, maintenance...).
///
/// Codes are trimmed and must be between 1 and 50 characters long.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnalyticCode(String);

impl AnalyticCode {
    /// Parse an analytic code, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidAnalyticCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidAnalyticCode {
                reason: "must not be empty",
            });
        }

        if trimmed.chars().count() > MAX_LEN {
            return Err(InvalidAnalyticCode {
                reason: "must be at most 50 characters",
            });
        }

        Ok(AnalyticCode(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AnalyticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnalyticCode({})", self.0)
    }
}

impl fmt::Display for AnalyticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AnalyticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
