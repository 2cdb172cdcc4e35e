//! Domain error types.
//!
//! Each value type owns its own `Invalid*` error; this enum collects them
//! for callers that validate several inputs in one go.

use super::{InvalidAnalyticCode, InvalidDistance, InvalidStationId};

/// Validation failure for any domain value type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    StationId(#[from] InvalidStationId),

    #[error(transparent)]
    Distance(#[from] InvalidDistance),

    #[error(transparent)]
    AnalyticCode(#[from] InvalidAnalyticCode),
}
