//! Trip record type.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{AnalyticCode, Distance};

/// One computed trip, kept for distance statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub id: Uuid,
    pub analytic_code: AnalyticCode,
    pub distance: Distance,
    pub created_at: DateTime<Utc>,
}

impl RouteRecord {
    pub fn new(
        id: Uuid,
        analytic_code: AnalyticCode,
        distance: Distance,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            analytic_code,
            distance,
            created_at,
        }
    }
}
