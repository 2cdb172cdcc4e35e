//! Aggregated distance totals.

use chrono::NaiveDate;

use crate::domain::{AnalyticCode, Distance};

use super::period::Period;

/// Total distance for one analytic code, optionally within one time bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceAggregate {
    pub analytic_code: AnalyticCode,
    pub total_distance: Distance,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub group: Option<String>,
}

impl DistanceAggregate {
    pub fn new(
        analytic_code: AnalyticCode,
        total_distance: Distance,
        period: &Period,
        group: Option<String>,
    ) -> Self {
        Self {
            analytic_code,
            total_distance,
            period_start: period.from(),
            period_end: period.to(),
            group,
        }
    }
}
