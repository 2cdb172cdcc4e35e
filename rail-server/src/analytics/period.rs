//! Reporting periods and grouping.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Error returned for an invalid reporting period.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPeriod {
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    BadDate(String),

    #[error("Period start date cannot be after end date")]
    StartAfterEnd,
}

/// An optionally bounded range of calendar days, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Period {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl Period {
    /// Create a period. Fails if `from` is after `to`.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, InvalidPeriod> {
        if let (Some(from), Some(to)) = (from, to)
            && from > to
        {
            return Err(InvalidPeriod::StartAfterEnd);
        }
        Ok(Self { from, to })
    }

    /// The unbounded period.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse `YYYY-MM-DD` bounds; `None` leaves that side open.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self, InvalidPeriod> {
        Self::new(from.map(parse_date).transpose()?, to.map(parse_date).transpose()?)
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Returns true if `instant` falls on a day inside the period.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let day = instant.date_naive();
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }

    /// Returns true if neither end is bounded. Model API for library
    /// callers; [`Period::contains`] handles open ends on its own.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, InvalidPeriod> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| InvalidPeriod::BadDate(s.to_string()))
}

/// How aggregated distances are bucketed in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    #[default]
    None,
    Day,
    Month,
    Year,
}

impl GroupBy {
    /// Parse `none`, `day`, `month` or `year`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(GroupBy::None),
            "day" => Some(GroupBy::Day),
            "month" => Some(GroupBy::Month),
            "year" => Some(GroupBy::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::None => "none",
            GroupBy::Day => "day",
            GroupBy::Month => "month",
            GroupBy::Year => "year",
        }
    }

    /// The bucket label for `instant`, or `None` when not grouping.
    pub fn key(&self, instant: DateTime<Utc>) -> Option<String> {
        let day = instant.date_naive();
        match self {
            GroupBy::None => None,
            GroupBy::Day => Some(day.format("%Y-%m-%d").to_string()),
            GroupBy::Month => Some(format!("{:04}-{:02}", day.year(), day.month())),
            GroupBy::Year => Some(format!("{:04}", day.year())),
        }
    }
}
