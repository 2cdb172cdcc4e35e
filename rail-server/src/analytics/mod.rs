//! Trip statistics.
//!
//! Every computed route is recorded with its analytic code and distance;
//! this module stores those records and sums their distances per code,
//! optionally bucketed by day, month or year.

mod aggregate;
mod period;
mod record;
mod store;

pub use aggregate::DistanceAggregate;
pub use period::{GroupBy, InvalidPeriod, Period};
pub use record::RouteRecord;
pub use store::{InMemoryRouteRecordStore, RouteRecordStore};
