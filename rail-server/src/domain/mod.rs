//! Domain types for the rail router.
//!
//! This module contains the validated value types shared by the routing
//! engine and the statistics store. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod analytic_code;
mod distance;
mod error;
mod station_id;

pub use analytic_code::{AnalyticCode, InvalidAnalyticCode};
pub use distance::{Distance, InvalidDistance};
pub use error::DomainError;
pub use station_id::{InvalidStationId, StationId};
