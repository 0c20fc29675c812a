//! Domain types for the route viewer.
//!
//! Routes arrive from the search service already ranked and annotated.
//! These types hold them in a normalized shape: every optional field has a
//! display-safe default, so the timeline and selection code never branch on
//! absent data.

mod query;
mod route;
mod segment;

pub use query::{QueryError, SearchQuery};
pub use route::{Crowd, CrowdLevel, DelayWarning, Risk, RiskLevel, Route};
pub use segment::{MISSING_TIME, Segment};
