//! Route search service client.
//!
//! The search service owns pathfinding, delay prediction and crowd scoring.
//! This module fetches its output and normalizes it into domain routes:
//! - `/search_multi` returns up to a few ranked routes for a query
//! - `/stations` returns every station name, used for autocomplete

mod client;
mod convert;
mod error;
mod types;

pub use client::{BackendClient, BackendConfig, DEFAULT_BASE_URL};
pub use convert::{ValidationError, normalize_route, normalize_route_set};
pub use error::BackendError;
pub use types::{CrowdDto, DelayWarningDto, RiskDto, RouteDto, RouteSetDto, SegmentDto};
