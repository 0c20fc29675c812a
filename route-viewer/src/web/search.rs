//! Running a search and classifying its outcome.

use serde_json::Value;
use tracing::{error, info};

use crate::backend::{BackendClient, BackendError, normalize_route_set};
use crate::domain::{Route, SearchQuery};
use crate::selection::SearchFailure;

/// Call the search service and normalize its response.
pub async fn run_search(
    backend: &BackendClient,
    query: &SearchQuery,
) -> Result<Vec<Route>, SearchFailure> {
    let outcome = search_outcome(backend.search(query).await);
    if let Ok(routes) = &outcome {
        info!(
            from = query.from(),
            to = query.to(),
            time = query.time(),
            routes = routes.len(),
            "search completed"
        );
    }
    outcome
}

/// Classify a fetched payload into routes or a user-facing failure.
///
/// Any transport or status error is a network failure. A payload without
/// usable segments is a validation failure. The detail is logged here and
/// not passed on.
pub fn search_outcome(fetched: Result<Value, BackendError>) -> Result<Vec<Route>, SearchFailure> {
    let raw = fetched.map_err(|e| {
        error!(error = %e, "search request failed");
        SearchFailure::Network
    })?;

    normalize_route_set(&raw).map_err(|e| {
        error!(error = %e, "search response rejected");
        SearchFailure::Validation
    })
}
