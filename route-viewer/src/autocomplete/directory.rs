//! Shared station name list.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::BackendClient;

use super::matcher::match_candidates;

/// The station names every autocomplete field matches against.
///
/// Fetched once at startup and shared by reference; cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: Arc<[String]>,
}

impl StationDirectory {
    /// Create a directory from a list of names.
    ///
    /// Blank names and repeats are dropped; order is otherwise kept.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: build_names(names.into_iter().map(Into::into)).into(),
        }
    }

    /// Create an empty directory. Fields backed by it never show a dropdown.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch station names from the search service.
    ///
    /// A failed fetch is not an error for the user: the directory degrades
    /// to empty and the fields behave as plain text inputs.
    pub async fn load(client: &BackendClient) -> Self {
        Self::from_fetch(client.stations().await)
    }

    /// Build from the outcome of a station list fetch, degrading on error.
    pub fn from_fetch<E: std::fmt::Display>(result: Result<Vec<String>, E>) -> Self {
        match result {
            Ok(names) => {
                let directory = Self::from_names(names);
                info!(count = directory.len(), "loaded station names");
                directory
            }
            Err(e) => {
                warn!(error = %e, "station list unavailable, autocomplete disabled");
                Self::empty()
            }
        }
    }

    /// All names, in directory order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names containing `query`.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        match_candidates(query, &self.names)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn build_names(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .filter(|name| !name.trim().is_empty())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
