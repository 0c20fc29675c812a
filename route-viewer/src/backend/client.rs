//! Search service HTTP client.
//!
//! Route finding, delay prediction and crowd scoring all happen in the
//! search service. This client only fetches their output.

use serde_json::Value;
use tracing::debug;

use crate::domain::SearchQuery;

use super::error::BackendError;

/// Default base URL for the search service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Longest response body kept in an error message.
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the search service client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for the service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the route search service.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for candidate routes.
    ///
    /// Returns the raw payload; see
    /// [`normalize_route_set`](super::normalize_route_set) for turning it
    /// into routes.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value, BackendError> {
        let url = format!("{}/search_multi", self.base_url);
        debug!(from = query.from(), to = query.to(), time = query.time(), "searching routes");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("from_station", query.from()),
                ("to_station", query.to()),
                ("time", query.time()),
            ])
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetch the list of known station names.
    pub async fn stations(&self) -> Result<Vec<String>, BackendError> {
        let url = format!("{}/stations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let body = read_json(response).await?;

        serde_json::from_value(body).map_err(|e| BackendError::Json {
            message: format!("station list: {e}"),
        })
    }
}

/// Check the status and parse the body as JSON.
async fn read_json(response: reqwest::Response) -> Result<Value, BackendError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Api {
            status: status.as_u16(),
            message: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| BackendError::Json {
        message: e.to_string(),
    })
}
