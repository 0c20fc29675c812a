//! Search service client errors.

/// Errors that can occur when calling the search service.
///
/// Any of these on the search path is reported to the user as "could not
/// reach the server". On the station list path they are only logged.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
