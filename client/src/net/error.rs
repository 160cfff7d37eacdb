//! Error type for REST calls against the sightings API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Maximum number of error body characters kept in `ApiError::Http`.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("response error: {0}")]
    Parse(String),
    #[error("request error: {0}")]
    Serialization(String),
    /// Raised during server-side rendering, where there is no browser to call from.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build an `Http` error from a status and a raw response body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http { status, message: sanitize_body(body) }
    }
}

/// Trim and truncate an HTTP error body for logging.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
