use std::fmt;

use async_trait::async_trait;

use super::types::TimingsResponse;

/// Errors that can occur while fetching timings.
///
/// The UI collapses every variant into one error screen; the variants exist
/// so the log says what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The API answered with a non-success HTTP status.
    Status { status: u16, message: String },
    /// The body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce today's timings.
#[async_trait]
pub trait TimingsSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches the timings once. No retries.
    async fn fetch_timings(&self) -> Result<TimingsResponse, FetchError>;
}
