//! Error types for the enrichment pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while requesting or parsing enrichment content.
///
/// Every variant here is recoverable: the pipeline catches all of them at the
/// enrichment boundary and proceeds with the built-in default phrasing.
#[derive(Error, Debug)]
pub enum Error {
    /// No usable API key was configured (absent or the unconfigured
    /// placeholder). No network call is attempted in this state.
    #[error("No API key configured; skipping enrichment")]
    MissingApiKey,

    /// The remote endpoint returned 429
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// The remote endpoint returned 403
    #[error("Access denied. Please check your API key permissions.")]
    Forbidden,

    /// Any other non-success HTTP status
    #[error("API request failed: {status}: {message}")]
    RemoteError { status: u16, message: String },

    /// The reply envelope lacked the expected message-content field
    #[error("Invalid API response format: {0}")]
    MalformedResponse(String),

    /// The extractor could not derive structured or heuristic content
    #[error("Could not extract enrichment content from reply")]
    ParseFailure,

    /// Transport-level failure (connection, timeout, body read)
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::NetworkError(err.to_string())
    }
}
