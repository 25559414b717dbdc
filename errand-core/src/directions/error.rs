use thiserror::Error;

use crate::TransportMode;

/// Errors from [`crate::directions::DirectionsProvider::route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request could not reach the routing service.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// Request URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The routing service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The routing service answered with an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response description.
        message: String,
    },
    /// The routing service rejected the request.
    #[error("routing service returned {code}: {message}")]
    ServiceError {
        /// Service status code, e.g. `"InvalidQuery"`.
        code: String,
        /// Service-provided message.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse routing response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
    /// A request URL could not be constructed.
    #[error("invalid routing URL {url}: {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser error description.
        message: String,
    },
    /// The provider cannot route with the requested travel mode.
    #[error("travel mode {mode:?} is not supported by this provider")]
    UnsupportedTravelMode {
        /// The rejected mode.
        mode: TransportMode,
    },
}
