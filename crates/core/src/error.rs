//! Unified error types for newsgate.
//!
//! The boundary layer maps each [`ErrorKind`] to its own transport status,
//! so nothing in here knows about HTTP or JSON-RPC codes.

/// Coarse classification used by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    UpstreamFailure,
}

/// Unified error type for the retrieval service.
///
/// `Clone` because a single failed computation is shared by every caller
/// waiting on the same cache key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Caller supplied an out-of-range or malformed parameter.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Search produced no article under the active mode.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Upstream could not be reached or returned an unusable response,
    /// after retries were exhausted.
    #[error("UPSTREAM_UNAVAILABLE: {0}")]
    UpstreamFailure(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::UpstreamFailure(_) => ErrorKind::UpstreamFailure,
        }
    }

    /// Message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidInput(msg) | Error::NotFound(msg) | Error::UpstreamFailure(msg) => msg,
        }
    }
}
