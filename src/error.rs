//! Error type for backend calls.
//!
//! Components never propagate these; they end up as a log line and, for
//! submits, a user-facing alert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("unexpected status: {status}")]
    Status { status: u16 },

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Browser networking is not compiled in (native builds without `csr`).
    #[error("not available outside the browser")]
    Unavailable,
}
