//! Shared error type across maraline crates.

use thiserror::Error;

/// Stable diagnostic codes attached to log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Credentials string is not a usable `username:password` pair.
    BadCredentials,
    /// DNS, connect, TLS, or body-read failure.
    Transport,
    /// Upstream answered with a non-200 status.
    HttpStatus,
    /// The deadline fired before the request resolved.
    Timeout,
    /// Invalid or missing configuration.
    BadConfig,
    /// Internal runtime error.
    Internal,
}

impl ErrorCode {
    /// String representation used in diagnostic output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadCredentials => "BAD_CREDENTIALS",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::HttpStatus => "HTTP_STATUS",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MaralineError>;

/// Unified error type used by core and collector.
///
/// Every variant is non-fatal to a run: each is resolved and logged at the
/// component that produced it, and the pipeline degrades to fewer (possibly
/// zero) metrics lines.
#[derive(Debug, Error)]
pub enum MaralineError {
    #[error("cannot parse basic auth credentials")]
    BadCredentials,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP response code: {0}")]
    HttpStatus(String),
    #[error("request timed out")]
    Timeout,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MaralineError {
    /// Map the error to a stable diagnostic code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MaralineError::BadCredentials => ErrorCode::BadCredentials,
            MaralineError::Transport(_) => ErrorCode::Transport,
            MaralineError::HttpStatus(_) => ErrorCode::HttpStatus,
            MaralineError::Timeout => ErrorCode::Timeout,
            MaralineError::BadConfig(_) => ErrorCode::BadConfig,
            MaralineError::Internal(_) => ErrorCode::Internal,
        }
    }
}
