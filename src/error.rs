//! Error types for connectionify
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Request validation errors are surfaced before any upstream fetch is
//! issued; a failing fetch fails the whole call.

use thiserror::Error;

/// The main error type for connectionify
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Validation Errors
    // ============================================================================
    /// Neither or both of `first`/`last` were supplied
    #[error("pagination request needs exactly one of 'first' or 'last'")]
    MissingDirection,

    /// `first`/`last` was present but not a positive integer
    #[error("the '{param}' parameter should be larger than 0")]
    InvalidCount {
        /// Which parameter failed validation
        param: &'static str,
    },

    /// An `after`/`before` cursor failed to decode
    #[error("invalid cursor: {message}")]
    InvalidCursor {
        /// What was wrong with the token
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid adapter configuration
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    // ============================================================================
    // Upstream Fetch Errors
    // ============================================================================
    /// An injected page source failed in a source-specific way
    #[error("upstream fetch failed: {message}")]
    Upstream {
        /// Source-specific failure description
        message: String,
    },

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP response
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Malformed endpoint URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Escape hatch for caller-provided source errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid cursor error
    pub fn invalid_cursor(message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an upstream fetch error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error was caused by a malformed pagination request
    /// rather than an upstream failure
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Error::MissingDirection | Error::InvalidCount { .. } | Error::InvalidCursor { .. }
        )
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for connectionify
pub type Result<T> = std::result::Result<T, Error>;
