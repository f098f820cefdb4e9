//! Error types for statement operations.
//!
//! This module defines [`StatementError`] which covers every failure that can occur
//! while validating a request, fetching provider data, or shaping a statement table.

use thiserror::Error;

/// Errors that can occur while building a financial statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// An invalid request parameter was provided (unknown token, bad lookback, ...).
    ///
    /// Raised before any network call is made.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The data provider could not be reached or answered with a failure status.
    #[error("Remote unavailable: {0}")]
    RemoteUnavailable(String),

    /// Error parsing data returned by a provider.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reporting policy data is inconsistent.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Error building a DataFrame from a statement table.
    #[error("Frame error: {0}")]
    Frame(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`StatementError`].
pub type Result<T> = std::result::Result<T, StatementError>;
