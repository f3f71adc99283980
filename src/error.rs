//! Error types for the Binance Futures client.
//!
//! Validation failures are distinguished from venue rejections so callers can
//! tell "never left this process" apart from "the exchange said no".

use thiserror::Error;

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query-string encoding of a request payload failed
    #[error("query encoding error: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    /// The venue rejected the request after submission
    #[error("exchange error {code}: {message}")]
    Api {
        /// Numeric error code from the venue
        code: i64,
        /// Human-readable error message
        message: String,
    },

    /// The order failed client-side validation and was never submitted
    #[error("{0}")]
    Validation(String),

    /// The venue lists no such instrument
    #[error("symbol not found: {0}")]
    UnknownSymbol(String),

    /// Configuration error (credentials, endpoint selection)
    #[error("configuration error: {0}")]
    Config(String),

    /// User cancelled the operation (ctrl-c during parameter entry)
    #[error("operation cancelled")]
    Interrupted,

    /// Terminal/console I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this failure happened before any network call
    /// (validation or symbol lookup).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::UnknownSymbol(_))
    }

    /// Returns `true` if the venue itself declined the request.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Create a validation error with the given reason.
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Error::Validation(reason.into())
    }
}
