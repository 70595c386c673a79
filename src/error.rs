// src/error.rs
//! Construction-time errors.
//!
//! These are the only errors the crate returns through `Result`. Once a
//! [`BadgrClient`](crate::BadgrClient) exists, every call reports its failures
//! through an [`Outcome`](crate::Outcome) instead.

/// Fatal error raised while building settings or a client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `BADGR_API_ENDPOINT` is unset or empty.
    #[error("Missing Badgr API endpoint")]
    MissingEndpoint,

    /// The endpoint is not an absolute URL.
    #[error("Invalid Badgr API endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// A numeric setting holds a value that cannot be used.
    #[error("Invalid value for setting `{key}`: {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration sources could not be read.
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Result alias for construction-time operations.
pub type Result<T> = std::result::Result<T, Error>;
