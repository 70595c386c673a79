// src/config.rs
//! Client configuration.
//!
//! The Badge Service endpoint is the only required setting. Timeouts are
//! handed straight to the HTTP client; this crate does not enforce them
//! itself.
//!
//! ## Environment Variables
//! - `BADGR_API_ENDPOINT`: Base URL of the Badge Service (required)
//! - `BADGR_TIMEOUT_SECS`: Total request timeout in seconds (optional)
//! - `BADGR_CONNECT_TIMEOUT_SECS`: Connect timeout in seconds (optional)
//!
//! A `.env` file in the working directory is honoured.

use crate::error::{Error, Result};
use config::{Config, ConfigError, Environment};
use dotenv::dotenv;
use reqwest::Url;
use std::time::Duration;

/// Settings used to build a [`BadgrClient`](crate::BadgrClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL every route is appended to, without a trailing slash
    pub api_endpoint: String,
    /// Passed to `reqwest::ClientBuilder::timeout`
    pub timeout: Option<Duration>,
    /// Passed to `reqwest::ClientBuilder::connect_timeout`
    pub connect_timeout: Option<Duration>,
}

impl Settings {
    /// Creates settings for the given endpoint with no timeouts.
    ///
    /// # Errors
    /// - [`Error::MissingEndpoint`] if `api_endpoint` is blank
    /// - [`Error::InvalidEndpoint`] if it is not an absolute URL
    pub fn new(api_endpoint: impl Into<String>) -> Result<Self> {
        let api_endpoint = api_endpoint.into();
        let trimmed = api_endpoint.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingEndpoint);
        }

        Url::parse(trimmed).map_err(|e| Error::InvalidEndpoint {
            endpoint: api_endpoint.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            api_endpoint: trimmed.trim_end_matches('/').to_string(),
            timeout: None,
            connect_timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Loads settings from the process environment and an optional `.env`.
    ///
    /// # Errors
    /// Fails when `BADGR_API_ENDPOINT` is missing or invalid, or a timeout is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let source = Config::builder()
            .add_source(Environment::with_prefix("BADGR"))
            .build()?;
        Self::from_config(&source)
    }

    /// Reads settings from an already built configuration.
    ///
    /// Keys: `api_endpoint`, `timeout_secs`, `connect_timeout_secs`.
    pub fn from_config(source: &Config) -> Result<Self> {
        let endpoint = match source.get_string("api_endpoint") {
            Ok(endpoint) => endpoint,
            Err(ConfigError::NotFound(_)) => return Err(Error::MissingEndpoint),
            Err(e) => return Err(e.into()),
        };

        let mut settings = Self::new(endpoint)?;
        settings.timeout = seconds(source, "timeout_secs")?;
        settings.connect_timeout = seconds(source, "connect_timeout_secs")?;
        Ok(settings)
    }
}

fn seconds(source: &Config, key: &str) -> Result<Option<Duration>> {
    let value = match source.get_int(key) {
        Ok(value) => value,
        Err(ConfigError::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let secs = u64::try_from(value).map_err(|_| Error::InvalidSetting {
        key: key.to_string(),
        reason: format!("expected a non-negative number of seconds, got {}", value),
    })?;
    Ok(Some(Duration::from_secs(secs)))
}
