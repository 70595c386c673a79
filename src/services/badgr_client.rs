// src/services/badgr_client.rs
//! Badge Service client.
//!
//! [`BadgrClient`] is an explicit, caller-owned object. It holds nothing but
//! its transport: no session, no stored credential, no cache. Every operation
//! takes the access token it needs, sends exactly one request and returns one
//! [`Outcome`](crate::Outcome).
//!
//! Operations are grouped by resource:
//! - `auth`: token grant and refresh
//! - `issuers`: issuer lookups
//! - `badge_classes`: badge class lookups and lifecycle
//! - `assertions`: award, lookup and revocation

use super::normalizer::Attempt;
use crate::config::Settings;
use crate::error::Result;
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// Client for the Badge Service REST API.
///
/// Cloning is cheap and clones share the underlying connection pool. Calls
/// are independent and may run concurrently.
///
/// # Example
/// ```no_run
/// use badgr_client::{BadgrClient, Settings};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BadgrClient::new(&Settings::new("https://api.badgr.io")?)?;
/// let credential = client
///     .get_access_tokens("issuer@example.com", "password")
///     .await
///     .into_result()?;
/// let issuers = client.get_issuers(credential.bearer(), None).await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BadgrClient<T = HttpTransport> {
    transport: T,
}

impl BadgrClient<HttpTransport> {
    /// Builds a client over HTTP.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(settings)?))
    }

    /// Builds a client from `BADGR_*` environment variables.
    ///
    /// # Errors
    /// Fails when `BADGR_API_ENDPOINT` is missing or invalid.
    pub fn from_env() -> Result<Self> {
        Self::new(&Settings::from_env()?)
    }
}

impl<T: Transport> BadgrClient<T> {
    /// Builds a client over any [`Transport`].
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) async fn attempt(&self, request: ApiRequest) -> Attempt {
        self.transport.send(request).await
    }
}
