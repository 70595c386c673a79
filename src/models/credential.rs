// src/models/credential.rs
//! OAuth2 credential returned by the Badgr token endpoint.
//!
//! The Badge Service answers both the password grant and the refresh grant
//! with the same token envelope. This module mirrors that envelope field for
//! field so the caller receives exactly what upstream issued.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access and refresh tokens issued by the Badge Service.
///
/// The library never stores or renews a credential on its own. Callers keep
/// it, pass the access token into every authenticated operation, and call
/// [`refresh_access_tokens`](crate::BadgrClient::refresh_access_tokens) when
/// they decide it is time.
///
/// Only `access_token` is required. Upstream omits the other fields for some
/// grants and deployments, and absent fields stay absent when re-serialized.
///
/// # Fields
/// - `access_token`: Bearer token sent in the `Authorization` header
/// - `token_type`: Token type reported by upstream (normally `Bearer`)
/// - `expires_in`: Lifetime of the access token in seconds
/// - `refresh_token`: Token accepted by the refresh grant
/// - `scope`: Space separated scopes granted to the token
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Credential {
    /// Returns the access token in the form expected by authenticated
    /// operations.
    pub fn bearer(&self) -> &str {
        &self.access_token
    }
}

// Tokens stay out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("scope", &self.scope)
            .finish()
    }
}
