// src/services/auth.rs
//! Token grant and refresh.
//!
//! Both calls hit the OAuth token endpoint with a form body and are
//! normalized with the token precedence: `error_description`, then the raw
//! transport message.

use super::badgr_client::BadgrClient;
use super::{normalizer, payloads, routes};
use crate::models::credential::Credential;
use crate::models::outcome::Outcome;
use crate::transport::{ApiRequest, Method, Transport};

impl<T: Transport> BadgrClient<T> {
    /// Obtains tokens with the resource-owner password grant.
    ///
    /// # Arguments
    /// * `username` - Badgr account username (usually an email address)
    /// * `password` - Account password
    ///
    /// # Returns
    /// `Outcome<Credential>` mirroring the upstream token envelope
    pub async fn get_access_tokens(&self, username: &str, password: &str) -> Outcome<Credential> {
        let request = ApiRequest::new(Method::Post, routes::TOKEN)
            .form(payloads::access_token_form(username, password));
        normalizer::token(self.attempt(request).await)
    }

    /// Exchanges a refresh token for a new credential.
    ///
    /// Refreshing is always explicit; the client never does it on its own.
    pub async fn refresh_access_tokens(&self, refresh_token: &str) -> Outcome<Credential> {
        let request = ApiRequest::new(Method::Post, routes::TOKEN)
            .form(payloads::refresh_token_form(refresh_token));
        normalizer::token(self.attempt(request).await)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::outcome::FailureKind;
    use crate::services::badgr_client::testing::ScriptedTransport;
    use crate::transport::{Method, RequestBody};
    use crate::BadgrClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_access_tokens_sends_password_form() {
        let client = BadgrClient::with_transport(ScriptedTransport::replying(
            200,
            json!({
                "access_token": "at-1",
                "token_type": "Bearer",
                "expires_in": 86400,
                "refresh_token": "rt-1",
                "scope": "rw:issuer"
            }),
        ));

        let outcome = client.get_access_tokens("ada@example.com", "hunter2").await;
        assert!(!outcome.is_error());
        assert!(!outcome.data().unwrap().access_token.is_empty());

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/o/token");
        assert_eq!(request.bearer, None);
        assert!(matches!(request.body, RequestBody::Form(ref pairs) if pairs.len() == 2));
    }

    #[tokio::test]
    async fn test_refresh_rejected() {
        let client = BadgrClient::with_transport(ScriptedTransport::replying(
            400,
            json!({ "error": "invalid_grant", "error_description": "Invalid refresh token" }),
        ));

        let outcome = client.refresh_access_tokens("stale").await;
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::Authentication);
        assert_eq!(failure.message, "Invalid refresh token");
    }
}
