// src/transport/http_transport.rs
//! `reqwest` implementation of [`Transport`].
//!
//! Provides:
//! - Base URL handling (the configured endpoint prefixes every path)
//! - Form and JSON request bodies, including JSON on DELETE
//! - Bearer authentication
//! - Passthrough of connect and request timeouts
//!
//! Connection pooling is shared between clones, so a single transport can
//! serve concurrent calls.

use super::{ApiRequest, ApiResponse, Method, RequestBody, Transport, TransportError};
use crate::config::Settings;
use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::future::Future;

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by a `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    /// Endpoint without trailing slash
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport from validated settings.
    ///
    /// # Errors
    /// Returns [`Error::HttpClient`](crate::Error::HttpClient) if the TLS
    /// backend or client cannot be initialised.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.api_endpoint.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        log::debug!("{} {}", request.method, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(pairs) => builder.form(pairs),
            RequestBody::Json(body) => builder.json(body),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Error reading response body: {}", e)))?;

        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };

        Ok(ApiResponse {
            status: status.as_u16(),
            // reqwest does not expose the wire reason phrase; this is the
            // standard phrase for the code, None for non-standard codes
            status_text: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = std::result::Result<ApiResponse, TransportError>> + Send {
        self.execute(request)
    }
}
