// src/transport/mod.rs
//! HTTP transport collaborator.
//!
//! The client never talks to the network directly. It describes each call as
//! an [`ApiRequest`] and hands it to a [`Transport`], which answers with either
//! an [`ApiResponse`] (any status code) or a [`TransportError`] when no
//! response was received at all.
//!
//! [`HttpTransport`] is the `reqwest` backed implementation used by default.

pub mod http_transport;

pub use http_transport::HttpTransport;

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded`, used by the token endpoint
    Form(Vec<(String, String)>),
    /// `application/json`, allowed on every method including DELETE
    Json(Value),
}

/// One call against the Badge Service.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured endpoint, starting with `/`
    pub path: String,
    /// Access token sent as `Authorization: Bearer ...`
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn bearer(mut self, access_token: &str) -> Self {
        self.bearer = Some(access_token.to_string());
        self
    }

    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(pairs);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }
}

// Form bodies carry passwords and refresh tokens; keep both out of logs.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            RequestBody::Empty => "empty",
            RequestBody::Form(_) => "form",
            RequestBody::Json(_) => "json",
        };
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .field("body", &body)
            .finish()
    }
}

/// What the Badge Service answered, whatever the status code.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Textual status, e.g. `Not Found`
    pub status_text: Option<String>,
    /// Parsed body, `None` when empty or not JSON
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not produce a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Sends [`ApiRequest`]s to the Badge Service.
///
/// Implementations own connection handling, timeouts and cancellation. They
/// must not retry and must report any received response as `Ok`, including
/// non-2xx ones.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}
