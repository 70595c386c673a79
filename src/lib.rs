// src/lib.rs

//! # Badgr Client
//!
//! Typed async client for the Badgr Open Badges issuing API.
//!
//! ## Architecture Overview
//! 1. **Configuration**: [`Settings`] holds the Badge Service endpoint and
//!    passthrough timeouts
//! 2. **Transport**: [`Transport`] sends one request; [`HttpTransport`] does
//!    so with `reqwest`
//! 3. **Normalizer**: turns every transport attempt into an [`Outcome`]
//! 4. **Client**: [`BadgrClient`] exposes one async method per operation
//!
//! ## Credentials
//! The client keeps no session. Obtain a [`Credential`] with
//! [`BadgrClient::get_access_tokens`], pass its access token to each call,
//! and refresh it explicitly with [`BadgrClient::refresh_access_tokens`].
//!
//! ## Failures
//! Operations never return `Err` and never panic. Branch on
//! [`Outcome::is_error`] or convert with [`Outcome::into_result`]. Only
//! building [`Settings`] or a client can fail with [`Error`].
//!
//! ## Environment Variables
//! - `BADGR_API_ENDPOINT`: Badge Service base URL (required by
//!   [`BadgrClient::from_env`])
//! - `BADGR_TIMEOUT_SECS`, `BADGR_CONNECT_TIMEOUT_SECS`: optional timeouts

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;
mod utils;

pub use crate::config::Settings;
pub use crate::error::{Error, Result};
pub use models::assertion::{Assertion, AwardData, Evidence, Recipient, RecipientType};
pub use models::badge_class::{
    BadgeClass, BadgeClassAlignment, BadgeClassData, Expiration, ExpirationDuration,
};
pub use models::credential::Credential;
pub use models::issuer::{Issuer, IssuerStaff, IssuerStaffRole};
pub use models::one_or_many::OneOrMany;
pub use models::outcome::{Failure, FailureKind, Outcome};
pub use services::badgr_client::BadgrClient;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, RequestBody, Transport, TransportError};
