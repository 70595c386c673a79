// src/models/outcome.rs
//! Uniform result value returned by every Badge Service operation.
//!
//! An [`Outcome`] is either the typed payload of a successful call or a
//! [`Failure`] describing why the call failed. Operations never return `Err`
//! and never panic; callers branch on the outcome instead.
//!
//! Serialized, an outcome has the shape consumers of the Badge Service
//! already know:
//! - `{"error": false, "data": ...}`
//! - `{"error": true, "errorMessage": "...", "validationErrors": ..., "fieldErrors": ...}`
//!
//! where the two diagnostic lists only appear when upstream supplied them.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// Category of a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The token endpoint rejected the grant.
    Authentication,
    /// Upstream rejected the payload and returned field or entity diagnostics.
    Validation,
    /// Any other non-2xx answer, e.g. not found or forbidden.
    Upstream,
    /// No usable upstream answer: the request never completed or the body
    /// could not be decoded.
    Transport,
}

/// Failure half of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    /// Human readable reason, chosen by the normalizer's precedence rules
    pub message: String,
    /// HTTP status when upstream answered
    pub status: Option<u16>,
    /// Upstream `validationErrors`, verbatim
    pub validation_errors: Option<Value>,
    /// Upstream `fieldErrors`, verbatim
    pub field_errors: Option<Value>,
}

impl Failure {
    /// Failure with no upstream response to inspect.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
            status: None,
            validation_errors: None,
            field_errors: None,
        }
    }
}

/// Result of one Badge Service operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|failure| failure.message.as_str())
    }

    /// Converts into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(failure) => Err(failure),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(data) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("error", &false)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Failure(failure) => {
                let mut state = serializer.serialize_struct("Outcome", 4)?;
                state.serialize_field("error", &true)?;
                state.serialize_field("errorMessage", &failure.message)?;
                match &failure.validation_errors {
                    Some(errors) => state.serialize_field("validationErrors", errors)?,
                    None => state.skip_field("validationErrors")?,
                }
                match &failure.field_errors {
                    Some(errors) => state.serialize_field("fieldErrors", errors)?,
                    None => state.skip_field("fieldErrors")?,
                }
                state.end()
            }
        }
    }
}
