// src/services/normalizer.rs
//! Result normalizer.
//!
//! Turns one transport attempt into an [`Outcome`]. This is the only place
//! that knows how the Badge Service reports failures, so every operation
//! funnels its attempt through one of the entry points below:
//! - [`token`] for the OAuth token endpoint
//! - [`collection`], [`single`] and [`one_or_many`] for `{result: [...]}`
//!   envelopes
//! - [`empty`] for calls whose success carries no payload
//!
//! # Message precedence
//! Resource endpoints: `status.description`, then the status text, then the
//! raw transport message. Token endpoints: `error_description`, then the raw
//! transport message. The token path deliberately has no status text step.

use crate::models::credential::Credential;
use crate::models::one_or_many::OneOrMany;
use crate::models::outcome::{Failure, FailureKind, Outcome};
use crate::transport::{ApiResponse, TransportError};
use crate::utils::serialization::{decode, non_empty_str, non_null, present};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of a single transport call.
pub type Attempt = Result<ApiResponse, TransportError>;

#[derive(Deserialize)]
struct Envelope<T> {
    result: Vec<T>,
}

/// Normalizes a token grant or refresh.
pub fn token(attempt: Attempt) -> Outcome<Credential> {
    let response = match attempt {
        Ok(response) => response,
        Err(e) => return report(Failure::transport(e.message)),
    };

    if !response.is_success() {
        return report(token_failure(&response));
    }

    match response.body {
        Some(body) => match decode::<Credential>(body) {
            Ok(credential) => Outcome::Success(credential),
            Err(e) => report(malformed(&e)),
        },
        None => report(malformed("empty token response")),
    }
}

/// Normalizes a collection listing.
pub fn collection<T: DeserializeOwned>(attempt: Attempt) -> Outcome<Vec<T>> {
    resource(attempt, |body| {
        decode::<Envelope<T>>(body).map(|envelope| envelope.result)
    })
}

/// Normalizes a call answering with exactly one entity in `result`.
pub fn single<T: DeserializeOwned>(attempt: Attempt) -> Outcome<T> {
    resource(attempt, |body| {
        decode::<Envelope<T>>(body)?
            .result
            .into_iter()
            .next()
            .ok_or_else(|| "result is empty".to_string())
    })
}

/// Normalizes a lookup that is a single entity when `by_id` and a collection
/// otherwise.
pub fn one_or_many<T: DeserializeOwned>(attempt: Attempt, by_id: bool) -> Outcome<OneOrMany<T>> {
    if by_id {
        single(attempt).map(OneOrMany::One)
    } else {
        collection(attempt).map(OneOrMany::Many)
    }
}

/// Normalizes a call whose success has no payload. Any 2xx body is ignored.
pub fn empty(attempt: Attempt) -> Outcome<()> {
    resource(attempt, |_| Ok(()))
}

fn resource<T, F>(attempt: Attempt, extract: F) -> Outcome<T>
where
    F: FnOnce(Value) -> Result<T, String>,
{
    let response = match attempt {
        Ok(response) => response,
        Err(e) => return report(Failure::transport(e.message)),
    };

    if !response.is_success() {
        return report(resource_failure(&response));
    }

    match extract(response.body.unwrap_or(Value::Null)) {
        Ok(data) => Outcome::Success(data),
        Err(e) => report(malformed(&e)),
    }
}

/// `error_description`, else the raw message.
fn token_failure(response: &ApiResponse) -> Failure {
    let description = response
        .body
        .as_ref()
        .and_then(|body| non_empty_str(body.get("error_description")));

    let kind = if (400..500).contains(&response.status) {
        FailureKind::Authentication
    } else {
        FailureKind::Upstream
    };

    Failure {
        kind,
        message: description.unwrap_or_else(|| raw_message(response.status)),
        status: Some(response.status),
        validation_errors: None,
        field_errors: None,
    }
}

/// `status.description`, else status text, else the raw message.
/// `validationErrors` is attached when non-empty, `fieldErrors` whenever it
/// is not `null`. Only non-empty diagnostics make the failure `Validation`.
fn resource_failure(response: &ApiResponse) -> Failure {
    let body = response.body.as_ref();

    let message = body
        .and_then(|body| non_empty_str(body.pointer("/status/description")))
        .or_else(|| response.status_text.clone().filter(|text| !text.trim().is_empty()))
        .unwrap_or_else(|| raw_message(response.status));

    let validation_errors = body.and_then(|body| present(body.get("validationErrors")));
    let field_errors = body.and_then(|body| non_null(body.get("fieldErrors")));

    let has_field_errors = field_errors.as_ref().and_then(|errors| present(Some(errors))).is_some();
    let kind = if validation_errors.is_some() || has_field_errors {
        FailureKind::Validation
    } else {
        FailureKind::Upstream
    };

    Failure {
        kind,
        message,
        status: Some(response.status),
        validation_errors,
        field_errors,
    }
}

fn raw_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}

fn malformed(reason: &str) -> Failure {
    Failure::transport(format!("Unexpected Badge Service response: {}", reason))
}

fn report<T>(failure: Failure) -> Outcome<T> {
    log::warn!(
        "Badge Service call failed ({:?}, status {:?}): {}",
        failure.kind,
        failure.status,
        failure.message
    );
    Outcome::Failure(failure)
}
