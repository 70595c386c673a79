// src/services/payloads.rs
//! Outgoing request bodies.
//!
//! Paired optional inputs are gated here: evidence needs both URL and
//! narrative, a badge class expiration needs both amount and duration. A lone
//! half is dropped without error.

use crate::models::assertion::AwardData;
use crate::models::badge_class::BadgeClassData;
use chrono::SecondsFormat;
use serde_json::{json, Map, Value};

/// Form for the resource-owner password grant.
pub fn access_token_form(username: &str, password: &str) -> Vec<(String, String)> {
    vec![
        ("username".to_string(), username.to_string()),
        ("password".to_string(), password.to_string()),
    ]
}

/// Form for the refresh grant.
pub fn refresh_token_form(refresh_token: &str) -> Vec<(String, String)> {
    vec![
        ("grant_type".to_string(), "refresh_token".to_string()),
        ("refresh_token".to_string(), refresh_token.to_string()),
    ]
}

/// JSON body of an award.
pub fn award_payload(data: &AwardData) -> Value {
    let mut body = Map::new();
    body.insert("recipient".to_string(), json!(data.recipient));

    match data.evidence() {
        Some(evidence) => {
            body.insert("evidence".to_string(), json!([evidence]));
        }
        None if data.evidence_url.is_some() || data.evidence_narrative.is_some() => {
            log::debug!("Dropping evidence: url and narrative must both be set");
        }
        None => {}
    }

    if let Some(expires) = data.expires {
        body.insert(
            "expires".to_string(),
            Value::String(expires.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
    }

    Value::Object(body)
}

/// JSON body shared by badge class creation and replacement.
pub fn badge_class_payload(data: &BadgeClassData) -> Value {
    let mut body = Map::new();
    body.insert("name".to_string(), json!(data.name));
    body.insert("description".to_string(), json!(data.description));
    body.insert("image".to_string(), json!(data.image));
    body.insert("criteriaUrl".to_string(), json!(data.criteria_url));
    body.insert("criteriaNarrative".to_string(), json!(data.criteria_narrative));

    if let Some(tags) = &data.tags {
        body.insert("tags".to_string(), json!(tags));
    }

    match data.expiration() {
        Some(expiration) => {
            body.insert("expires".to_string(), json!(expiration));
        }
        None if data.expires_amount.is_some() || data.expires_duration.is_some() => {
            log::debug!("Dropping expiration: amount and duration must both be set");
        }
        None => {}
    }

    Value::Object(body)
}

/// JSON body of an assertion revocation.
pub fn revocation_payload(reason: &str) -> Value {
    json!({ "revocation_reason": reason })
}
