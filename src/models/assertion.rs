// src/models/assertion.rs
//! Assertion data model: one award of a badge class to one recipient.
//!
//! Also holds the [`Recipient`] and [`Evidence`] types shared by the award
//! request and the assertion returned by the Badge Service.

use crate::utils::serialization::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of identity a [`Recipient`] is addressed by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    #[default]
    Email,
    Telephone,
    Url,
}

/// The person an assertion is awarded to.
///
/// When `hashed` is true the Badge Service stores and publishes only a salted
/// hash of `identity`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub identity: String,

    #[serde(rename = "type")]
    pub recipient_type: RecipientType,

    pub hashed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext_identity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
}

impl Recipient {
    /// Creates a hashed email recipient, the Badge Service default.
    pub fn email(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            recipient_type: RecipientType::Email,
            hashed: true,
            plaintext_identity: None,
            salt: None,
        }
    }

    /// Overrides the identity type.
    pub fn with_type(mut self, recipient_type: RecipientType) -> Self {
        self.recipient_type = recipient_type;
        self
    }

    /// Overrides whether the identity is hashed upstream.
    pub fn with_hashed(mut self, hashed: bool) -> Self {
        self.hashed = hashed;
        self
    }
}

/// Evidence backing an award.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

/// An awarded badge.
///
/// `badgeclass` and `issuer` reference the producing entities by id and are
/// relayed exactly as upstream sent them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_badge_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badgeclass: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badgeclass_open_badge_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badgeclass_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_open_badge_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub evidence: Vec<Evidence>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub revoked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Input of an award.
///
/// `evidence_url` and `evidence_narrative` form a pair: evidence is only sent
/// when both are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardData {
    pub recipient: Recipient,
    pub evidence_url: Option<String>,
    pub evidence_narrative: Option<String>,
    /// Moment the awarded assertion stops being valid
    pub expires: Option<DateTime<Utc>>,
}

impl AwardData {
    /// Award to a hashed email recipient with no evidence and no expiry.
    pub fn new(recipient_email: impl Into<String>) -> Self {
        Self {
            recipient: Recipient::email(recipient_email),
            evidence_url: None,
            evidence_narrative: None,
            expires: None,
        }
    }

    /// Returns the evidence entry when both URL and narrative are set.
    pub fn evidence(&self) -> Option<Evidence> {
        match (&self.evidence_url, &self.evidence_narrative) {
            (Some(url), Some(narrative)) => Some(Evidence {
                url: Some(url.clone()),
                narrative: Some(narrative.clone()),
            }),
            _ => None,
        }
    }
}
