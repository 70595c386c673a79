// src/models/badge_class.rs
//! Badge class data model and the input used to create or replace one.
//!
//! A badge class is the definition of an awardable badge. It belongs to
//! exactly one issuer and carries the criteria a recipient must meet, optional
//! tags, and an optional expiration policy applied to every assertion awarded
//! from it.

use crate::utils::serialization::{null_as_default, number_or_string};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Unit of an [`Expiration`] policy.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationDuration {
    Days,
    Weeks,
    Months,
    Years,
}

/// Expiration policy of a badge class, e.g. "2 years after issuance".
///
/// Upstream may send `amount` as a number or as a numeric string.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration {
    #[serde(deserialize_with = "amount")]
    pub amount: u32,
    pub duration: ExpirationDuration,
}

fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    number_or_string(&Value::deserialize(deserializer)?)
}

/// Reads `expires` of a badge class. Badge classes without a policy come
/// back as `null` or `{"amount": null, "duration": null}`; both, and any
/// half-set pair, decode as `None`.
fn optional_expiration<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Expiration>, D::Error> {
    #[derive(Deserialize)]
    struct Policy {
        #[serde(default)]
        amount: Option<Value>,
        #[serde(default)]
        duration: Option<ExpirationDuration>,
    }

    match Option::<Policy>::deserialize(deserializer)? {
        Some(Policy { amount: Some(amount), duration: Some(duration) }) => Ok(Some(Expiration {
            amount: number_or_string(&amount)?,
            duration,
        })),
        _ => Ok(None),
    }
}

/// Alignment of a badge class to an external framework or standard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeClassAlignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_code: Option<String>,
}

/// A badge definition as returned by the Badge Service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeClass {
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_badge_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Entity id of the owning issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_open_badge_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria_narrative: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub alignments: Vec<BadgeClassAlignment>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(
        default,
        deserialize_with = "optional_expiration",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires: Option<Expiration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields sent when creating or replacing a badge class.
///
/// Update has full-replacement semantics, so the same value type is used for
/// both operations. `expires_amount` and `expires_duration` form a pair: the
/// expiration policy is only sent when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeClassData {
    pub name: String,
    pub description: String,
    /// Image as a data URI or a URL the Badge Service can fetch
    pub image: String,
    pub criteria_url: String,
    pub criteria_narrative: String,
    pub tags: Option<Vec<String>>,
    pub expires_amount: Option<u32>,
    pub expires_duration: Option<ExpirationDuration>,
}

impl BadgeClassData {
    /// Returns the expiration policy when both halves of the pair are set.
    pub fn expiration(&self) -> Option<Expiration> {
        match (self.expires_amount, self.expires_duration) {
            (Some(amount), Some(duration)) => Some(Expiration { amount, duration }),
            _ => None,
        }
    }
}
