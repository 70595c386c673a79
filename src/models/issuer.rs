// src/models/issuer.rs
//! Issuer data model as served by the Badgr v2 API.

use crate::utils::serialization::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role a staff member holds on an issuer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssuerStaffRole {
    Staff,
    Editor,
    Owner,
}

/// Staff membership entry of an [`Issuer`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssuerStaff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<IssuerStaffRole>,
}

/// An organization that owns badge classes and awards assertions.
///
/// Only `entity_id` is guaranteed by upstream. Fields the Badge Service adds
/// in later API revisions land in `extra` and are serialized back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    /// Badgr identifier used in every issuer route
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    /// Public Open Badges URL of the issuer profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_badge_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub staff: Vec<IssuerStaff>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badgr_domain: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
