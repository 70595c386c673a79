// src/services/routes.rs
//! Badgr v2 REST routes, relative to the configured endpoint.

pub const TOKEN: &str = "/o/token";

pub fn issuers(entity_id: Option<&str>) -> String {
    match entity_id {
        Some(id) => format!("/v2/issuers/{}", id),
        None => "/v2/issuers".to_string(),
    }
}

pub fn issuer_badge_classes(issuer_id: &str) -> String {
    format!("/v2/issuers/{}/badgeclasses", issuer_id)
}

pub fn issuer_assertions(issuer_id: &str) -> String {
    format!("/v2/issuers/{}/assertions", issuer_id)
}

pub fn badge_classes(entity_id: Option<&str>) -> String {
    match entity_id {
        Some(id) => format!("/v2/badgeclasses/{}", id),
        None => "/v2/badgeclasses".to_string(),
    }
}

pub fn badge_class_assertions(badge_class_id: &str) -> String {
    format!("/v2/badgeclasses/{}/assertions", badge_class_id)
}

pub fn assertion(assertion_id: &str) -> String {
    format!("/v2/assertions/{}", assertion_id)
}
