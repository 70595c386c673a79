// src/services/badge_classes.rs
//! Badge class lookups and lifecycle.
//!
//! Create and update share one payload builder, so the same
//! [`BadgeClassData`] produces the same body for both. Update replaces the
//! whole badge class; fields left out are cleared upstream.

use super::badgr_client::BadgrClient;
use super::{normalizer, payloads, routes};
use crate::models::badge_class::{BadgeClass, BadgeClassData};
use crate::models::one_or_many::OneOrMany;
use crate::models::outcome::Outcome;
use crate::transport::{ApiRequest, Method, Transport};

impl<T: Transport> BadgrClient<T> {
    /// Lists the badge classes visible to the token, or fetches one by id.
    pub async fn get_badge_classes(
        &self,
        access_token: &str,
        entity_id: Option<&str>,
    ) -> Outcome<OneOrMany<BadgeClass>> {
        let request =
            ApiRequest::new(Method::Get, routes::badge_classes(entity_id)).bearer(access_token);
        normalizer::one_or_many(self.attempt(request).await, entity_id.is_some())
    }

    /// Creates a badge class under an issuer.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token
    /// * `issuer_id` - Entity id of the owning issuer
    /// * `data` - Badge class fields; a half-set expiration pair is dropped
    ///
    /// # Returns
    /// The badge class as stored upstream, or a failure carrying upstream
    /// validation diagnostics
    pub async fn create_badge_class(
        &self,
        access_token: &str,
        issuer_id: &str,
        data: &BadgeClassData,
    ) -> Outcome<BadgeClass> {
        let request = ApiRequest::new(Method::Post, routes::issuer_badge_classes(issuer_id))
            .bearer(access_token)
            .json(payloads::badge_class_payload(data));
        normalizer::single(self.attempt(request).await)
    }

    /// Replaces a badge class with `data`.
    pub async fn update_badge_class(
        &self,
        access_token: &str,
        badge_class_id: &str,
        data: &BadgeClassData,
    ) -> Outcome<BadgeClass> {
        let request = ApiRequest::new(Method::Put, routes::badge_classes(Some(badge_class_id)))
            .bearer(access_token)
            .json(payloads::badge_class_payload(data));
        normalizer::single(self.attempt(request).await)
    }

    /// Deletes a badge class. Upstream refuses once assertions exist.
    pub async fn delete_badge_class(&self, access_token: &str, badge_class_id: &str) -> Outcome<()> {
        let request = ApiRequest::new(Method::Delete, routes::badge_classes(Some(badge_class_id)))
            .bearer(access_token);
        normalizer::empty(self.attempt(request).await)
    }
}
