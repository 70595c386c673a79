// src/services/issuers.rs
//! Issuer lookups.

use super::badgr_client::BadgrClient;
use super::{normalizer, routes};
use crate::models::assertion::Assertion;
use crate::models::badge_class::BadgeClass;
use crate::models::issuer::Issuer;
use crate::models::one_or_many::OneOrMany;
use crate::models::outcome::Outcome;
use crate::transport::{ApiRequest, Method, Transport};

impl<T: Transport> BadgrClient<T> {
    /// Lists the issuers visible to the token, or fetches one by id.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token from [`get_access_tokens`](Self::get_access_tokens)
    /// * `entity_id` - When set, only that issuer is fetched
    ///
    /// # Returns
    /// `OneOrMany::One` for a lookup by id, `OneOrMany::Many` in upstream
    /// order otherwise
    pub async fn get_issuers(
        &self,
        access_token: &str,
        entity_id: Option<&str>,
    ) -> Outcome<OneOrMany<Issuer>> {
        let request = ApiRequest::new(Method::Get, routes::issuers(entity_id)).bearer(access_token);
        normalizer::one_or_many(self.attempt(request).await, entity_id.is_some())
    }

    /// Lists the badge classes owned by an issuer.
    pub async fn get_issuer_badge_classes(
        &self,
        access_token: &str,
        issuer_id: &str,
    ) -> Outcome<Vec<BadgeClass>> {
        let request =
            ApiRequest::new(Method::Get, routes::issuer_badge_classes(issuer_id)).bearer(access_token);
        normalizer::collection(self.attempt(request).await)
    }

    /// Lists every assertion awarded by an issuer.
    pub async fn get_issuer_assertions(
        &self,
        access_token: &str,
        issuer_id: &str,
    ) -> Outcome<Vec<Assertion>> {
        let request =
            ApiRequest::new(Method::Get, routes::issuer_assertions(issuer_id)).bearer(access_token);
        normalizer::collection(self.attempt(request).await)
    }
}
