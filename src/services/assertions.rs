// src/services/assertions.rs
//! Awarding, reading and revoking assertions.

use super::badgr_client::BadgrClient;
use super::{normalizer, payloads, routes};
use crate::models::assertion::{Assertion, AwardData};
use crate::models::outcome::Outcome;
use crate::transport::{ApiRequest, Method, Transport};

impl<T: Transport> BadgrClient<T> {
    /// Lists the assertions awarded from a badge class.
    pub async fn get_badge_class_assertions(
        &self,
        access_token: &str,
        badge_class_id: &str,
    ) -> Outcome<Vec<Assertion>> {
        let request = ApiRequest::new(Method::Get, routes::badge_class_assertions(badge_class_id))
            .bearer(access_token);
        normalizer::collection(self.attempt(request).await)
    }

    /// Awards a badge class to a recipient.
    ///
    /// Each call creates a new assertion upstream.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token
    /// * `badge_class_id` - Entity id of the badge class to award
    /// * `data` - Recipient plus optional evidence and expiry. Evidence is
    ///   only sent when both URL and narrative are set
    pub async fn award_badge_class(
        &self,
        access_token: &str,
        badge_class_id: &str,
        data: &AwardData,
    ) -> Outcome<Assertion> {
        let request = ApiRequest::new(Method::Post, routes::badge_class_assertions(badge_class_id))
            .bearer(access_token)
            .json(payloads::award_payload(data));
        normalizer::single(self.attempt(request).await)
    }

    /// Fetches one assertion, including its revocation state.
    pub async fn get_assertion(&self, access_token: &str, assertion_id: &str) -> Outcome<Assertion> {
        let request = ApiRequest::new(Method::Get, routes::assertion(assertion_id)).bearer(access_token);
        normalizer::single(self.attempt(request).await)
    }

    /// Revokes an assertion. The reason travels in the DELETE body.
    pub async fn revoke_assertion(
        &self,
        access_token: &str,
        assertion_id: &str,
        revocation_reason: &str,
    ) -> Outcome<()> {
        let request = ApiRequest::new(Method::Delete, routes::assertion(assertion_id))
            .bearer(access_token)
            .json(payloads::revocation_payload(revocation_reason));
        normalizer::empty(self.attempt(request).await)
    }
}
