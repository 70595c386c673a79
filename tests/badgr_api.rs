// tests/badgr_api.rs
//! End-to-end tests of the client over real HTTP against a mock Badge
//! Service.

use badgr_client::{
    AwardData, BadgeClassData, BadgrClient, Error, ExpirationDuration, FailureKind, OneOrMany,
    Settings,
};
use mockito::{mock, Matcher};
use serde_json::json;

fn client() -> BadgrClient {
    let _ = env_logger::builder().is_test(true).try_init();
    let settings = Settings::new(mockito::server_url()).expect("mock server url should be valid");
    BadgrClient::new(&settings).expect("should build client")
}

fn token_envelope() -> serde_json::Value {
    json!({
        "access_token": "at-1",
        "token_type": "Bearer",
        "expires_in": 86400,
        "refresh_token": "rt-1",
        "scope": "rw:profile rw:issuer rw:backpack"
    })
}

#[tokio::test]
async fn issue_tokens_with_valid_credentials() {
    let m = mock("POST", "/o/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "ada@example.com".into()),
            Matcher::UrlEncoded("password".into(), "hunter2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_envelope().to_string())
        .create();

    let outcome = client().get_access_tokens("ada@example.com", "hunter2").await;

    m.assert();
    assert!(!outcome.is_error());
    let credential = outcome.data().expect("should carry a credential");
    assert!(!credential.access_token.is_empty());
    assert_eq!(serde_json::to_value(credential).unwrap(), token_envelope());
}

#[tokio::test]
async fn issue_tokens_with_invalid_credentials() {
    let _m = mock("POST", "/o/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "invalid_grant", "error_description": "Invalid credentials given."}"#)
        .create();

    let outcome = client().get_access_tokens("ada@example.com", "wrong").await;

    let failure = outcome.failure().expect("should fail");
    assert_eq!(failure.kind, FailureKind::Authentication);
    assert_eq!(failure.message, "Invalid credentials given.");
    assert_eq!(failure.status, Some(401));
}

#[tokio::test]
async fn refresh_tokens_uses_refresh_grant() {
    let m = mock("POST", "/o/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "rt-0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_envelope().to_string())
        .create();

    let outcome = client().refresh_access_tokens("rt-0").await;

    m.assert();
    assert_eq!(outcome.data().and_then(|c| c.refresh_token.as_deref()), Some("rt-1"));
}

#[tokio::test]
async fn refresh_tokens_without_rotated_refresh_token() {
    let _m = mock("POST", "/o/token")
        .match_body(Matcher::UrlEncoded("refresh_token".into(), "rt-keep".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "at-9", "token_type": "Bearer", "expires_in": 3600}"#)
        .create();

    let outcome = client().refresh_access_tokens("rt-keep").await;

    let credential = outcome.data().expect("a partial envelope is still a credential");
    assert_eq!(credential.bearer(), "at-9");
    assert_eq!(credential.refresh_token, None);
    assert_eq!(credential.scope, None);
}

#[tokio::test]
async fn list_issuers_twice_returns_same_order() {
    let m = mock("GET", "/v2/issuers")
        .match_header("authorization", "Bearer at-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": { "success": true, "description": "ok" },
                "result": [
                    { "entityId": "IssB", "name": "Second Alphabetically" },
                    { "entityId": "IssA", "name": "First Alphabetically" }
                ]
            })
            .to_string(),
        )
        .expect(2)
        .create();

    let client = client();
    let first = client.get_issuers("at-1", None).await;
    let second = client.get_issuers("at-1", None).await;

    m.assert();
    assert_eq!(first, second);
    let ids: Vec<_> = first
        .into_result()
        .expect("should list issuers")
        .into_vec()
        .into_iter()
        .map(|issuer| issuer.entity_id)
        .collect();
    assert_eq!(ids, vec!["IssB", "IssA"]);
}

#[tokio::test]
async fn badge_class_by_id() {
    let _m = mock("GET", "/v2/badgeclasses/Bc1")
        .match_header("authorization", "Bearer at-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": [{"entityId": "Bc1", "issuer": "Iss1", "expires": {"amount": 6, "duration": "months"}}]}"#)
        .create();

    let outcome = client().get_badge_classes("at-1", Some("Bc1")).await;

    match outcome.data() {
        Some(OneOrMany::One(badge_class)) => {
            assert_eq!(badge_class.issuer.as_deref(), Some("Iss1"));
            assert_eq!(badge_class.expires.map(|e| e.duration), Some(ExpirationDuration::Months));
        }
        other => panic!("expected one badge class, got {:?}", other),
    }
}

#[tokio::test]
async fn issuer_badge_classes_without_expiry_policy() {
    let _m = mock("GET", "/v2/issuers/IssNoExpiry/badgeclasses")
        .match_header("authorization", "Bearer at-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": { "success": true, "description": "ok" },
                "result": [
                    {
                        "entityId": "Bc1",
                        "issuer": "IssNoExpiry",
                        "criteriaUrl": null,
                        "tags": null,
                        "alignments": [],
                        "expires": { "amount": null, "duration": null },
                        "extensions": {}
                    },
                    {
                        "entityId": "Bc2",
                        "issuer": "IssNoExpiry",
                        "expires": { "amount": "2", "duration": "years" }
                    }
                ]
            })
            .to_string(),
        )
        .create();

    let outcome = client().get_issuer_badge_classes("at-1", "IssNoExpiry").await;

    let badge_classes = outcome.into_result().expect("should list badge classes");
    assert_eq!(badge_classes.len(), 2);
    assert_eq!(badge_classes[0].expires, None);
    assert!(badge_classes[0].tags.is_empty());
    let expiry = badge_classes[1].expires.expect("second class expires");
    assert_eq!((expiry.amount, expiry.duration), (2, ExpirationDuration::Years));
}

#[tokio::test]
async fn award_with_only_evidence_url_omits_evidence() {
    let m = mock("POST", "/v2/badgeclasses/Bc1/assertions")
        .match_header("authorization", "Bearer at-1")
        .match_body(Matcher::Json(json!({
            "recipient": { "identity": "ada@example.com", "type": "email", "hashed": true }
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": { "success": true, "description": "ok" },
                "result": [{
                    "entityId": "As1",
                    "badgeclass": "Bc1",
                    "issuer": "Iss1",
                    "recipient": { "identity": "sha256$9f86d0", "type": "email", "hashed": true },
                    "issuedOn": "2024-05-01T09:30:00Z",
                    "revoked": false
                }]
            })
            .to_string(),
        )
        .create();

    let mut data = AwardData::new("ada@example.com");
    data.evidence_url = Some("https://example.com/portfolio".to_string());
    let outcome = client().award_badge_class("at-1", "Bc1", &data).await;

    m.assert();
    let assertion = outcome.data().expect("should award");
    assert_eq!(assertion.badgeclass.as_deref(), Some("Bc1"));
    assert_eq!(assertion.issuer.as_deref(), Some("Iss1"));
}

#[tokio::test]
async fn create_badge_class_validation_failure() {
    let _m = mock("POST", "/v2/issuers/Iss1/badgeclasses")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": { "success": false, "description": "Could not create badge class" },
                "validationErrors": ["Image must be a PNG or SVG"],
                "fieldErrors": { "name": ["This field may not be blank."] }
            })
            .to_string(),
        )
        .create();

    let data = BadgeClassData {
        name: String::new(),
        description: "Empty name".to_string(),
        image: "https://example.com/badge.gif".to_string(),
        criteria_url: "https://example.com/criteria".to_string(),
        criteria_narrative: "Do the thing".to_string(),
        ..Default::default()
    };
    let outcome = client().create_badge_class("at-1", "Iss1", &data).await;

    let failure = outcome.failure().expect("should fail");
    assert_eq!(failure.kind, FailureKind::Validation);
    assert_eq!(failure.message, "Could not create badge class");
    assert_eq!(failure.validation_errors, Some(json!(["Image must be a PNG or SVG"])));
    assert_eq!(failure.field_errors, Some(json!({ "name": ["This field may not be blank."] })));

    let serialized = serde_json::to_value(&outcome).unwrap();
    assert_eq!(serialized["error"], true);
    assert_eq!(serialized["errorMessage"], "Could not create badge class");
}

#[tokio::test]
async fn unstructured_failure_falls_back_to_status_text() {
    let _m = mock("GET", "/v2/badgeclasses/Missing/assertions")
        .with_status(404)
        .with_header("content-type", "text/html")
        .with_body("<h1>Not Found</h1>")
        .create();

    let outcome = client().get_badge_class_assertions("at-1", "Missing").await;

    let failure = outcome.failure().expect("should fail");
    assert_eq!(failure.kind, FailureKind::Upstream);
    assert_eq!(failure.message, "Not Found");
}

#[tokio::test]
async fn delete_badge_class_returns_empty_success() {
    let m = mock("DELETE", "/v2/badgeclasses/Bc1")
        .match_header("authorization", "Bearer at-1")
        .with_status(204)
        .create();

    let outcome = client().delete_badge_class("at-1", "Bc1").await;

    m.assert();
    assert_eq!(outcome.data(), Some(&()));
}

#[tokio::test]
async fn revoke_assertion_returns_empty_success() {
    let m = mock("DELETE", "/v2/assertions/As1")
        .match_header("authorization", "Bearer at-1")
        .match_body(Matcher::Json(json!({ "revocation_reason": "Awarded in error" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": {"success": true, "description": "ok"}, "result": []}"#)
        .create();

    let outcome = client().revoke_assertion("at-1", "As1", "Awarded in error").await;

    m.assert();
    assert!(!outcome.is_error());
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "error": false, "data": null })
    );
}

#[tokio::test]
async fn unreachable_service_is_transport_failure() {
    let settings = Settings::new("http://127.0.0.1:1").unwrap();
    let client = BadgrClient::new(&settings).unwrap();

    let outcome = client.get_issuers("at-1", None).await;

    let failure = outcome.failure().expect("should fail");
    assert_eq!(failure.kind, FailureKind::Transport);
    assert_eq!(failure.status, None);
    assert!(!failure.message.is_empty());
}

#[test]
fn missing_endpoint_is_fatal() {
    assert!(matches!(Settings::new(""), Err(Error::MissingEndpoint)));
}
