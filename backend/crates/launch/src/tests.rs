//! Unit tests for the launch crate
//!
//! Properties of the launch-payload check, end to end through the use case
//! and the HTTP surface.

#[cfg(test)]
mod helpers {
    use crate::domain::services::sign_payload;
    use platform::secret::SharedSecret;

    pub const BOT_TOKEN: &str = "5768337691:AAH5YkoiEuPk8-FZa32hStHTqXiLPtAEhx8";
    pub const USER_JSON: &str =
        r#"{"id":42,"first_name":"Ada","last_name":"Lovelace","username":"ada","language_code":"en"}"#;

    pub fn secret(value: &str) -> SharedSecret {
        SharedSecret::new(value).unwrap()
    }

    pub fn launch_fields(auth_date: i64) -> Vec<(String, String)> {
        vec![
            ("query_id".to_string(), "AAHdF6IQAAAAAN0XohDhrOrc".to_string()),
            ("user".to_string(), USER_JSON.to_string()),
            ("auth_date".to_string(), auth_date.to_string()),
        ]
    }

    pub fn signed_launch(auth_date: i64) -> String {
        sign_payload(&launch_fields(auth_date), &secret(BOT_TOKEN))
    }
}

#[cfg(test)]
mod verifier_tests {
    use super::helpers::*;
    use crate::application::config::LaunchConfig;
    use crate::application::validate_launch::{ValidateLaunchUseCase, Verdict};
    use crate::domain::services::{compute_signature, sign_fields, sign_payload, verify_signature};
    use crate::error::LaunchError;
    use std::sync::Arc;

    fn use_case(config: LaunchConfig) -> ValidateLaunchUseCase {
        ValidateLaunchUseCase::new(Arc::new(config))
    }

    fn configured() -> ValidateLaunchUseCase {
        use_case(LaunchConfig::new(Some(secret(BOT_TOKEN))))
    }

    #[test]
    fn test_round_trip_yields_identity() {
        let identity = configured().execute(&signed_launch(1_700_000_000)).unwrap();
        assert_eq!(identity.id(), 42);
        assert_eq!(identity.username(), Some("ada"));
        assert_eq!(identity.first_name(), Some("Ada"));
        assert_eq!(identity.last_name(), Some("Lovelace"));
    }

    #[test]
    fn test_concrete_check_string_scenario() {
        let s = secret("S");
        let hash = compute_signature(&s, "a=1\nb=2");

        let signed = verify_signature(&format!("a=1&b=2&hash={}", hash), &s).unwrap();
        assert_eq!(signed.data_check_string(), "a=1\nb=2");

        let err = verify_signature(&format!("a=1&b=3&hash={}", hash), &s).unwrap_err();
        assert!(matches!(err, LaunchError::SignatureMismatch));
    }

    #[test]
    fn test_signature_ok_without_user_is_identity_missing() {
        let s = secret("S");
        let raw = sign_payload(&[("a", "1"), ("b", "2")], &s);
        let err = use_case(LaunchConfig::new(Some(s))).execute(&raw).unwrap_err();
        assert!(matches!(err, LaunchError::IdentityMissing));
    }

    #[test]
    fn test_encoded_user_yields_id_42() {
        let s = secret("S");
        let hash = sign_fields(&[("user", r#"{"id":42}"#)], &s);
        let raw = format!("user=%7B%22id%22%3A42%7D&hash={}", hash);

        let identity = use_case(LaunchConfig::new(Some(s))).execute(&raw).unwrap();
        assert_eq!(identity.id(), 42);
    }

    #[test]
    fn test_valid_signature_but_user_not_json_is_invalid() {
        let s = secret("S");
        let raw = sign_payload(&[("user", "not-json")], &s);
        assert!(verify_signature(&raw, &s).is_ok());

        let verifier = use_case(LaunchConfig::new(Some(s)));
        assert!(matches!(
            verifier.execute(&raw).unwrap_err(),
            LaunchError::MalformedPayload(_)
        ));
        assert_eq!(verifier.verdict(&raw), Verdict::Invalid);
    }

    #[test]
    fn test_mutating_any_value_character_is_rejected() {
        let s = secret(BOT_TOKEN);
        let fields = launch_fields(1_700_000_000);
        let hash = sign_fields(&fields, &s);
        let verifier = configured();

        for (index, (_, value)) in fields.iter().enumerate() {
            for position in 0..value.len() {
                let mut mutated = fields.clone();
                let mut bytes = mutated[index].1.clone().into_bytes();
                bytes[position] = if bytes[position] == b'x' { b'y' } else { b'x' };
                mutated[index].1 = String::from_utf8(bytes).unwrap();

                let mut serializer = form_urlencoded::Serializer::new(String::new());
                for (k, v) in &mutated {
                    serializer.append_pair(k, v);
                }
                serializer.append_pair("hash", &hash);

                assert!(
                    !verifier.verdict(&serializer.finish()).is_valid(),
                    "mutation of field {} at {} accepted",
                    index,
                    position
                );
            }
        }
    }

    #[test]
    fn test_missing_hash_is_malformed() {
        let raw = "query_id=x&user=%7B%22id%22%3A42%7D&auth_date=1";
        let err = configured().execute(raw).unwrap_err();
        assert!(matches!(err, LaunchError::MalformedPayload("missing hash")));
    }

    #[test]
    fn test_signature_is_order_independent() {
        let s = secret("S");
        let forward = sign_fields(&[("a", "1"), ("b", "2"), ("c", "3")], &s);
        let shuffled = sign_fields(&[("c", "3"), ("a", "1"), ("b", "2")], &s);
        assert_eq!(forward, shuffled);

        // Payload order is irrelevant on the verifying side too
        let raw = format!("b=2&hash={}&c=3&a=1", forward);
        assert!(verify_signature(&raw, &s).is_ok());
    }

    #[test]
    fn test_missing_secret_fails_every_input() {
        let unconfigured = use_case(LaunchConfig::default());
        let err = unconfigured.execute(&signed_launch(1_700_000_000)).unwrap_err();
        assert!(matches!(err, LaunchError::ConfigurationMissing));
        assert_eq!(unconfigured.verdict("garbage"), Verdict::Invalid);
    }

    #[test]
    fn test_payload_from_other_bot_is_rejected() {
        let other = use_case(LaunchConfig::new(Some(secret("another-bot-token"))));
        let err = other.execute(&signed_launch(1_700_000_000)).unwrap_err();
        assert!(matches!(err, LaunchError::SignatureMismatch));
    }

    #[test]
    fn test_empty_payload_is_invalid() {
        assert_eq!(configured().verdict(""), Verdict::Invalid);
    }

    #[test]
    fn test_freshness_disabled_by_default() {
        // auth_date = 1 is decades old
        assert!(configured().execute(&signed_launch(1)).is_ok());
    }

    #[test]
    fn test_freshness_when_enabled() {
        use chrono::{TimeZone, Utc};
        use std::time::Duration;

        let verifier = use_case(
            LaunchConfig::new(Some(secret(BOT_TOKEN))).with_max_age(Duration::from_secs(3600)),
        );
        let now = Utc.timestamp_opt(1_700_003_600, 0).unwrap();

        assert!(verifier.execute_at(&signed_launch(1_700_000_000), now).is_ok());
        assert!(matches!(
            verifier.execute_at(&signed_launch(1_699_999_999), now).unwrap_err(),
            LaunchError::Expired
        ));
        // Issued slightly in the future (clock skew) still passes
        assert!(verifier.execute_at(&signed_launch(1_700_003_700), now).is_ok());
    }

    #[test]
    fn test_freshness_requires_auth_date() {
        use std::time::Duration;

        let s = secret(BOT_TOKEN);
        let raw = sign_payload(&[("user", USER_JSON)], &s);
        let verifier =
            use_case(LaunchConfig::new(Some(s)).with_max_age(Duration::from_secs(3600)));
        assert!(matches!(
            verifier.execute(&raw).unwrap_err(),
            LaunchError::MalformedPayload("missing auth_date")
        ));
    }

    #[test]
    fn test_freshness_rejects_non_numeric_auth_date() {
        use std::time::Duration;

        let s = secret(BOT_TOKEN);
        let raw = sign_payload(&[("auth_date", "yesterday"), ("user", USER_JSON)], &s);
        let verifier =
            use_case(LaunchConfig::new(Some(s)).with_max_age(Duration::from_secs(3600)));
        assert!(matches!(
            verifier.execute(&raw).unwrap_err(),
            LaunchError::MalformedPayload("auth_date is not a timestamp")
        ));

        // Without a freshness window the same signed payload is accepted
        let lenient = use_case(LaunchConfig::new(Some(secret(BOT_TOKEN))));
        assert_eq!(lenient.execute(&raw).unwrap().id(), 42);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_all_reasons_look_identical_to_callers() {
        let errors = vec![
            LaunchError::ConfigurationMissing,
            LaunchError::MalformedPayload("missing hash"),
            LaunchError::SignatureMismatch,
            LaunchError::IdentityMissing,
            LaunchError::Expired,
        ];

        for error in errors {
            assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(error.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_reasons_are_distinct_for_logs() {
        assert_eq!(LaunchError::SignatureMismatch.reason(), "signature_mismatch");
        assert_eq!(LaunchError::ConfigurationMissing.reason(), "configuration_missing");
        assert_ne!(
            LaunchError::MalformedPayload("x").reason(),
            LaunchError::IdentityMissing.reason()
        );
    }
}

#[cfg(test)]
mod http_tests {
    use super::helpers::*;
    use crate::application::config::LaunchConfig;
    use crate::presentation::handlers::LaunchAppState;
    use crate::presentation::middleware::require_launch_identity;
    use crate::presentation::router::launch_router;
    use crate::domain::identity::VerifiedIdentity;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use tower::ServiceExt;

    fn state() -> LaunchAppState {
        LaunchAppState::new(LaunchConfig::new(Some(secret(BOT_TOKEN))))
    }

    async fn post_validate(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::post("/validate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validate_success() {
        let body = serde_json::json!({ "initData": signed_launch(1_700_000_000) }).to_string();
        let (status, json) = post_validate(launch_router(state()), &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["valid"], true);
        assert_eq!(json["user"]["id"], 42);
        assert_eq!(json["user"]["username"], "ada");
    }

    #[tokio::test]
    async fn test_validate_tampered_is_false_without_user() {
        let tampered = signed_launch(1_700_000_000).replace("Ada", "Eve");
        let body = serde_json::json!({ "initData": tampered }).to_string();
        let (status, json) = post_validate(launch_router(state()), &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "valid": false }));
    }

    #[tokio::test]
    async fn test_validate_without_secret_is_false() {
        let app = launch_router(LaunchAppState::new(LaunchConfig::default()));
        let body = serde_json::json!({ "initData": signed_launch(1_700_000_000) }).to_string();
        let (status, json) = post_validate(app, &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "valid": false }));
    }

    #[tokio::test]
    async fn test_validate_missing_init_data_is_bad_request() {
        let (status, json) = post_validate(launch_router(state()), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "valid": false }));
    }

    #[tokio::test]
    async fn test_validate_garbage_body_still_answers_valid_false() {
        let (status, json) = post_validate(launch_router(state()), "{{{").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, serde_json::json!({ "valid": false }));
    }

    fn protected_app() -> Router {
        async fn whoami(Extension(identity): Extension<VerifiedIdentity>) -> String {
            identity.id().to_string()
        }

        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(state(), require_launch_identity))
    }

    #[tokio::test]
    async fn test_middleware_accepts_signed_payload() {
        let request = Request::get("/whoami")
            .header(header::AUTHORIZATION, format!("tma {}", signed_launch(1_700_000_000)))
            .body(Body::empty())
            .unwrap();
        let response = protected_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn test_middleware_rejects_missing_and_forged() {
        let missing = Request::get("/whoami").body(Body::empty()).unwrap();
        let response = protected_app().oneshot(missing).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let forged = signed_launch(1_700_000_000).replace("42", "43");
        let request = Request::get("/whoami")
            .header(header::AUTHORIZATION, format!("tma {}", forged))
            .body(Body::empty())
            .unwrap();
        let response = protected_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
