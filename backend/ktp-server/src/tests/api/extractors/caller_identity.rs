use crate::tests::{SECRET, create_test_state};
use crate::{ACCOUNT_ID_HEADER, ApiError, CallerIdentity};

use ktp_auth::{Claims, JwtValidator};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

fn token_for(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: now,
        roles: vec![],
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

async fn extract(
    request: Request<Body>,
    validator: Option<JwtValidator>,
) -> Result<CallerIdentity, ApiError> {
    let state = create_test_state(validator).await;
    let (mut parts, _body) = request.into_parts();
    CallerIdentity::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn test_development_mode_reads_account_header() {
    let request = Request::builder()
        .header(ACCOUNT_ID_HEADER, "party-1")
        .body(Body::empty())
        .unwrap();

    let CallerIdentity(caller) = extract(request, None).await.unwrap();

    assert_eq!(caller.account().as_str(), "party-1");
}

#[tokio::test]
async fn test_development_mode_without_header_is_unauthenticated() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let result = extract(request, None).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_development_mode_rejects_malformed_account() {
    let request = Request::builder()
        .header(ACCOUNT_ID_HEADER, "two words")
        .body(Body::empty())
        .unwrap();

    let result = extract(request, None).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_jwt_mode_resolves_subject_from_bearer_token() {
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("party-2")))
        .body(Body::empty())
        .unwrap();

    let CallerIdentity(caller) = extract(request, Some(JwtValidator::with_hs256(SECRET)))
        .await
        .unwrap();

    assert_eq!(caller.account().as_str(), "party-2");
}

#[tokio::test]
async fn test_jwt_mode_ignores_account_header() {
    let request = Request::builder()
        .header(ACCOUNT_ID_HEADER, "deployer")
        .body(Body::empty())
        .unwrap();

    let result = extract(request, Some(JwtValidator::with_hs256(SECRET))).await;

    assert!(matches!(
        result,
        Err(ApiError::Unauthenticated {
            code: "MISSING_AUTH_HEADER",
            ..
        })
    ));
}

#[tokio::test]
async fn test_jwt_mode_rejects_token_signed_with_other_secret() {
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("party-2")))
        .body(Body::empty())
        .unwrap();

    let validator = JwtValidator::with_hs256(b"another-secret-key-at-least-32-bytes");
    let result = extract(request, Some(validator)).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}
