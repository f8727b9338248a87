
use crate::Claims;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

pub(crate) fn claims_for(sub: &str) -> Claims {
    Claims {
        sub: sub.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        roles: vec![],
    }
}
