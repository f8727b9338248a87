use crate::{AuthError, JwtValidator, Result as AuthErrorResult};

use ktp_core::Caller;

use std::panic::Location;

use error_location::ErrorLocation;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Strip the `Bearer ` scheme from an `Authorization` header value.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Resolve the caller from an `Authorization: Bearer <jwt>` header value.
#[track_caller]
pub fn resolve_bearer(header: Option<&str>, validator: &JwtValidator) -> AuthErrorResult<Caller> {
    let token = bearer_token(header)?;
    validator.validate(token)?.caller()
}
