//! Axum extractor resolving the authenticated caller

use crate::{ApiError, AppState};

use ktp_core::{AccountId, Caller};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Development-mode identity header, honoured only while JWT auth is disabled
pub const ACCOUNT_ID_HEADER: &str = "X-Account-Id";

/// The caller a registry command runs on behalf of.
///
/// With a JWT validator configured the identity is the token's `sub` claim;
/// otherwise it is read from `X-Account-Id`.
pub struct CallerIdentity(pub Caller);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            if let Some(validator) = state.jwt_validator.as_deref() {
                let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
                let caller = ktp_auth::resolve_bearer(header, validator)?;
                log::debug!("Authenticated caller {} from bearer token", caller);
                return Ok(CallerIdentity(caller));
            }

            let Some(header_value) = headers.get(ACCOUNT_ID_HEADER) else {
                return Err(ApiError::unauthenticated(format!(
                    "Missing {} header",
                    ACCOUNT_ID_HEADER
                )));
            };

            let raw = header_value.to_str().map_err(|_| {
                ApiError::unauthenticated(format!("{} header is not valid UTF-8", ACCOUNT_ID_HEADER))
            })?;

            match AccountId::parse(raw) {
                Ok(account) => {
                    log::debug!("Using caller from {} header: {}", ACCOUNT_ID_HEADER, account);
                    Ok(CallerIdentity(Caller::new(account)))
                }
                Err(_) => {
                    log::warn!("Invalid account in {} header: {:?}", ACCOUNT_ID_HEADER, raw);
                    Err(ApiError::unauthenticated(format!(
                        "Invalid {} header",
                        ACCOUNT_ID_HEADER
                    )))
                }
            }
        }
    }
}
