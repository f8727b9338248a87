//! Administrator REST API handlers
//!
//! Membership reads are open to anyone; changes require the caller to be an
//! administrator.

use crate::{
    AdminListResponse, AdminStatusResponse, ApiResult, AppState, CallerIdentity, FieldLimits,
};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/admins
pub async fn list_admins(
    State(state): State<AppState>,
) -> ApiResult<Json<AdminListResponse>> {
    let admins = state.store.admins().await;

    Ok(Json(AdminListResponse {
        admins: admins.into_iter().map(|a| a.to_string()).collect(),
    }))
}

/// GET /api/v1/admins/{account}
pub async fn get_admin(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> ApiResult<Json<AdminStatusResponse>> {
    let account = FieldLimits::new(&state.validation).account("account", &account)?;
    let is_admin = state.store.is_admin(&account).await;

    Ok(Json(AdminStatusResponse {
        account: account.to_string(),
        is_admin,
    }))
}

/// PUT /api/v1/admins/{account}
///
/// Idempotent grant.
pub async fn add_admin(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(account): Path<String>,
) -> ApiResult<Json<AdminStatusResponse>> {
    let account = FieldLimits::new(&state.validation).account("account", &account)?;

    state.store.add_admin(&caller, account.clone()).await?;

    Ok(Json(AdminStatusResponse {
        account: account.to_string(),
        is_admin: true,
    }))
}

/// DELETE /api/v1/admins/{account}
///
/// Idempotent revoke. Removing the last administrator is refused with 409.
pub async fn remove_admin(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(account): Path<String>,
) -> ApiResult<Json<AdminStatusResponse>> {
    let account = FieldLimits::new(&state.validation).account("account", &account)?;

    state.store.remove_admin(&caller, account.clone()).await?;

    Ok(Json(AdminStatusResponse {
        account: account.to_string(),
        is_admin: false,
    }))
}
