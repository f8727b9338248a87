//! Identity record REST API handlers

use crate::{
    ApiResult, AppState, CallerIdentity, FieldLimits, ImportRecordRequest, RecordHashesRequest,
    RecordResponse, VerifyRecordRequest,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/records
///
/// Create or overwrite the caller's record. Any previous verification and
/// national id are discarded.
pub async fn create_record(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<RecordHashesRequest>,
) -> ApiResult<(StatusCode, Json<RecordResponse>)> {
    let hashes = FieldLimits::new(&state.validation).hashes(
        req.data_hash,
        req.photo_hash,
        req.signature_hash,
    )?;

    let record = state.store.create_record(&caller, hashes).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse {
            record: record.into(),
        }),
    ))
}

/// PUT /api/v1/records
///
/// Replace the caller's hashes; the record drops back to unverified.
pub async fn update_record(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<RecordHashesRequest>,
) -> ApiResult<Json<RecordResponse>> {
    let hashes = FieldLimits::new(&state.validation).hashes(
        req.data_hash,
        req.photo_hash,
        req.signature_hash,
    )?;

    let record = state.store.update_record(&caller, hashes).await?;

    Ok(Json(RecordResponse {
        record: record.into(),
    }))
}

/// GET /api/v1/records/{account}
///
/// Public read; no caller identity required.
pub async fn get_record(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> ApiResult<Json<RecordResponse>> {
    let account = FieldLimits::new(&state.validation).account("account", &account)?;

    let record = state.store.get_record(&account).await?;

    Ok(Json(RecordResponse {
        record: record.into(),
    }))
}

/// POST /api/v1/records/{account}/verify
///
/// Administrator attests the record and assigns its national id.
pub async fn verify_record(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(account): Path<String>,
    Json(req): Json<VerifyRecordRequest>,
) -> ApiResult<Json<RecordResponse>> {
    let limits = FieldLimits::new(&state.validation);
    let subject = limits.account("account", &account)?;
    let national_id = limits.national_id(req.national_id)?;

    let record = state
        .store
        .verify_record(&caller, subject, national_id)
        .await?;

    Ok(Json(RecordResponse {
        record: record.into(),
    }))
}

/// POST /api/v1/records/import
///
/// Bulk migration path: stores a complete, unverified record.
pub async fn import_record(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Json(req): Json<ImportRecordRequest>,
) -> ApiResult<(StatusCode, Json<RecordResponse>)> {
    let limits = FieldLimits::new(&state.validation);
    let subject = req
        .subject
        .as_deref()
        .map(|s| limits.account("subject", s))
        .transpose()?;
    let national_id = limits.national_id(req.national_id)?;
    let hashes = limits.hashes(req.data_hash, req.photo_hash, req.signature_hash)?;

    let record = state
        .store
        .import_record(&caller, subject, national_id, hashes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordResponse {
            record: record.into(),
        }),
    ))
}
