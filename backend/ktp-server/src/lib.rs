pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod maintenance;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    admins::{
        admin_list_response::AdminListResponse,
        admin_status_response::AdminStatusResponse,
        admins::{add_admin, get_admin, list_admins, remove_admin},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_identity::{ACCOUNT_ID_HEADER, CallerIdentity},
    field_limits::FieldLimits,
    records::{
        import_record_request::ImportRecordRequest,
        record_dto::RecordDto,
        record_hashes_request::RecordHashesRequest,
        record_response::RecordResponse,
        records::{create_record, get_record, import_record, update_record, verify_record},
        verify_record_request::VerifyRecordRequest,
    },
};
pub use routes::build_router;
pub use state::AppState;
