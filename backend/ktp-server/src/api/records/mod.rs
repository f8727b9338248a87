pub mod import_record_request;
pub mod record_dto;
pub mod record_hashes_request;
pub mod record_response;
#[allow(clippy::module_inception)]
pub mod records;
pub mod verify_record_request;
