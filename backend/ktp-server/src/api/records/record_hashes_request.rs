use serde::Deserialize;

/// Body of record create and update: the caller's own record
#[derive(Debug, Deserialize)]
pub struct RecordHashesRequest {
    pub data_hash: String,
    pub photo_hash: String,
    pub signature_hash: String,
}
