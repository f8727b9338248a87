use ktp_core::IdentityRecord;

use serde::Serialize;

/// Identity record DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct RecordDto {
    pub account: String,
    pub data_hash: String,
    pub photo_hash: String,
    pub signature_hash: String,
    /// Empty string while no national id is assigned
    pub national_id: String,
    pub verified: bool,
    pub status: String,
    pub verified_by: Option<String>,
    pub verified_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<IdentityRecord> for RecordDto {
    fn from(r: IdentityRecord) -> Self {
        Self {
            national_id: r.national_id_str().to_string(),
            verified: r.is_verified(),
            status: r.status.to_string(),
            account: r.owner.to_string(),
            data_hash: r.hashes.data_hash,
            photo_hash: r.hashes.photo_hash,
            signature_hash: r.hashes.signature_hash,
            verified_by: r.verified_by.map(|a| a.to_string()),
            verified_at: r.verified_at.map(|t| t.timestamp()),
            created_at: r.created_at.timestamp(),
            updated_at: r.updated_at.timestamp(),
        }
    }
}
