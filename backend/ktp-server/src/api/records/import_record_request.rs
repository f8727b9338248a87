use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImportRecordRequest {
    /// Account the record is keyed by; defaults to the caller under self-service import
    #[serde(default)]
    pub subject: Option<String>,

    pub national_id: String,
    pub data_hash: String,
    pub photo_hash: String,
    pub signature_hash: String,
}
