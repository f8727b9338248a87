use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyRecordRequest {
    /// National id (NIK) the administrator attests
    pub national_id: String,
}
