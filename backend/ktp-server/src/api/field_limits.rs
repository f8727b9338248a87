use crate::{ApiError, ApiResult};

use ktp_config::ValidationConfig;
use ktp_core::{AccountId, NationalId, RecordHashes};

/// Boundary checks applied to request bodies and path segments before they
/// reach the registry.
#[derive(Debug, Clone, Copy)]
pub struct FieldLimits<'a> {
    config: &'a ValidationConfig,
}

impl<'a> FieldLimits<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    #[track_caller]
    pub fn hash(&self, field: &'static str, value: &str) -> ApiResult<()> {
        let len = value.chars().count();
        if len > self.config.max_hash_length {
            return Err(ApiError::validation(
                format!(
                    "{} must be at most {} characters, got {}",
                    field, self.config.max_hash_length, len
                ),
                field,
            ));
        }
        Ok(())
    }

    /// Hashes are opaque; only their length is bounded.
    #[track_caller]
    pub fn hashes(
        &self,
        data_hash: String,
        photo_hash: String,
        signature_hash: String,
    ) -> ApiResult<RecordHashes> {
        self.hash("data_hash", &data_hash)?;
        self.hash("photo_hash", &photo_hash)?;
        self.hash("signature_hash", &signature_hash)?;
        Ok(RecordHashes::new(data_hash, photo_hash, signature_hash))
    }

    #[track_caller]
    pub fn national_id(&self, value: String) -> ApiResult<NationalId> {
        let len = value.chars().count();
        if len > self.config.max_national_id_length {
            return Err(ApiError::validation(
                format!(
                    "national_id must be at most {} characters, got {}",
                    self.config.max_national_id_length, len
                ),
                "national_id",
            ));
        }

        NationalId::parse(value).map_err(|e| match e {
            ktp_core::CoreError::Validation { message, .. } => {
                ApiError::validation(message, "national_id")
            }
            other => ApiError::from(other),
        })
    }

    #[track_caller]
    pub fn account(&self, field: &'static str, value: &str) -> ApiResult<AccountId> {
        AccountId::parse(value).map_err(|e| match e {
            ktp_core::CoreError::InvalidAccountId { reason, .. } => {
                ApiError::validation(format!("{} {}", field, reason), field)
            }
            other => ApiError::from(other),
        })
    }
}
