use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_HASH_LENGTH: usize = 1;
pub const MAX_HASH_LENGTH: usize = 4096;
pub const DEFAULT_MAX_HASH_LENGTH: usize = 256;

pub const MIN_NATIONAL_ID_LENGTH: usize = 1;
pub const MAX_NATIONAL_ID_LENGTH: usize = 256;
pub const DEFAULT_MAX_NATIONAL_ID_LENGTH: usize = 32;

/// Request field limits enforced at the HTTP boundary.
///
/// The registry core accepts any string; these keep stored rows bounded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of each of data/photo/signature hash
    pub max_hash_length: usize,
    pub max_national_id_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_hash_length: DEFAULT_MAX_HASH_LENGTH,
            max_national_id_length: DEFAULT_MAX_NATIONAL_ID_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_hash_length < MIN_HASH_LENGTH || self.max_hash_length > MAX_HASH_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_hash_length must be {}-{}, got {}",
                MIN_HASH_LENGTH, MAX_HASH_LENGTH, self.max_hash_length
            )));
        }

        if self.max_national_id_length < MIN_NATIONAL_ID_LENGTH
            || self.max_national_id_length > MAX_NATIONAL_ID_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_national_id_length must be {}-{}, got {}",
                MIN_NATIONAL_ID_LENGTH, MAX_NATIONAL_ID_LENGTH, self.max_national_id_length
            )));
        }

        Ok(())
    }
}
