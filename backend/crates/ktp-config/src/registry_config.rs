use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROTECT_LAST_ADMIN};

use ktp_core::{AccountId, ImportPolicy, RegistryPolicy};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Sole administrator written when the database is fresh; ignored afterwards
    pub initial_admin: Option<String>,
    pub import_policy: ImportPolicy,
    pub protect_last_admin: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_admin: None,
            import_policy: ImportPolicy::default(),
            protect_last_admin: DEFAULT_PROTECT_LAST_ADMIN,
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.initial_admin().map(|_| ())
    }

    pub fn initial_admin(&self) -> ConfigErrorResult<Option<AccountId>> {
        self.initial_admin
            .as_deref()
            .map(|value| {
                AccountId::parse(value).map_err(|e| {
                    ConfigError::registry(format!("registry.initial_admin is invalid: {e}"))
                })
            })
            .transpose()
    }

    pub fn policy(&self) -> RegistryPolicy {
        RegistryPolicy {
            import: self.import_policy,
            protect_last_admin: self.protect_last_admin,
        }
    }
}
