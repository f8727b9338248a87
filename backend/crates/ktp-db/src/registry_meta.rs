use ktp_core::AccountId;

use chrono::{DateTime, Utc};

/// Who created the registry and when. Present once bootstrap has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMeta {
    pub initialized_by: AccountId,
    pub initialized_at: DateTime<Utc>,
}
