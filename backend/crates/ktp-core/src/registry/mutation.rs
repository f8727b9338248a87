use crate::{AccountId, IdentityRecord};

use chrono::{DateTime, Utc};

/// The committed effect of an accepted command.
///
/// Mutations are idempotent to apply: granting an existing admin or revoking a
/// non-admin leaves the set unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AdminGranted {
        account: AccountId,
        granted_by: AccountId,
        granted_at: DateTime<Utc>,
    },
    AdminRevoked {
        account: AccountId,
        revoked_by: AccountId,
    },
    /// Full replacement of the record keyed by `record.owner`
    RecordWritten { record: IdentityRecord },
}

impl Mutation {
    pub fn into_record(self) -> Option<IdentityRecord> {
        match self {
            Self::RecordWritten { record } => Some(record),
            _ => None,
        }
    }

    /// Account whose admin membership or record this mutation touches.
    pub fn subject(&self) -> &AccountId {
        match self {
            Self::AdminGranted { account, .. } | Self::AdminRevoked { account, .. } => account,
            Self::RecordWritten { record } => &record.owner,
        }
    }
}
