//! Identity record entity - one KTP record per account.

use crate::{AccountId, NationalId, RecordHashes, RecordStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The stored bundle of artifact hashes, national id and verification state
/// for one party.
///
/// Records are never deleted. Transitions produce a new value rather than
/// mutating in place so a rejected command cannot leave half-written fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Account the record is filed under; equals the registry key
    pub owner: AccountId,
    #[serde(flatten)]
    pub hashes: RecordHashes,
    pub national_id: Option<NationalId>,
    pub status: RecordStatus,
    /// Administrator whose attestation is currently in force
    pub verified_by: Option<AccountId>,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityRecord {
    /// Fresh record as written by `createRecord`: no national id, unverified.
    pub fn new(owner: AccountId, hashes: RecordHashes, now: DateTime<Utc>) -> Self {
        Self {
            owner,
            hashes,
            national_id: None,
            status: RecordStatus::Unverified,
            verified_by: None,
            verified_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record with a pre-assigned national id, as written by `importRecord`.
    /// Never verified.
    pub fn imported(
        owner: AccountId,
        national_id: NationalId,
        hashes: RecordHashes,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            national_id: Some(national_id),
            ..Self::new(owner, hashes, now)
        }
    }

    /// Replace the hashes. Verification is always dropped; the national id
    /// survives.
    pub fn amended(&self, hashes: RecordHashes, now: DateTime<Utc>) -> Self {
        Self {
            owner: self.owner.clone(),
            hashes,
            national_id: self.national_id.clone(),
            status: RecordStatus::Unverified,
            verified_by: None,
            verified_at: None,
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Assign the national id and enter the verified state. Re-verifying a
    /// verified record re-assigns the id.
    pub fn verified(
        &self,
        national_id: NationalId,
        verifier: &AccountId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            owner: self.owner.clone(),
            hashes: self.hashes.clone(),
            national_id: Some(national_id),
            status: RecordStatus::Verified,
            verified_by: Some(verifier.clone()),
            verified_at: Some(now),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.status == RecordStatus::Verified
    }

    /// National id as a plain string, empty while unassigned.
    pub fn national_id_str(&self) -> &str {
        self.national_id.as_ref().map_or("", NationalId::as_str)
    }
}
