//! Record map and the per-record lifecycle:
//!
//! ```text
//! Absent     --create/import--> Unverified
//! Unverified --update---------> Unverified
//! Unverified --verify---------> Verified
//! Verified   --update---------> Unverified
//! Verified   --verify---------> Verified
//! ```
//!
//! The `plan_*` functions compute the record a command would write without
//! storing it.

use crate::{
    AccountId, AdminRegistry, Caller, CoreError, IdentityRecord, ImportPolicy, NationalId,
    RecordHashes, Result as CoreErrorResult,
};

use std::collections::HashMap;
use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[derive(Debug, Clone, Default)]
pub struct RecordRegistry {
    records: HashMap<AccountId, IdentityRecord>,
}

impl RecordRegistry {
    pub fn from_records(records: impl IntoIterator<Item = IdentityRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.owner.clone(), record))
                .collect(),
        }
    }

    pub fn find(&self, identity: &AccountId) -> Option<&IdentityRecord> {
        self.records.get(identity)
    }

    #[track_caller]
    pub fn get_record(&self, identity: &AccountId) -> CoreErrorResult<&IdentityRecord> {
        self.records.get(identity).ok_or_else(|| CoreError::NotFound {
            identity: identity.clone(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `createRecord`: always accepted, overwrites whatever the caller had.
    pub fn plan_create(
        &self,
        caller: &Caller,
        hashes: RecordHashes,
        now: DateTime<Utc>,
    ) -> IdentityRecord {
        IdentityRecord::new(caller.account().clone(), hashes, now)
    }

    /// `updateRecord`: requires the caller's record to exist.
    #[track_caller]
    pub fn plan_update(
        &self,
        caller: &Caller,
        hashes: RecordHashes,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<IdentityRecord> {
        let current = self.get_record(caller.account())?;
        Ok(current.amended(hashes, now))
    }

    /// `verifyRecord`: administrator only, subject record must exist.
    #[track_caller]
    pub fn plan_verify(
        &self,
        admins: &AdminRegistry,
        caller: &Caller,
        subject: &AccountId,
        national_id: NationalId,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<IdentityRecord> {
        admins.require_admin(caller, "verify_record")?;
        let current = self.get_record(subject)?;
        Ok(current.verified(national_id, caller.account(), now))
    }

    /// `importRecord`: writes all four fields, never verified.
    #[allow(clippy::too_many_arguments)]
    #[track_caller]
    pub fn plan_import(
        &self,
        admins: &AdminRegistry,
        policy: ImportPolicy,
        caller: &Caller,
        subject: Option<AccountId>,
        national_id: NationalId,
        hashes: RecordHashes,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<IdentityRecord> {
        let owner = match policy {
            ImportPolicy::AdminGated => {
                admins.require_admin(caller, "import_record")?;
                subject.ok_or_else(|| CoreError::Validation {
                    message: "subject is required for an administrator import".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?
            }
            ImportPolicy::SelfService => match subject {
                Some(subject) if &subject != caller.account() => {
                    return Err(CoreError::Unauthorized {
                        caller: caller.account().clone(),
                        operation: "import_record",
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                _ => caller.account().clone(),
            },
        };

        Ok(IdentityRecord::imported(owner, national_id, hashes, now))
    }

    pub(crate) fn store(&mut self, record: IdentityRecord) {
        self.records.insert(record.owner.clone(), record);
    }
}
