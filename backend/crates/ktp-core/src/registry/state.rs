use crate::{
    AccountId, AdminRegistry, Caller, Command, CoreError, IdentityRecord, Mutation, NationalId,
    RecordHashes, RecordRegistry, RegistryPolicy, Result as CoreErrorResult,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Explicitly constructed registry state: the admin set and the record map.
///
/// Not synchronised. A host that admits concurrent calls must serialise them
/// (see `ktp_db::RegistryStore`).
#[derive(Debug, Clone)]
pub struct Registry {
    admins: AdminRegistry,
    records: RecordRegistry,
    policy: RegistryPolicy,
}

impl Registry {
    /// New registry; `initializer` becomes the sole administrator.
    pub fn new(initializer: AccountId, policy: RegistryPolicy) -> Self {
        Self {
            admins: AdminRegistry::new(initializer),
            records: RecordRegistry::default(),
            policy,
        }
    }

    /// Rebuild from persisted state.
    #[track_caller]
    pub fn restore(
        admins: impl IntoIterator<Item = AccountId>,
        records: impl IntoIterator<Item = IdentityRecord>,
        policy: RegistryPolicy,
    ) -> CoreErrorResult<Self> {
        let admins = AdminRegistry::from_members(admins);

        if policy.protect_last_admin && admins.is_empty() {
            return Err(CoreError::Validation {
                message: "restored administrator set is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            admins,
            records: RecordRegistry::from_records(records),
            policy,
        })
    }

    pub fn policy(&self) -> RegistryPolicy {
        self.policy
    }

    pub fn record_registry(&self) -> &RecordRegistry {
        &self.records
    }

    pub fn is_admin(&self, identity: &AccountId) -> bool {
        self.admins.is_admin(identity)
    }

    pub fn admins(&self) -> Vec<AccountId> {
        self.admins.members().cloned().collect()
    }

    pub fn admin_count(&self) -> usize {
        self.admins.len()
    }

    #[track_caller]
    pub fn get_record(&self, identity: &AccountId) -> CoreErrorResult<&IdentityRecord> {
        self.records.get_record(identity)
    }

    /// Decide the outcome of `command` without changing any state.
    #[track_caller]
    pub fn plan(
        &self,
        caller: &Caller,
        command: Command,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<Mutation> {
        match command {
            Command::AddAdmin { account } => {
                self.admins.check_add(caller)?;
                Ok(Mutation::AdminGranted {
                    account,
                    granted_by: caller.account().clone(),
                    granted_at: now,
                })
            }
            Command::RemoveAdmin { account } => {
                self.admins
                    .check_remove(caller, &account, self.policy.protect_last_admin)?;
                Ok(Mutation::AdminRevoked {
                    account,
                    revoked_by: caller.account().clone(),
                })
            }
            Command::CreateRecord { hashes } => Ok(Mutation::RecordWritten {
                record: self.records.plan_create(caller, hashes, now),
            }),
            Command::UpdateRecord { hashes } => Ok(Mutation::RecordWritten {
                record: self.records.plan_update(caller, hashes, now)?,
            }),
            Command::VerifyRecord {
                subject,
                national_id,
            } => Ok(Mutation::RecordWritten {
                record: self
                    .records
                    .plan_verify(&self.admins, caller, &subject, national_id, now)?,
            }),
            Command::ImportRecord {
                subject,
                national_id,
                hashes,
            } => Ok(Mutation::RecordWritten {
                record: self.records.plan_import(
                    &self.admins,
                    self.policy.import,
                    caller,
                    subject,
                    national_id,
                    hashes,
                    now,
                )?,
            }),
        }
    }

    /// Commit a planned mutation.
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::AdminGranted { account, .. } => self.admins.insert(account.clone()),
            Mutation::AdminRevoked { account, .. } => self.admins.remove(account),
            Mutation::RecordWritten { record } => self.records.store(record.clone()),
        }
    }

    /// Plan and apply in one step.
    #[track_caller]
    pub fn execute(&mut self, caller: &Caller, command: Command) -> CoreErrorResult<Mutation> {
        let mutation = self.plan(caller, command, Utc::now())?;
        self.apply(&mutation);
        Ok(mutation)
    }

    #[track_caller]
    pub fn add_admin(&mut self, caller: &Caller, account: AccountId) -> CoreErrorResult<()> {
        self.execute(caller, Command::AddAdmin { account })?;
        Ok(())
    }

    #[track_caller]
    pub fn remove_admin(&mut self, caller: &Caller, account: AccountId) -> CoreErrorResult<()> {
        self.execute(caller, Command::RemoveAdmin { account })?;
        Ok(())
    }

    pub fn create_record(&mut self, caller: &Caller, hashes: RecordHashes) -> IdentityRecord {
        let record = self.records.plan_create(caller, hashes, Utc::now());
        self.records.store(record.clone());
        record
    }

    #[track_caller]
    pub fn update_record(
        &mut self,
        caller: &Caller,
        hashes: RecordHashes,
    ) -> CoreErrorResult<IdentityRecord> {
        let record = self.records.plan_update(caller, hashes, Utc::now())?;
        self.records.store(record.clone());
        Ok(record)
    }

    #[track_caller]
    pub fn verify_record(
        &mut self,
        caller: &Caller,
        subject: &AccountId,
        national_id: NationalId,
    ) -> CoreErrorResult<IdentityRecord> {
        let record =
            self.records
                .plan_verify(&self.admins, caller, subject, national_id, Utc::now())?;
        self.records.store(record.clone());
        Ok(record)
    }

    #[track_caller]
    pub fn import_record(
        &mut self,
        caller: &Caller,
        subject: Option<AccountId>,
        national_id: NationalId,
        hashes: RecordHashes,
    ) -> CoreErrorResult<IdentityRecord> {
        let record = self.records.plan_import(
            &self.admins,
            self.policy.import,
            caller,
            subject,
            national_id,
            hashes,
            Utc::now(),
        )?;
        self.records.store(record.clone());
        Ok(record)
    }
}
