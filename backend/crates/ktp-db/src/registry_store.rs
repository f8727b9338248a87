//! Serialized, persistent registry executor.
//!
//! Every command runs under one async mutex in three steps: plan against the
//! in-memory state, write the resulting mutation in a single SQLite
//! transaction, then apply it in memory. A rejected plan or a failed write
//! leaves both copies untouched, and the mutex gives all calls one total order.
//! The three steps run on a detached task so a cancelled caller cannot leave
//! a committed write unapplied.

use crate::{
    AdminRepository, DbError, IdentityRecordRepository, RegistryMetrics,
    error::Result as DbErrorResult,
};

use ktp_core::{
    AccountId, Caller, Command, ErrorLocation, IdentityRecord, Mutation, NationalId,
    RecordHashes, Registry, RegistryPolicy,
};

use std::panic::Location;
use std::sync::Arc;
use std::time::Instant;

use chrono::{SubsecRound, Utc};
use log::{error, info, warn};
use sqlx::SqlitePool;
use tokio::sync::Mutex;

pub struct RegistryStore {
    pool: SqlitePool,
    state: Arc<Mutex<Registry>>,
    metrics: RegistryMetrics,
}

impl RegistryStore {
    pub fn new(pool: SqlitePool, registry: Registry) -> Self {
        Self {
            pool,
            state: Arc::new(Mutex::new(registry)),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Bootstrap or load the registry held in `pool`.
    pub async fn open(
        pool: SqlitePool,
        initializer: Option<&AccountId>,
        policy: RegistryPolicy,
    ) -> DbErrorResult<Self> {
        let registry = crate::bootstrap(&pool, initializer, policy).await?;
        Ok(Self::new(pool, registry))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn policy(&self) -> RegistryPolicy {
        self.state.lock().await.policy()
    }

    pub async fn is_admin(&self, identity: &AccountId) -> bool {
        self.state.lock().await.is_admin(identity)
    }

    pub async fn admins(&self) -> Vec<AccountId> {
        self.state.lock().await.admins()
    }

    pub async fn get_record(&self, identity: &AccountId) -> DbErrorResult<IdentityRecord> {
        let state = self.state.lock().await;
        Ok(state.get_record(identity)?.clone())
    }

    /// Plan, persist and apply `command` on behalf of `caller`.
    ///
    /// Runs on a spawned task: dropping the returned future does not stop a
    /// write that has started, so a commit is always followed by its apply.
    pub async fn execute(&self, caller: &Caller, command: Command) -> DbErrorResult<Mutation> {
        let pool = self.pool.clone();
        let state = Arc::clone(&self.state);
        let metrics = self.metrics.clone();
        let caller = caller.clone();

        tokio::spawn(async move {
            let mut state = state.lock().await;
            commit(&pool, &mut state, &metrics, &caller, command).await
        })
        .await
        .map_err(|e| DbError::Task {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
    }

    pub async fn add_admin(&self, caller: &Caller, account: AccountId) -> DbErrorResult<()> {
        self.execute(caller, Command::AddAdmin { account }).await?;
        Ok(())
    }

    pub async fn remove_admin(&self, caller: &Caller, account: AccountId) -> DbErrorResult<()> {
        self.execute(caller, Command::RemoveAdmin { account })
            .await?;
        Ok(())
    }

    pub async fn create_record(
        &self,
        caller: &Caller,
        hashes: RecordHashes,
    ) -> DbErrorResult<IdentityRecord> {
        self.write_record(caller, Command::CreateRecord { hashes })
            .await
    }

    pub async fn update_record(
        &self,
        caller: &Caller,
        hashes: RecordHashes,
    ) -> DbErrorResult<IdentityRecord> {
        self.write_record(caller, Command::UpdateRecord { hashes })
            .await
    }

    pub async fn verify_record(
        &self,
        caller: &Caller,
        subject: AccountId,
        national_id: NationalId,
    ) -> DbErrorResult<IdentityRecord> {
        self.write_record(
            caller,
            Command::VerifyRecord {
                subject,
                national_id,
            },
        )
        .await
    }

    pub async fn import_record(
        &self,
        caller: &Caller,
        subject: Option<AccountId>,
        national_id: NationalId,
        hashes: RecordHashes,
    ) -> DbErrorResult<IdentityRecord> {
        self.write_record(
            caller,
            Command::ImportRecord {
                subject,
                national_id,
                hashes,
            },
        )
        .await
    }

    async fn write_record(&self, caller: &Caller, command: Command) -> DbErrorResult<IdentityRecord> {
        let operation = command.name();
        self.execute(caller, command)
            .await?
            .into_record()
            .ok_or_else(|| DbError::UnexpectedMutation {
                operation,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Plan, persist, apply. The caller holds the state lock for the whole call.
async fn commit(
    pool: &SqlitePool,
    state: &mut Registry,
    metrics: &RegistryMetrics,
    caller: &Caller,
    command: Command,
) -> DbErrorResult<Mutation> {
    let operation = command.name();
    let started = Instant::now();

    let mutation = match state.plan(caller, command, Utc::now().trunc_subsecs(0)) {
        Ok(mutation) => mutation,
        Err(e) => {
            warn!("{} by {} rejected: {}", operation, caller, e);
            metrics.rejected(operation);
            return Err(e.into());
        }
    };

    if let Err(e) = persist(pool, &mutation).await {
        error!("{} by {} failed to persist: {}", operation, caller, e);
        metrics.failed(operation);
        return Err(e);
    }

    state.apply(&mutation);

    info!("{} by {} committed for {}", operation, caller, mutation.subject());
    metrics.committed(operation);
    metrics.latency(operation, started.elapsed());

    Ok(mutation)
}

async fn persist(pool: &SqlitePool, mutation: &Mutation) -> DbErrorResult<()> {
    let mut tx = pool.begin().await?;

    match mutation {
        Mutation::AdminGranted {
            account,
            granted_by,
            granted_at,
        } => AdminRepository::grant(&mut *tx, account, granted_by, *granted_at).await?,
        Mutation::AdminRevoked { account, .. } => {
            AdminRepository::revoke(&mut *tx, account).await?;
        }
        Mutation::RecordWritten { record } => {
            IdentityRecordRepository::upsert(&mut *tx, record).await?
        }
    }

    tx.commit().await?;
    Ok(())
}
