use crate::{
    AdminRepository, DbError, IdentityRecordRepository, RegistryMeta, RegistryMetaRepository,
    error::Result as DbErrorResult,
};

use ktp_core::{AccountId, ErrorLocation, Registry, RegistryPolicy};

use std::panic::Location;

use chrono::{SubsecRound, Utc};
use log::{info, warn};
use sqlx::SqlitePool;

/// Load the registry from `pool`, creating it first if the database is fresh.
///
/// A fresh database records `initializer` as the sole administrator together
/// with the meta row, in one transaction. An initialized database ignores
/// `initializer`; a mismatch with the recorded deployer is only logged.
pub async fn bootstrap(
    pool: &SqlitePool,
    initializer: Option<&AccountId>,
    policy: RegistryPolicy,
) -> DbErrorResult<Registry> {
    match RegistryMetaRepository::find(pool).await? {
        None => create(pool, initializer, policy).await,
        Some(meta) => load(pool, initializer, meta, policy).await,
    }
}

async fn create(
    pool: &SqlitePool,
    initializer: Option<&AccountId>,
    policy: RegistryPolicy,
) -> DbErrorResult<Registry> {
    let initializer = initializer.ok_or_else(|| DbError::Initialization {
        message: "registry is not initialized and no initial administrator is configured"
            .to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let meta = RegistryMeta {
        initialized_by: initializer.clone(),
        initialized_at: Utc::now().trunc_subsecs(0),
    };

    let mut tx = pool.begin().await?;
    RegistryMetaRepository::insert(&mut *tx, &meta).await?;
    AdminRepository::grant(&mut *tx, initializer, initializer, meta.initialized_at).await?;
    tx.commit().await?;

    info!("Registry initialized; {} is the initial administrator", initializer);

    Ok(Registry::new(initializer.clone(), policy))
}

async fn load(
    pool: &SqlitePool,
    initializer: Option<&AccountId>,
    meta: RegistryMeta,
    policy: RegistryPolicy,
) -> DbErrorResult<Registry> {
    if let Some(configured) = initializer
        && configured != &meta.initialized_by
    {
        warn!(
            "Configured initial administrator {} ignored; registry was initialized by {} at {}",
            configured, meta.initialized_by, meta.initialized_at
        );
    }

    let admins = AdminRepository::list(pool).await?;
    let records = IdentityRecordRepository::list(pool).await?;
    let (admin_count, record_count) = (admins.len(), records.len());

    let registry = Registry::restore(admins, records, policy).map_err(|e| {
        DbError::Initialization {
            message: format!("persisted registry state is invalid: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    info!(
        "Registry loaded: {} administrator(s), {} record(s)",
        admin_count, record_count
    );

    Ok(registry)
}
