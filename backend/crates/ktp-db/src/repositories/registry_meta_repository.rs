use crate::repositories::timestamp;
use crate::{DbError, RegistryMeta, error::Result as DbErrorResult};

use ktp_core::AccountId;

const TABLE: &str = "ktp_registry_meta";

pub struct RegistryMetaRepository;

impl RegistryMetaRepository {
    pub async fn find<'e, E>(executor: E) -> DbErrorResult<Option<RegistryMeta>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<(String, i64)> = sqlx::query_as(
            "SELECT initialized_by, initialized_at FROM ktp_registry_meta WHERE id = 1",
        )
        .fetch_optional(executor)
        .await?;

        row.map(|(initialized_by, initialized_at)| -> DbErrorResult<RegistryMeta> {
            Ok(RegistryMeta {
                initialized_by: AccountId::parse(initialized_by).map_err(|e| {
                    DbError::corrupt(TABLE, format!("invalid initialized_by: {e}"))
                })?,
                initialized_at: timestamp(TABLE, "initialized_at", initialized_at)?,
            })
        })
        .transpose()
    }

    /// Fails with a constraint error if the registry was already initialized.
    pub async fn insert<'e, E>(executor: E, meta: &RegistryMeta) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO ktp_registry_meta (id, initialized_by, initialized_at)
                VALUES (1, ?, ?)
            "#,
        )
        .bind(meta.initialized_by.as_str())
        .bind(meta.initialized_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }
}
