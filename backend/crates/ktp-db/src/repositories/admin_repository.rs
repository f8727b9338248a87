use crate::{DbError, error::Result as DbErrorResult};

use ktp_core::AccountId;

use chrono::{DateTime, Utc};

const TABLE: &str = "ktp_admins";

pub struct AdminRepository;

impl AdminRepository {
    /// Idempotent: granting an existing admin keeps the original grant row.
    pub async fn grant<'e, E>(
        executor: E,
        account: &AccountId,
        granted_by: &AccountId,
        granted_at: DateTime<Utc>,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO ktp_admins (account_id, granted_by, granted_at)
                VALUES (?, ?, ?)
                ON CONFLICT(account_id) DO NOTHING
            "#,
        )
        .bind(account.as_str())
        .bind(granted_by.as_str())
        .bind(granted_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Returns the number of rows removed (0 when `account` was not an admin).
    pub async fn revoke<'e, E>(executor: E, account: &AccountId) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM ktp_admins WHERE account_id = ?")
            .bind(account.as_str())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn exists<'e, E>(executor: E, account: &AccountId) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM ktp_admins WHERE account_id = ?")
            .bind(account.as_str())
            .fetch_optional(executor)
            .await?;

        Ok(found.is_some())
    }

    pub async fn list<'e, E>(executor: E) -> DbErrorResult<Vec<AccountId>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT account_id FROM ktp_admins ORDER BY account_id ASC")
                .fetch_all(executor)
                .await?;

        rows.into_iter()
            .map(|value| {
                AccountId::parse(value)
                    .map_err(|e| DbError::corrupt(TABLE, format!("invalid account_id: {e}")))
            })
            .collect()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ktp_admins")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
