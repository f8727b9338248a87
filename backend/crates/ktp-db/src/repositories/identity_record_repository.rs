use crate::repositories::timestamp;
use crate::{DbError, error::Result as DbErrorResult};

use ktp_core::{AccountId, IdentityRecord, NationalId, RecordHashes, RecordStatus};

use std::str::FromStr;

const TABLE: &str = "ktp_identity_records";

#[derive(sqlx::FromRow)]
struct IdentityRecordRow {
    owner: String,
    data_hash: String,
    photo_hash: String,
    signature_hash: String,
    national_id: Option<String>,
    status: String,
    verified_by: Option<String>,
    verified_at: Option<i64>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<IdentityRecordRow> for IdentityRecord {
    type Error = DbError;

    fn try_from(row: IdentityRecordRow) -> DbErrorResult<Self> {
        let account = |column: &str, value: String| {
            AccountId::parse(value).map_err(|e| DbError::corrupt(TABLE, format!("{column}: {e}")))
        };

        Ok(IdentityRecord {
            owner: account("owner", row.owner)?,
            hashes: RecordHashes::new(row.data_hash, row.photo_hash, row.signature_hash),
            national_id: row
                .national_id
                .map(|value| {
                    NationalId::parse(value)
                        .map_err(|e| DbError::corrupt(TABLE, format!("national_id: {e}")))
                })
                .transpose()?,
            status: RecordStatus::from_str(&row.status)
                .map_err(|e| DbError::corrupt(TABLE, format!("status: {e}")))?,
            verified_by: row
                .verified_by
                .map(|value| account("verified_by", value))
                .transpose()?,
            verified_at: row
                .verified_at
                .map(|secs| timestamp(TABLE, "verified_at", secs))
                .transpose()?,
            created_at: timestamp(TABLE, "created_at", row.created_at)?,
            updated_at: timestamp(TABLE, "updated_at", row.updated_at)?,
        })
    }
}

pub struct IdentityRecordRepository;

impl IdentityRecordRepository {
    /// Full replacement of the row keyed by `record.owner`.
    pub async fn upsert<'e, E>(executor: E, record: &IdentityRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO ktp_identity_records (
                    owner, data_hash, photo_hash, signature_hash, national_id,
                    status, verified_by, verified_at, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(owner) DO UPDATE SET
                    data_hash = excluded.data_hash,
                    photo_hash = excluded.photo_hash,
                    signature_hash = excluded.signature_hash,
                    national_id = excluded.national_id,
                    status = excluded.status,
                    verified_by = excluded.verified_by,
                    verified_at = excluded.verified_at,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(record.owner.as_str())
        .bind(&record.hashes.data_hash)
        .bind(&record.hashes.photo_hash)
        .bind(&record.hashes.signature_hash)
        .bind(record.national_id.as_ref().map(|nid| nid.as_str()))
        .bind(record.status.as_str())
        .bind(record.verified_by.as_ref().map(|account| account.as_str()))
        .bind(record.verified_at.map(|dt| dt.timestamp()))
        .bind(record.created_at.timestamp())
        .bind(record.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_owner<'e, E>(
        executor: E,
        owner: &AccountId,
    ) -> DbErrorResult<Option<IdentityRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, IdentityRecordRow>(
            r#"
                SELECT owner, data_hash, photo_hash, signature_hash, national_id,
                       status, verified_by, verified_at, created_at, updated_at
                FROM ktp_identity_records
                WHERE owner = ?
            "#,
        )
        .bind(owner.as_str())
        .fetch_optional(executor)
        .await?;

        row.map(IdentityRecord::try_from).transpose()
    }

    pub async fn list<'e, E>(executor: E) -> DbErrorResult<Vec<IdentityRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, IdentityRecordRow>(
            r#"
                SELECT owner, data_hash, photo_hash, signature_hash, national_id,
                       status, verified_by, verified_at, created_at, updated_at
                FROM ktp_identity_records
                ORDER BY owner ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(IdentityRecord::try_from).collect()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ktp_identity_records")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
