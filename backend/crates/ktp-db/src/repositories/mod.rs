pub mod admin_repository;
pub mod identity_record_repository;
pub mod registry_meta_repository;

use crate::DbError;

use chrono::{DateTime, Utc};

pub(crate) fn timestamp(
    table: &'static str,
    column: &str,
    secs: i64,
) -> Result<DateTime<Utc>, DbError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::corrupt(table, format!("{column} out of range: {secs}")))
}
