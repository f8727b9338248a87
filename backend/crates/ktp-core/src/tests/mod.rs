mod registry;

use crate::{AccountId, Caller, NationalId, RecordHashes};

use chrono::{DateTime, Utc};

pub(crate) fn account(value: &str) -> AccountId {
    AccountId::parse(value).unwrap()
}

pub(crate) fn caller(value: &str) -> Caller {
    Caller::new(account(value))
}

pub(crate) fn nik(value: &str) -> NationalId {
    NationalId::parse(value).unwrap()
}

pub(crate) fn hashes(suffix: &str) -> RecordHashes {
    RecordHashes::new(
        format!("dataHash{suffix}"),
        format!("photoHash{suffix}"),
        format!("signatureHash{suffix}"),
    )
}

pub(crate) fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}
