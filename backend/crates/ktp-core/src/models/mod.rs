pub mod account_id;
pub mod caller;
pub mod identity_record;
pub mod national_id;
pub mod record_hashes;
pub mod record_status;
