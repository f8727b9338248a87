use crate::tests::{account, at, hashes, nik};
use crate::{IdentityRecord, RecordStatus};

use googletest::prelude::*;

#[test]
fn test_identity_record_new() {
    let record = IdentityRecord::new(account("party-1"), hashes("1"), at(1_700_000_000));

    assert_that!(record.owner, eq(&account("party-1")));
    assert_that!(record.hashes, eq(&hashes("1")));
    assert_that!(record.national_id, none());
    assert_that!(record.national_id_str(), eq(""));
    assert_that!(record.status, eq(RecordStatus::Unverified));
    assert!(!record.is_verified());
    assert_that!(record.created_at, eq(record.updated_at));
}

#[test]
fn test_identity_record_imported_is_unverified_with_national_id() {
    let record = IdentityRecord::imported(
        account("party-2"),
        nik("NIK456"),
        hashes("2"),
        at(1_700_000_000),
    );

    assert_that!(record.national_id_str(), eq("NIK456"));
    assert!(!record.is_verified());
    assert_that!(record.verified_by, none());
}

#[test]
fn test_identity_record_verified_sets_attestation() {
    let record = IdentityRecord::new(account("party-1"), hashes("1"), at(1_700_000_000));

    let verified = record.verified(nik("NIK123"), &account("admin"), at(1_700_000_100));

    assert!(verified.is_verified());
    assert_that!(verified.national_id_str(), eq("NIK123"));
    assert_eq!(verified.verified_by, Some(account("admin")));
    assert_eq!(verified.verified_at, Some(at(1_700_000_100)));
    assert_that!(verified.created_at, eq(at(1_700_000_000)));
    assert_that!(verified.updated_at, eq(at(1_700_000_100)));
    assert_that!(verified.hashes, eq(&record.hashes));
}

#[test]
fn test_identity_record_amended_drops_verification_keeps_national_id() {
    let verified = IdentityRecord::new(account("party-1"), hashes("1"), at(1_700_000_000))
        .verified(nik("NIK123"), &account("admin"), at(1_700_000_100));

    let amended = verified.amended(hashes("-updated"), at(1_700_000_200));

    assert!(!amended.is_verified());
    assert_that!(amended.national_id_str(), eq("NIK123"));
    assert_that!(amended.hashes, eq(&hashes("-updated")));
    assert_that!(amended.verified_by, none());
    assert!(amended.verified_at.is_none());
    assert_that!(amended.created_at, eq(at(1_700_000_000)));
}

#[test]
fn test_identity_record_json_flattens_hashes() {
    let record = IdentityRecord::new(account("party-1"), hashes("1"), at(1_700_000_000));

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["data_hash"], "dataHash1");
    assert_eq!(json["photo_hash"], "photoHash1");
    assert_eq!(json["signature_hash"], "signatureHash1");
    assert_eq!(json["status"], "unverified");
    assert!(json["national_id"].is_null());
}
