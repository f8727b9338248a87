use crate::tests::{account, at, caller, hashes, nik};
use crate::{AdminRegistry, CoreError, IdentityRecord, ImportPolicy, RecordRegistry};

use googletest::prelude::*;

fn admins() -> AdminRegistry {
    AdminRegistry::new(account("deployer"))
}

fn with_record(owner: &str) -> RecordRegistry {
    RecordRegistry::from_records([IdentityRecord::new(
        account(owner),
        hashes("1"),
        at(1_700_000_000),
    )])
}

#[test]
fn given_absent_identity_when_get_record_then_not_found() {
    let records = RecordRegistry::default();

    let result = records.get_record(&account("party-1"));

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
    assert_that!(records.find(&account("party-1")), none());
}

#[test]
fn given_any_caller_when_plan_create_then_record_keyed_by_caller() {
    let records = RecordRegistry::default();

    let record = records.plan_create(&caller("party-1"), hashes("1"), at(1_700_000_000));

    assert_that!(record.owner, eq(&account("party-1")));
    assert!(records.is_empty());
}

#[test]
fn given_absent_record_when_plan_update_then_not_found() {
    let records = RecordRegistry::default();

    let result = records.plan_update(&caller("party-1"), hashes("2"), at(1_700_000_100));

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn given_existing_record_when_plan_update_then_hashes_replaced() {
    let records = with_record("party-1");

    let record = records
        .plan_update(&caller("party-1"), hashes("2"), at(1_700_000_100))
        .unwrap();

    assert_that!(record.hashes, eq(&hashes("2")));
    assert_that!(record.created_at, eq(at(1_700_000_000)));
}

#[test]
fn given_non_admin_when_plan_verify_then_unauthorized_before_lookup() {
    let records = RecordRegistry::default();

    let result = records.plan_verify(
        &admins(),
        &caller("party-1"),
        &account("party-1"),
        nik("NIK123"),
        at(1_700_000_100),
    );

    assert!(matches!(
        result,
        Err(CoreError::Unauthorized {
            operation: "verify_record",
            ..
        })
    ));
}

#[test]
fn given_admin_and_absent_subject_when_plan_verify_then_not_found() {
    let records = RecordRegistry::default();

    let result = records.plan_verify(
        &admins(),
        &caller("deployer"),
        &account("party-1"),
        nik("NIK123"),
        at(1_700_000_100),
    );

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn given_admin_gated_policy_and_admin_when_plan_import_then_keyed_by_subject() {
    let records = RecordRegistry::default();

    let record = records
        .plan_import(
            &admins(),
            ImportPolicy::AdminGated,
            &caller("deployer"),
            Some(account("party-2")),
            nik("NIK456"),
            hashes("2"),
            at(1_700_000_000),
        )
        .unwrap();

    assert_that!(record.owner, eq(&account("party-2")));
    assert_that!(record.national_id_str(), eq("NIK456"));
    assert!(!record.is_verified());
}

#[test]
fn given_admin_gated_policy_and_non_admin_when_plan_import_then_unauthorized() {
    let records = RecordRegistry::default();

    let result = records.plan_import(
        &admins(),
        ImportPolicy::AdminGated,
        &caller("party-2"),
        Some(account("party-2")),
        nik("NIK456"),
        hashes("2"),
        at(1_700_000_000),
    );

    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
}

#[test]
fn given_admin_gated_policy_and_no_subject_when_plan_import_then_validation_error() {
    let records = RecordRegistry::default();

    let result = records.plan_import(
        &admins(),
        ImportPolicy::AdminGated,
        &caller("deployer"),
        None,
        nik("NIK456"),
        hashes("2"),
        at(1_700_000_000),
    );

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_self_service_policy_when_plan_import_then_keyed_by_caller() {
    let records = RecordRegistry::default();

    let record = records
        .plan_import(
            &admins(),
            ImportPolicy::SelfService,
            &caller("party-2"),
            None,
            nik("NIK456"),
            hashes("2"),
            at(1_700_000_000),
        )
        .unwrap();

    assert_that!(record.owner, eq(&account("party-2")));
    assert!(!record.is_verified());
}

#[test]
fn given_self_service_policy_and_foreign_subject_when_plan_import_then_unauthorized() {
    let records = RecordRegistry::default();

    let result = records.plan_import(
        &admins(),
        ImportPolicy::SelfService,
        &caller("party-2"),
        Some(account("party-3")),
        nik("NIK456"),
        hashes("2"),
        at(1_700_000_000),
    );

    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
}
