use crate::tests::{account, at, caller, hashes, nik};
use crate::{Command, CoreError, IdentityRecord, Mutation, Registry, RegistryPolicy};

use googletest::prelude::*;

fn registry() -> Registry {
    Registry::new(account("deployer"), RegistryPolicy::default())
}

// =========================================================================
// Lifecycle
// =========================================================================

#[test]
fn given_create_verify_update_when_read_then_verification_dropped_and_nik_kept() {
    let mut registry = registry();
    let party = caller("party-1");

    registry.create_record(&party, hashes("1"));
    registry
        .verify_record(&caller("deployer"), &account("party-1"), nik("NIK123"))
        .unwrap();
    registry.update_record(&party, hashes("1'")).unwrap();

    let record = registry.get_record(&account("party-1")).unwrap();
    assert_that!(record.hashes, eq(&hashes("1'")));
    assert_that!(record.national_id_str(), eq("NIK123"));
    assert!(!record.is_verified());
}

#[test]
fn given_verified_record_when_verified_again_then_latest_attestation_wins() {
    let mut registry = registry();
    let deployer = caller("deployer");
    registry.add_admin(&deployer, account("admin-2")).unwrap();
    registry.create_record(&caller("party-1"), hashes("1"));
    let first = registry
        .plan(
            &deployer,
            Command::VerifyRecord {
                subject: account("party-1"),
                national_id: nik("NIK123"),
            },
            at(1_700_000_100),
        )
        .unwrap();
    registry.apply(&first);

    let second = registry
        .plan(
            &caller("admin-2"),
            Command::VerifyRecord {
                subject: account("party-1"),
                national_id: nik("NIK999"),
            },
            at(1_700_000_200),
        )
        .unwrap();
    registry.apply(&second);

    let record = registry.get_record(&account("party-1")).unwrap();
    assert!(record.is_verified());
    assert_that!(record.national_id_str(), eq("NIK999"));
    assert_eq!(record.verified_by, Some(account("admin-2")));
    assert_eq!(record.verified_at, Some(at(1_700_000_200)));
    assert_that!(record.hashes, eq(&hashes("1")));
}

#[test]
fn given_verified_record_when_created_again_then_reset() {
    let mut registry = registry();
    let party = caller("party-1");
    registry.create_record(&party, hashes("1"));
    registry
        .verify_record(&caller("deployer"), &account("party-1"), nik("NIK123"))
        .unwrap();

    registry.create_record(&party, hashes("2"));

    let record = registry.get_record(&account("party-1")).unwrap();
    assert_that!(record.national_id, none());
    assert!(!record.is_verified());
}

#[test]
fn given_unauthorized_verify_when_rejected_then_state_unchanged() {
    let mut registry = registry();
    registry.create_record(&caller("party-1"), hashes("1"));
    let before = registry.get_record(&account("party-1")).unwrap().clone();

    let result = registry.verify_record(&caller("party-1"), &account("party-1"), nik("NIK123"));

    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
    assert_that!(registry.get_record(&account("party-1")).unwrap(), eq(&before));
}

#[test]
fn given_no_record_when_update_then_not_found_and_nothing_created() {
    let mut registry = registry();

    let result = registry.update_record(&caller("party-1"), hashes("1"));

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
    assert!(registry.record_registry().is_empty());
}

#[test]
fn given_admin_import_when_read_then_all_fields_stored_unverified() {
    let mut registry = registry();

    registry
        .import_record(
            &caller("deployer"),
            Some(account("party-2")),
            nik("NIK456"),
            hashes("2"),
        )
        .unwrap();

    let record = registry.get_record(&account("party-2")).unwrap();
    assert_that!(record.hashes, eq(&hashes("2")));
    assert_that!(record.national_id_str(), eq("NIK456"));
    assert!(!record.is_verified());
}

// =========================================================================
// Administration
// =========================================================================

#[test]
fn given_removed_admin_when_calling_admin_operations_then_unauthorized() {
    let mut registry = registry();
    let deployer = caller("deployer");
    registry.add_admin(&deployer, account("party-1")).unwrap();

    registry.remove_admin(&deployer, account("party-1")).unwrap();

    assert!(!registry.is_admin(&account("party-1")));
    let result = registry.add_admin(&caller("party-1"), account("party-3"));
    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
}

#[test]
fn given_repeated_add_and_remove_when_applied_then_idempotent() {
    let mut registry = registry();
    let deployer = caller("deployer");

    registry.add_admin(&deployer, account("party-1")).unwrap();
    registry.add_admin(&deployer, account("party-1")).unwrap();
    assert_that!(registry.admins().len(), eq(2));

    registry.remove_admin(&deployer, account("party-1")).unwrap();
    registry.remove_admin(&deployer, account("party-1")).unwrap();
    assert_that!(registry.admins(), elements_are![eq(&account("deployer"))]);
}

#[test]
fn given_sole_admin_when_removing_self_then_last_admin_protected() {
    let mut registry = registry();

    let result = registry.remove_admin(&caller("deployer"), account("deployer"));

    assert!(matches!(result, Err(CoreError::LastAdminProtected { .. })));
    assert!(registry.is_admin(&account("deployer")));
}

#[test]
fn given_permissive_policy_when_sole_admin_removes_self_then_registry_has_no_admins() {
    let mut registry = Registry::new(account("deployer"), RegistryPolicy::permissive());

    registry
        .remove_admin(&caller("deployer"), account("deployer"))
        .unwrap();

    assert!(registry.admins().is_empty());
}

// =========================================================================
// plan / apply
// =========================================================================

#[test]
fn given_command_when_planned_then_state_not_mutated() {
    let registry = registry();

    let mutation = registry
        .plan(
            &caller("party-1"),
            Command::CreateRecord { hashes: hashes("1") },
            at(1_700_000_000),
        )
        .unwrap();

    assert_that!(mutation.subject(), eq(&account("party-1")));
    assert!(registry.record_registry().is_empty());
}

#[test]
fn given_planned_mutation_when_applied_then_state_reflects_it() {
    let mut registry = registry();
    let mutation = registry
        .plan(
            &caller("deployer"),
            Command::AddAdmin {
                account: account("party-1"),
            },
            at(1_700_000_000),
        )
        .unwrap();

    registry.apply(&mutation);

    assert!(registry.is_admin(&account("party-1")));
    assert!(matches!(
        mutation,
        Mutation::AdminGranted { ref granted_by, .. } if granted_by == &account("deployer")
    ));
}

#[test]
fn given_rejected_command_when_planned_then_error_returned() {
    let registry = registry();

    let result = registry.plan(
        &caller("party-1"),
        Command::RemoveAdmin {
            account: account("deployer"),
        },
        at(1_700_000_000),
    );

    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
}

// =========================================================================
// restore
// =========================================================================

#[test]
fn given_persisted_state_when_restored_then_queries_match() {
    let record = IdentityRecord::new(account("party-1"), hashes("1"), at(1_700_000_000));

    let registry = Registry::restore(
        [account("deployer"), account("party-9")],
        [record.clone()],
        RegistryPolicy::default(),
    )
    .unwrap();

    assert!(registry.is_admin(&account("party-9")));
    assert_that!(registry.get_record(&account("party-1")).unwrap(), eq(&record));
}

#[test]
fn given_empty_admin_set_with_protection_when_restored_then_validation_error() {
    let result = Registry::restore(
        Vec::new(),
        Vec::<IdentityRecord>::new(),
        RegistryPolicy::default(),
    );

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
