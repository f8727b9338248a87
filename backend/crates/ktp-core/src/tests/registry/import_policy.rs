use crate::{ImportPolicy, RegistryPolicy};

use std::str::FromStr;

#[test]
fn test_import_policy_round_trips_through_str() {
    for policy in [ImportPolicy::AdminGated, ImportPolicy::SelfService] {
        assert_eq!(ImportPolicy::from_str(policy.as_str()).unwrap(), policy);
    }
    assert!(ImportPolicy::from_str("anyone").is_err());
}

#[test]
fn test_import_policy_deserializes_snake_case() {
    let policy: ImportPolicy = serde_json::from_str("\"self_service\"").unwrap();

    assert_eq!(policy, ImportPolicy::SelfService);
}

#[test]
fn test_registry_policy_defaults_are_hardened() {
    let policy = RegistryPolicy::default();

    assert_eq!(policy.import, ImportPolicy::AdminGated);
    assert!(policy.protect_last_admin);
}

#[test]
fn test_registry_policy_permissive_matches_legacy_rules() {
    let policy = RegistryPolicy::permissive();

    assert_eq!(policy.import, ImportPolicy::SelfService);
    assert!(!policy.protect_last_admin);
}
