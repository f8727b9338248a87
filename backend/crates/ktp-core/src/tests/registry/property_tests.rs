use crate::tests::{account, caller};
use crate::{AccountId, NationalId, RecordHashes, Registry, RegistryPolicy};

use proptest::prelude::*;

fn hash_strategy() -> impl Strategy<Value = String> {
    any::<String>()
}

fn hashes_strategy() -> impl Strategy<Value = RecordHashes> {
    (hash_strategy(), hash_strategy(), hash_strategy())
        .prop_map(|(data, photo, signature)| RecordHashes::new(data, photo, signature))
}

fn account_strategy() -> impl Strategy<Value = AccountId> {
    "[a-z][a-z0-9-]{0,31}".prop_map(|value| account(&value))
}

fn national_id_strategy() -> impl Strategy<Value = NationalId> {
    "[0-9]{16}".prop_map(|value| NationalId::parse(value).unwrap())
}

fn registry() -> Registry {
    Registry::new(account("deployer"), RegistryPolicy::default())
}

proptest! {
    #[test]
    fn create_then_get_returns_same_hashes(owner in account_strategy(), hashes in hashes_strategy()) {
        let mut registry = registry();
        let caller = crate::Caller::new(owner.clone());

        registry.create_record(&caller, hashes.clone());

        let record = registry.get_record(&owner).unwrap();
        prop_assert_eq!(&record.hashes, &hashes);
        prop_assert!(!record.is_verified());
        prop_assert_eq!(record.national_id_str(), "");
    }

    #[test]
    fn import_is_never_verified(
        subject in account_strategy(),
        national_id in national_id_strategy(),
        hashes in hashes_strategy(),
    ) {
        let mut registry = registry();

        let record = registry
            .import_record(&caller("deployer"), Some(subject), national_id.clone(), hashes)
            .unwrap();

        prop_assert!(!record.is_verified());
        prop_assert_eq!(record.national_id.as_ref(), Some(&national_id));
    }

    #[test]
    fn update_after_verify_resets_flag_and_keeps_national_id(
        owner in account_strategy(),
        national_id in national_id_strategy(),
        first in hashes_strategy(),
        second in hashes_strategy(),
    ) {
        let mut registry = registry();
        let party = crate::Caller::new(owner.clone());
        registry.create_record(&party, first);
        registry.verify_record(&caller("deployer"), &owner, national_id.clone()).unwrap();

        let record = registry.update_record(&party, second.clone()).unwrap();

        prop_assert!(!record.is_verified());
        prop_assert_eq!(record.national_id.as_ref(), Some(&national_id));
        prop_assert_eq!(&record.hashes, &second);
    }

    #[test]
    fn add_admin_is_idempotent(target in account_strategy(), repeats in 1usize..5) {
        let mut registry = registry();

        for _ in 0..repeats {
            registry.add_admin(&caller("deployer"), target.clone()).unwrap();
        }

        prop_assert!(registry.is_admin(&target));
        let expected = if target == account("deployer") { 1 } else { 2 };
        prop_assert_eq!(registry.admins().len(), expected);
    }
}
