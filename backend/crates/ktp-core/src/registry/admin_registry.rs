//! Administrator set and the membership gate every privileged call goes through.

use crate::{AccountId, Caller, CoreError, Result as CoreErrorResult};

use std::collections::BTreeSet;
use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Default)]
pub struct AdminRegistry {
    admins: BTreeSet<AccountId>,
}

impl AdminRegistry {
    /// The initializing identity is the sole administrator.
    pub fn new(initializer: AccountId) -> Self {
        Self {
            admins: BTreeSet::from([initializer]),
        }
    }

    pub fn from_members(members: impl IntoIterator<Item = AccountId>) -> Self {
        Self {
            admins: members.into_iter().collect(),
        }
    }

    pub fn is_admin(&self, identity: &AccountId) -> bool {
        self.admins.contains(identity)
    }

    /// Members in sorted order.
    pub fn members(&self) -> impl Iterator<Item = &AccountId> {
        self.admins.iter()
    }

    pub fn len(&self) -> usize {
        self.admins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }

    #[track_caller]
    pub fn require_admin(&self, caller: &Caller, operation: &'static str) -> CoreErrorResult<()> {
        if self.is_admin(caller.account()) {
            return Ok(());
        }

        Err(CoreError::Unauthorized {
            caller: caller.account().clone(),
            operation,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Gate for `addAdmin`. Adding an existing admin is accepted.
    #[track_caller]
    pub fn check_add(&self, caller: &Caller) -> CoreErrorResult<()> {
        self.require_admin(caller, "add_admin")
    }

    /// Gate for `removeAdmin`. Removing a non-admin is accepted; removing the
    /// last admin is refused when `protect_last_admin` is set.
    #[track_caller]
    pub fn check_remove(
        &self,
        caller: &Caller,
        account: &AccountId,
        protect_last_admin: bool,
    ) -> CoreErrorResult<()> {
        self.require_admin(caller, "remove_admin")?;

        if protect_last_admin && self.is_admin(account) && self.admins.len() == 1 {
            return Err(CoreError::LastAdminProtected {
                identity: account.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn add_admin(&mut self, caller: &Caller, account: AccountId) -> CoreErrorResult<()> {
        self.check_add(caller)?;
        self.insert(account);
        Ok(())
    }

    #[track_caller]
    pub fn remove_admin(
        &mut self,
        caller: &Caller,
        account: &AccountId,
        protect_last_admin: bool,
    ) -> CoreErrorResult<()> {
        self.check_remove(caller, account, protect_last_admin)?;
        self.remove(account);
        Ok(())
    }

    pub(crate) fn insert(&mut self, account: AccountId) {
        self.admins.insert(account);
    }

    pub(crate) fn remove(&mut self, account: &AccountId) {
        self.admins.remove(account);
    }
}
