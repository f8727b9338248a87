use crate::AccountId;

use std::fmt;

/// Verified identity of the party invoking a command.
///
/// Built by the layer that authenticated the request (JWT validation, a
/// trusted header in development mode, a test harness). The registry trusts
/// it completely and performs no authentication of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller(AccountId);

impl Caller {
    pub fn new(account: AccountId) -> Self {
        Self(account)
    }

    pub fn account(&self) -> &AccountId {
        &self.0
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
