use crate::{AuthError, Result as AuthErrorResult};

use ktp_core::{AccountId, Caller};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims. `sub` names the account acting on the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Informational only; registry authority comes from the admin set
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.account().map(|_| ())
    }

    #[track_caller]
    pub fn account(&self) -> AuthErrorResult<AccountId> {
        AccountId::parse(self.sub.as_str()).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// The verified caller identity these claims speak for.
    #[track_caller]
    pub fn caller(&self) -> AuthErrorResult<Caller> {
        Ok(Caller::new(self.account()?))
    }
}
