use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

pub const MAX_ACCOUNT_ID_LENGTH: usize = 128;

/// Account identity a record or admin entry is keyed by.
///
/// Opaque to the registry: any non-empty token without whitespace or control
/// characters is accepted (ledger addresses, JWT subjects, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    #[track_caller]
    pub fn parse(value: impl Into<String>) -> CoreErrorResult<Self> {
        let value = value.into();

        let reason = if value.is_empty() {
            Some("cannot be empty")
        } else if value.len() > MAX_ACCOUNT_ID_LENGTH {
            Some("exceeds maximum length (128)")
        } else if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Some("contains whitespace or control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidAccountId {
                value,
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(Self(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        AccountId::parse(value).map_err(serde::de::Error::custom)
    }
}
