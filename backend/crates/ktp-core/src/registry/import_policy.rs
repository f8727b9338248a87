use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Who may import a pre-identified record, and under which key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImportPolicy {
    /// Administrator-only; the record is written under an explicit subject
    #[default]
    AdminGated,
    /// Any caller may import, but only under their own account
    SelfService,
}

impl ImportPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminGated => "admin_gated",
            Self::SelfService => "self_service",
        }
    }
}

impl FromStr for ImportPolicy {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin_gated" => Ok(Self::AdminGated),
            "self_service" => Ok(Self::SelfService),
            _ => Err(CoreError::InvalidImportPolicy {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ImportPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
