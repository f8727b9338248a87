use crate::{AccountId, ErrorLocation};

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unauthorized: {caller} is not permitted to {operation} {location}")]
    Unauthorized {
        caller: AccountId,
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Identity record not found: {identity} {location}")]
    NotFound {
        identity: AccountId,
        location: ErrorLocation,
    },

    #[error("Cannot remove {identity}: it is the last administrator {location}")]
    LastAdminProtected {
        identity: AccountId,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid account id '{value}': {reason} {location}")]
    InvalidAccountId {
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid record status: {value} {location}")]
    InvalidRecordStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid import policy: {value} {location}")]
    InvalidImportPolicy {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Machine-readable code, stable across releases.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::LastAdminProtected { .. } => "LAST_ADMIN_PROTECTED",
            Self::Validation { .. }
            | Self::InvalidAccountId { .. }
            | Self::InvalidRecordStatus { .. }
            | Self::InvalidImportPolicy { .. } => "VALIDATION_ERROR",
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
