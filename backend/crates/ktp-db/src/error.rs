use ktp_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{operation} produced an unexpected mutation {location}")]
    UnexpectedMutation {
        operation: &'static str,
        location: ErrorLocation,
    },

    /// The task running the command panicked or was aborted.
    #[error("Registry task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },

    /// The registry rejected the command; nothing was written.
    #[error("{source}")]
    Rejected { source: CoreError },
}

impl DbError {
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Rejected { source } => Some(source),
            _ => None,
        }
    }

    #[track_caller]
    pub(crate) fn corrupt(table: &'static str, message: impl Into<String>) -> Self {
        Self::CorruptRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    fn from(source: CoreError) -> Self {
        Self::Rejected { source }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
