//! Arena engine error types
//!
//! Ledger adapters convert their own failures (I/O, HTTP, JSON) into these
//! variants before returning, so no raw collaborator error reaches the engine.

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Ledger unavailable: {message}")]
    Unavailable { message: String },

    #[error("Ledger source not found: {name}")]
    NotFound { name: String },

    #[error("Malformed ledger data: {details}")]
    MalformedData { details: String },

    #[error("Not enough items to compare ({available} available)")]
    InsufficientItems { available: usize },

    #[error("Vote could not be stored: {message}")]
    StoreUnavailable { message: String },

    #[error("Invalid vote: {0}")]
    InvalidVote(#[from] SharedError),

    #[error("Configuration error: {field}: {message}")]
    Config { field: String, message: String },
}

impl ArenaError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedData {
            details: details.into(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Failures a read path collapses into an empty result
    pub fn is_read_degradable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. } | Self::NotFound { .. } | Self::MalformedData { .. }
        )
    }
}

pub type ArenaResult<T> = Result<T, ArenaError>;
