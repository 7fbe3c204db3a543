//! Shared error types for ledger rows and votes

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Row is not a keyed record")]
    NotARecord,

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Invalid field {field}: {details}")]
    InvalidField { field: String, details: String },

    #[error("Item id must not be empty")]
    EmptyId,

    #[error("Item id {id:?} is reserved for ties")]
    ReservedId { id: String },

    #[error("Item {id} cannot be compared with itself")]
    SelfComparison { id: String },

    #[error("Result {result:?} names neither {id1} nor {id2}")]
    InconsistentResult { id1: String, id2: String, result: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
