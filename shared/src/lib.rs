//! Shared types for the tweet arena
//!
//! Contains the data model that crosses crate boundaries (items, votes,
//! reports), named-field ledger row decoding and logging setup.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
