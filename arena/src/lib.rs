//! Arena library for the tweet comparison engine
//!
//! Presents random pairs of items, records win/loss/tie outcomes to an
//! append-only vote ledger and tallies the ledger into a ranking.

pub mod arena_impl;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export main types
pub use arena_impl::Arena;
pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};

// Re-export trait definitions
pub use traits::{ItemStore, VoteStore};

// Re-export service implementations
pub use services::{FileLedger, HttpLedger, HttpLedgerConfig, MemoryLedger};
