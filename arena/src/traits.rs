//! Ledger trait definitions for dependency injection
//!
//! The engine reaches both remote ledgers only through these traits, so every
//! component can be tested against generated mocks.

use async_trait::async_trait;
use shared::{Item, Vote};

use crate::error::ArenaResult;

/// Read-only access to the item ledger
#[mockall::automock]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch every item in ledger order
    async fn fetch_all(&self) -> ArenaResult<Vec<Item>>;
}

/// Append-only access to the vote ledger
#[mockall::automock]
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Append one vote row
    async fn append(&self, vote: &Vote) -> ArenaResult<()>;

    /// Read every vote row in append order
    async fn read_all(&self) -> ArenaResult<Vec<Vote>>;
}
