//! In-process ledger
//!
//! Holds both the item and vote ledgers in memory. Used by tests and demos;
//! it can be switched offline to exercise the degraded paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use shared::{Item, Vote};
use tokio::sync::RwLock;

use crate::error::{ArenaError, ArenaResult};
use crate::traits::{ItemStore, VoteStore};

#[derive(Clone)]
pub struct MemoryLedger {
    items: Arc<RwLock<Vec<Item>>>,
    votes: Arc<RwLock<Vec<Vote>>>,
    online: Arc<AtomicBool>,
    item_fetches: Arc<AtomicUsize>,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            votes: Arc::new(RwLock::new(Vec::new())),
            online: Arc::new(AtomicBool::new(true)),
            item_fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn push_item(&self, item: Item) {
        self.items.write().await.push(item);
    }

    pub async fn replace_items(&self, items: Vec<Item>) {
        *self.items.write().await = items;
    }

    /// Copy of the vote log
    pub async fn votes(&self) -> Vec<Vote> {
        self.votes.read().await.clone()
    }

    /// Simulate the ledger going away or coming back
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Number of item fetch attempts so far
    pub fn item_fetches(&self) -> usize {
        self.item_fetches.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> ArenaResult<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ArenaError::unavailable("memory ledger is offline"))
        }
    }
}

#[async_trait]
impl ItemStore for MemoryLedger {
    async fn fetch_all(&self) -> ArenaResult<Vec<Item>> {
        self.item_fetches.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        Ok(self.items.read().await.clone())
    }
}

#[async_trait]
impl VoteStore for MemoryLedger {
    async fn append(&self, vote: &Vote) -> ArenaResult<()> {
        self.ensure_online()?;
        self.votes.write().await.push(vote.clone());
        Ok(())
    }

    async fn read_all(&self) -> ArenaResult<Vec<Vote>> {
        self.ensure_online()?;
        Ok(self.votes.read().await.clone())
    }
}
