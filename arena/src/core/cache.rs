//! Time-bounded cache of the item set
//!
//! The current snapshot lives behind an `Arc` that is swapped whole on
//! refresh. Readers clone the `Arc` under a short read lock and never see a
//! half-built snapshot. Refreshes are not coalesced: callers that find the
//! snapshot stale at the same moment each fetch, and the last swap wins.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use shared::Item;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::ArenaConfig;
use crate::core::with_timeout;
use crate::error::ArenaResult;
use crate::traits::ItemStore;

/// Items fetched in one ledger read, tagged with the fetch time
#[derive(Debug, Clone)]
pub struct Snapshot {
    items: Arc<[Item]>,
    fetched_at: Instant,
}

impl Snapshot {
    /// Build a snapshot, keeping the first occurrence of any repeated id
    pub fn new(items: Vec<Item>, fetched_at: Instant) -> Self {
        let fetched = items.len();
        let mut seen = HashSet::with_capacity(fetched);
        let unique: Vec<Item> = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        if unique.len() < fetched {
            warn!(
                duplicates = fetched - unique.len(),
                "⚠️ Item ledger contains repeated ids, keeping first occurrences"
            );
        }
        Self {
            items: Arc::from(unique),
            fetched_at,
        }
    }

    pub fn items(&self) -> Arc<[Item]> {
        Arc::clone(&self.items)
    }

    pub fn fetched_at(&self) -> Instant {
        self.fetched_at
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct FreshnessCache {
    store: Arc<dyn ItemStore>,
    ttl: Duration,
    store_timeout: Duration,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
}

impl FreshnessCache {
    pub fn new(store: Arc<dyn ItemStore>, config: &ArenaConfig) -> Self {
        Self {
            store,
            ttl: config.cache_ttl,
            store_timeout: config.store_timeout,
            snapshot: RwLock::new(None),
        }
    }

    /// Current item set, refetched when missing or older than the TTL.
    ///
    /// A failed fetch yields an empty set and leaves the stored snapshot
    /// untouched, so the next call tries again.
    pub async fn get_items(&self) -> Arc<[Item]> {
        if let Some(snapshot) = self.current().await {
            let age = snapshot.age(Instant::now());
            if age < self.ttl {
                debug!(items = snapshot.len(), age_secs = age.as_secs(), "Serving cached item snapshot");
                return snapshot.items();
            }
            debug!(age_secs = age.as_secs(), "Item snapshot expired");
        }

        match self.refresh().await {
            Ok(snapshot) => snapshot.items(),
            Err(e) => {
                warn!(error = %e, "⚠️ Item ledger fetch failed, serving empty item set");
                Arc::from(Vec::<Item>::new())
            }
        }
    }

    /// Fetch from the ledger and swap in the new snapshot
    pub async fn refresh(&self) -> ArenaResult<Arc<Snapshot>> {
        let items = with_timeout(self.store_timeout, "item fetch", self.store.fetch_all()).await?;
        let snapshot = Arc::new(Snapshot::new(items, Instant::now()));

        *self.snapshot.write().await = Some(Arc::clone(&snapshot));

        info!(items = snapshot.len(), "🔄 Refreshed item snapshot");
        Ok(snapshot)
    }

    /// The stored snapshot, fresh or not
    pub async fn current(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().await.clone()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
