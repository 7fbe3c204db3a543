//! Arena facade
//!
//! Wires the cache, selector, recorder and aggregator over a pair of ledgers
//! and exposes the four request-level operations.

use std::sync::Arc;

use shared::{Item, Report};

use crate::config::ArenaConfig;
use crate::core::{select_pair, Aggregator, FreshnessCache, OutcomeRecorder};
use crate::error::ArenaResult;
use crate::traits::{ItemStore, VoteStore};

pub struct Arena {
    config: ArenaConfig,
    cache: FreshnessCache,
    recorder: OutcomeRecorder,
    aggregator: Aggregator,
}

impl Arena {
    pub fn new(
        items: Arc<dyn ItemStore>,
        votes: Arc<dyn VoteStore>,
        config: ArenaConfig,
    ) -> ArenaResult<Self> {
        config.validate()?;
        Ok(Self {
            cache: FreshnessCache::new(items, &config),
            recorder: OutcomeRecorder::new(Arc::clone(&votes), &config),
            aggregator: Aggregator::new(votes, &config),
            config,
        })
    }

    /// Two distinct items from the current item set
    pub async fn present_pair(&self) -> ArenaResult<(Item, Item)> {
        let items = self.cache.get_items().await;
        select_pair(&items)
    }

    pub async fn submit_win(&self, winner_id: &str, loser_id: &str) -> ArenaResult<()> {
        self.recorder.record_win(winner_id, loser_id).await
    }

    pub async fn submit_tie(&self, id1: &str, id2: &str) -> ArenaResult<()> {
        self.recorder.record_tie(id1, id2).await
    }

    pub async fn report(&self) -> Report {
        self.aggregator.aggregate().await
    }

    pub fn cache(&self) -> &FreshnessCache {
        &self.cache
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}
