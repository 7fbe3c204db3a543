//! Vote recording
//!
//! Unlike the read paths, a failed append is reported to the caller: a vote
//! lost silently is lost for good.

use std::sync::Arc;
use std::time::Duration;

use shared::Vote;
use tracing::{error, info};

use crate::config::ArenaConfig;
use crate::core::with_timeout;
use crate::error::{ArenaError, ArenaResult};
use crate::traits::VoteStore;

pub struct OutcomeRecorder {
    store: Arc<dyn VoteStore>,
    store_timeout: Duration,
}

impl OutcomeRecorder {
    pub fn new(store: Arc<dyn VoteStore>, config: &ArenaConfig) -> Self {
        Self {
            store,
            store_timeout: config.store_timeout,
        }
    }

    /// Append `(winner, loser, winner)`.
    ///
    /// Ids are not checked against the current item set; votes on items
    /// since removed from the ledger stay valid history.
    pub async fn record_win(&self, winner_id: &str, loser_id: &str) -> ArenaResult<()> {
        let vote = Vote::win(winner_id, loser_id)?;
        self.append(vote).await
    }

    /// Append `(id1, id2, "tie")`
    pub async fn record_tie(&self, id1: &str, id2: &str) -> ArenaResult<()> {
        let vote = Vote::tie(id1, id2)?;
        self.append(vote).await
    }

    async fn append(&self, vote: Vote) -> ArenaResult<()> {
        match with_timeout(self.store_timeout, "vote append", self.store.append(&vote)).await {
            Ok(()) => {
                info!(vote = %vote, "🗳️ Recorded vote");
                Ok(())
            }
            Err(e) => {
                error!(vote = %vote, error = %e, "❌ Failed to record vote");
                Err(ArenaError::StoreUnavailable {
                    message: e.to_string(),
                })
            }
        }
    }
}
