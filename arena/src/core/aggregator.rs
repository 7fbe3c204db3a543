//! Win tallies derived from the full vote log
//!
//! Nothing is stored between calls; every report is a fresh scan of the log.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use shared::{Report, Score, Vote, VoteOutcome};
use tracing::{debug, warn};

use crate::config::ArenaConfig;
use crate::core::with_timeout;
use crate::error::ArenaResult;
use crate::traits::VoteStore;

pub struct Aggregator {
    store: Arc<dyn VoteStore>,
    store_timeout: Duration,
}

impl Aggregator {
    pub fn new(store: Arc<dyn VoteStore>, config: &ArenaConfig) -> Self {
        Self {
            store,
            store_timeout: config.store_timeout,
        }
    }

    /// Tally the current log; a read failure yields an empty report
    pub async fn aggregate(&self) -> Report {
        match self.try_aggregate().await {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "⚠️ Vote ledger read failed, serving empty report");
                Report::empty()
            }
        }
    }

    pub async fn try_aggregate(&self) -> ArenaResult<Report> {
        let votes = with_timeout(self.store_timeout, "vote read", self.store.read_all()).await?;
        let report = tally(&votes);
        debug!(
            votes = report.total_votes,
            ties = report.ties,
            ranked = report.scores.len(),
            "📊 Aggregated vote log"
        );
        Ok(report)
    }
}

/// Count wins and defeated opponents.
///
/// Ties add nothing to either side. Opponent lists keep log order. Scores are
/// sorted by wins descending, then by item id ascending.
pub fn tally(votes: &[Vote]) -> Report {
    let mut wins: HashMap<&str, u64> = HashMap::new();
    let mut pairwise_wins: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut ties = 0;

    for vote in votes {
        match vote.outcome() {
            VoteOutcome::Tie => ties += 1,
            VoteOutcome::Win { winner, loser } => {
                *wins.entry(winner).or_insert(0) += 1;
                pairwise_wins
                    .entry(winner.to_string())
                    .or_default()
                    .push(loser.to_string());
            }
        }
    }

    let mut scores: Vec<Score> = wins
        .into_iter()
        .map(|(item_id, count)| Score::new(item_id, count))
        .collect();
    scores.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.item_id.cmp(&b.item_id)));

    Report {
        scores,
        pairwise_wins,
        total_votes: votes.len(),
        ties,
        generated_at: Utc::now(),
    }
}
