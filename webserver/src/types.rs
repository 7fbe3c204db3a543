//! Request and response bodies for the HTTP surface

use serde::{Deserialize, Serialize};
use shared::Item;

/// Form posted when one item wins
#[derive(Debug, Clone, Deserialize)]
pub struct VoteForm {
    pub winner: String,
    pub loser: String,
}

/// Form posted when the pair is a tie
#[derive(Debug, Clone, Deserialize)]
pub struct TieForm {
    pub id1: String,
    pub id2: String,
}

/// Pair presented for comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResponse {
    pub left: Item,
    pub right: Item,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub uptime_seconds: u64,
    pub cached_items: usize,
    pub snapshot_age_seconds: Option<u64>,
}
