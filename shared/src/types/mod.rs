//! Core types shared by the arena engine and the webserver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{SharedError, SharedResult};

pub mod rows;

pub use rows::{decode_item_row, decode_items, decode_vote_row, decode_votes, Decoded};

/// Sentinel stored in the `result` column of a tied vote
pub const TIE: &str = "tie";

/// Canonical form of an item id. Applied when votes are built and when
/// ledger rows are decoded, so an id reads back exactly as it was written.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_string()
}

/// A comparable unit of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
}

impl Item {
    /// Create an item, trimming surrounding whitespace from the id and text
    pub fn new(id: impl AsRef<str>, text: impl AsRef<str>) -> Self {
        Self {
            id: normalize_id(id.as_ref()),
            text: text.as_ref().trim().to_string(),
        }
    }
}

/// One recorded comparison.
///
/// Fields are private so that every vote in circulation satisfies the
/// ledger invariant: `result` is `id1`, `id2` or [`TIE`], and neither id is
/// empty, equal to the other, or equal to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    id1: String,
    id2: String,
    result: String,
}

/// Decoded meaning of a vote's `result` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome<'a> {
    Win { winner: &'a str, loser: &'a str },
    Tie,
}

impl Vote {
    /// A decisive vote. The row is `(winner, loser, winner)`.
    pub fn win(winner: impl AsRef<str>, loser: impl AsRef<str>) -> SharedResult<Self> {
        let winner = normalize_id(winner.as_ref());
        let loser = normalize_id(loser.as_ref());
        validate_pair(&winner, &loser)?;
        Ok(Self {
            result: winner.clone(),
            id1: winner,
            id2: loser,
        })
    }

    /// A tied vote. The row is `(id1, id2, "tie")`.
    pub fn tie(id1: impl AsRef<str>, id2: impl AsRef<str>) -> SharedResult<Self> {
        let id1 = normalize_id(id1.as_ref());
        let id2 = normalize_id(id2.as_ref());
        validate_pair(&id1, &id2)?;
        Ok(Self {
            id1,
            id2,
            result: TIE.to_string(),
        })
    }

    /// Rebuild a vote from the three raw ledger columns
    pub fn from_columns(
        id1: impl AsRef<str>,
        id2: impl AsRef<str>,
        result: impl AsRef<str>,
    ) -> SharedResult<Self> {
        let id1 = normalize_id(id1.as_ref());
        let id2 = normalize_id(id2.as_ref());
        let result = normalize_id(result.as_ref());
        validate_pair(&id1, &id2)?;
        if result != id1 && result != id2 && result != TIE {
            return Err(SharedError::InconsistentResult { id1, id2, result });
        }
        Ok(Self { id1, id2, result })
    }

    pub fn id1(&self) -> &str {
        &self.id1
    }

    pub fn id2(&self) -> &str {
        &self.id2
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// Columns in ledger order
    pub fn columns(&self) -> [&str; 3] {
        [&self.id1, &self.id2, &self.result]
    }

    pub fn outcome(&self) -> VoteOutcome<'_> {
        if self.result == TIE {
            VoteOutcome::Tie
        } else if self.result == self.id1 {
            VoteOutcome::Win {
                winner: &self.id1,
                loser: &self.id2,
            }
        } else {
            VoteOutcome::Win {
                winner: &self.id2,
                loser: &self.id1,
            }
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id1, self.id2, self.result)
    }
}

fn validate_pair(id1: &str, id2: &str) -> SharedResult<()> {
    for id in [id1, id2] {
        if id.is_empty() {
            return Err(SharedError::EmptyId);
        }
        if id == TIE {
            return Err(SharedError::ReservedId { id: id.to_string() });
        }
    }
    if id1 == id2 {
        return Err(SharedError::SelfComparison { id: id1.to_string() });
    }
    Ok(())
}

/// Win count for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub item_id: String,
    pub wins: u64,
}

impl Score {
    pub fn new(item_id: impl Into<String>, wins: u64) -> Self {
        Self {
            item_id: item_id.into(),
            wins,
        }
    }
}

/// Tally derived from the full vote log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Sorted by wins descending, then item id ascending
    pub scores: Vec<Score>,
    /// Winner id -> defeated ids in log order
    pub pairwise_wins: BTreeMap<String, Vec<String>>,
    pub total_votes: usize,
    pub ties: usize,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            pairwise_wins: BTreeMap::new(),
            total_votes: 0,
            ties: 0,
            generated_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty() && self.pairwise_wins.is_empty()
    }

    pub fn wins_for(&self, item_id: &str) -> u64 {
        self.scores
            .iter()
            .find(|score| score.item_id == item_id)
            .map(|score| score.wins)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_text_is_trimmed() {
        let item = Item::new("42", "  hello world \n");
        assert_eq!(item.text, "hello world");
        assert_eq!(item.id, "42");
    }

    #[test]
    fn test_win_row_names_the_winner() {
        let vote = Vote::win("X", "Y").unwrap();
        assert_eq!(vote.columns(), ["X", "Y", "X"]);
        assert_eq!(vote.outcome(), VoteOutcome::Win { winner: "X", loser: "Y" });
    }

    #[test]
    fn test_tie_row_uses_sentinel() {
        let vote = Vote::tie("X", "Y").unwrap();
        assert_eq!(vote.result(), TIE);
        assert_ne!(vote.result(), "X");
        assert_ne!(vote.result(), "Y");
        assert_eq!(vote.outcome(), VoteOutcome::Tie);
    }

    #[test]
    fn test_second_column_can_win() {
        let vote = Vote::from_columns("C", "A", "A").unwrap();
        assert_eq!(vote.outcome(), VoteOutcome::Win { winner: "A", loser: "C" });
    }

    #[test]
    fn test_invalid_votes_are_rejected() {
        assert!(matches!(Vote::win("", "Y"), Err(SharedError::EmptyId)));
        assert!(matches!(Vote::win("X", "X"), Err(SharedError::SelfComparison { .. })));
        assert!(matches!(Vote::tie("tie", "Y"), Err(SharedError::ReservedId { .. })));
        assert!(matches!(
            Vote::from_columns("X", "Y", "Z"),
            Err(SharedError::InconsistentResult { .. })
        ));
    }

    #[test]
    fn test_ids_are_normalized_before_validation() {
        let vote = Vote::win(" X ", "Y").unwrap();
        assert_eq!(vote.columns(), ["X", "Y", "X"]);
        assert_eq!(vote, Vote::from_columns("X ", " Y", "X").unwrap());

        assert!(matches!(Vote::win("A ", "A"), Err(SharedError::SelfComparison { .. })));
        assert!(matches!(Vote::win(" tie", "B"), Err(SharedError::ReservedId { .. })));
        assert!(matches!(Vote::tie("   ", "B"), Err(SharedError::EmptyId)));
        assert_eq!(Item::new(" 7 ", "x").id, "7");
    }

    #[test]
    fn test_report_wins_lookup() {
        let mut report = Report::empty();
        assert!(report.is_empty());
        report.scores.push(Score::new("A", 3));
        assert_eq!(report.wins_for("A"), 3);
        assert_eq!(report.wins_for("B"), 0);
    }
}
