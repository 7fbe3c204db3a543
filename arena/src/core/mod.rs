//! Core engine components
//!
//! Pure engine logic. Ledger I/O happens only through the traits in
//! [`crate::traits`].

pub mod aggregator;
pub mod cache;
pub mod recorder;
pub mod selector;

use std::future::Future;
use std::time::Duration;

use crate::error::{ArenaError, ArenaResult};

// Re-export commonly used types
pub use aggregator::{tally, Aggregator};
pub use cache::{FreshnessCache, Snapshot};
pub use recorder::OutcomeRecorder;
pub use selector::{select_pair, select_pair_with};

/// Run a ledger call under a deadline; an elapsed deadline is `Unavailable`.
pub(crate) async fn with_timeout<T>(
    limit: Duration,
    operation: &str,
    call: impl Future<Output = ArenaResult<T>>,
) -> ArenaResult<T> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ArenaError::unavailable(format!(
            "{operation} timed out after {}ms",
            limit.as_millis()
        ))),
    }
}
