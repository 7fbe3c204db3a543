//! Ledger implementations
//!
//! Concrete item and vote ledgers behind the [`crate::traits`] seams

pub mod file_ledger;
pub mod http_ledger;
pub mod memory_ledger;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use file_ledger::FileLedger;
pub use http_ledger::{HttpLedger, HttpLedgerConfig};
pub use memory_ledger::MemoryLedger;
