//! Service tests for the ledger implementations

mod http_ledger;
