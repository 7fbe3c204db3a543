//! Engine configuration

use std::time::Duration;

use crate::error::{ArenaError, ArenaResult};

/// How long a fetched item snapshot is served before refetching
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Upper bound on any single ledger call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    pub cache_ttl: Duration,
    pub store_timeout: Duration,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl ArenaConfig {
    pub fn from_secs(cache_ttl_secs: u64, store_timeout_secs: u64) -> Self {
        Self {
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            store_timeout: Duration::from_secs(store_timeout_secs),
        }
    }

    pub fn validate(&self) -> ArenaResult<()> {
        if self.cache_ttl.is_zero() {
            return Err(ArenaError::config("cache_ttl", "must be greater than zero"));
        }
        if self.store_timeout.is_zero() {
            return Err(ArenaError::config("store_timeout", "must be greater than zero"));
        }
        Ok(())
    }
}
