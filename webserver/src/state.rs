//! Webserver state shared by all handlers

use std::net::SocketAddr;
use std::time::Instant;

use arena::Arena;

pub struct WebServerState {
    pub arena: Arena,
    pub bind_address: SocketAddr,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(arena: Arena, bind_address: SocketAddr) -> Self {
        Self {
            arena,
            bind_address,
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
