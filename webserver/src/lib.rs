//! Webserver library for the tweet arena
//!
//! Serves the pairwise comparison page, accepts win and tie votes, and
//! exposes the aggregated rankings as HTML and JSON.

pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;
