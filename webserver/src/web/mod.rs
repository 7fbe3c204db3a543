//! HTTP layer: route handlers and page rendering

pub mod handlers;
pub mod render;
