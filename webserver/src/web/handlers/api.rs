//! JSON API handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use shared::Report;
use tokio::time::Instant;

use crate::error::WebServerResult;
use crate::state::WebServerState;
use crate::types::{HealthResponse, PairResponse};

/// Get a pair to compare - /api/pair
pub async fn get_pair(State(state): State<Arc<WebServerState>>) -> WebServerResult<Json<PairResponse>> {
    let (left, right) = state.arena.present_pair().await?;
    Ok(Json(PairResponse { left, right }))
}

/// Get the aggregated report - /api/report
pub async fn get_report(State(state): State<Arc<WebServerState>>) -> Json<Report> {
    Json(state.arena.report().await)
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<WebServerState>>) -> Json<HealthResponse> {
    let snapshot = state.arena.cache().current().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().timestamp(),
        uptime_seconds: state.get_uptime_seconds(),
        cached_items: snapshot.as_ref().map(|s| s.len()).unwrap_or(0),
        snapshot_age_seconds: snapshot.map(|s| s.age(Instant::now()).as_secs()),
    })
}
