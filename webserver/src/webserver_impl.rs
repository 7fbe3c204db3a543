//! Main webserver implementation
//!
//! Owns the shared state and wires the arena engine into an Axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use arena::Arena;
use axum::routing::{get, post};
use axum::Router;
use shared::logging;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{api, pages};

#[derive(Clone)]
pub struct WebServer {
    state: Arc<WebServerState>,
}

impl WebServer {
    pub fn new(arena: Arena, bind_address: SocketAddr) -> Self {
        Self {
            state: Arc::new(WebServerState::new(arena, bind_address)),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Pages
            .route("/", get(pages::index))
            .route("/vote", post(pages::submit_vote))
            .route("/tie", post(pages::submit_tie))
            .route("/admin", get(pages::admin))
            // API routes
            .route("/api/pair", get(api::get_pair))
            .route("/api/report", get(api::get_report))
            // Health check
            .route("/health", get(api::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(Arc::clone(&self.state))
    }

    /// Serve until ctrl-c
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();
        let addr = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            WebServerError::ServerStartup(format!("Failed to bind to {}: {}", addr, e))
        })?;

        logging::log_startup("webserver", &format!("listening on http://{}", addr));
        info!("Rankings available at http://{}/admin", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        logging::log_shutdown("webserver", "shutdown signal received");
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        logging::log_error("webserver", "installing ctrl-c handler", &e);
    }
}
