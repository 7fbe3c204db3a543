//! WebServer-specific error types

use arena::ArenaError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Arena(ArenaError::InvalidVote(_)) => StatusCode::BAD_REQUEST,
            Self::Arena(ArenaError::InsufficientItems { .. })
            | Self::Arena(ArenaError::StoreUnavailable { .. })
            | Self::Arena(ArenaError::Unavailable { .. })
            | Self::Arena(ArenaError::NotFound { .. })
            | Self::Arena(ArenaError::MalformedData { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
