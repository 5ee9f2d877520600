//! Client-facing error taxonomy for the HTTP API.
//!
//! Validation and conflict errors carry the exact message the client shows
//! in its alert. Server-side failures keep their source chain for the logs
//! but only ever serialize an opaque per-site message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::users::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Incomplete request payload or a too-short password.
    #[error("{0}")]
    Validation(&'static str),

    /// Username or email collided with an existing account.
    #[error("{0}")]
    Conflict(&'static str),

    /// Unknown username or wrong password. One variant, one message, so the
    /// response never reveals which part was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Store failure. The client sees only `message`.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// Any other failure that must stay opaque to the client.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        Self::Storage { message, source }
    }

    pub fn internal(message: &'static str, source: anyhow::Error) -> Self {
        Self::Internal { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Storage { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match &self {
            ApiError::Storage { message, source } => error!(error = %source, "{message}"),
            ApiError::Internal { message, source } => error!(error = %source, "{message}"),
            _ => {}
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
