//! HTTP surface for the loan advisor.
//!
//! A small REST API over the conversation engine: a chat endpoint, a
//! product listing, and a health check.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

/// Handler failures, rendered as `{"detail": ...}` JSON bodies.
///
/// Rejection messages pass through verbatim so clients see the reason
/// directly in `detail`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let detail = self.to_string();
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
