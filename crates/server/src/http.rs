//! REST endpoints for the loan advisor.

use axum::{
    extract::{Json, State},
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use loan_advisor_core::{LoanProduct, ResponseSource, Turn};

use crate::state::AppState;
use crate::ServerError;

/// Longest accepted chat message, in characters.
const MAX_MESSAGE_CHARS: usize = 500;

/// Assemble the router with tracing and CORS middleware attached.
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        .route("/api/chat/respond", post(chat_respond))
        .route("/api/products", get(list_products))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// CORS policy from settings.
///
/// Disabled checks or an empty origin list both yield a permissive layer;
/// a configured list becomes an allow-list with credentials enabled.
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS checks disabled, every origin allowed; do not run this in production");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        tracing::error!("Every configured CORS origin is invalid, allowing all origins");
        return CorsLayer::permissive();
    }

    tracing::info!(origins = parsed.len(), "CORS allow-list configured");
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// One prior turn as sent by the client.
#[derive(Debug, Deserialize)]
struct TurnDto {
    role: String,
    content: String,
}

/// Body of `POST /api/chat/respond`.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    history: Vec<TurnDto>,
}

/// Reply payload for the chat endpoint.
#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: String,
    suggestions: Vec<LoanProduct>,
    source: ResponseSource,
}

/// Convert client history turns, accepting role names in any case.
fn parse_history(turns: &[TurnDto]) -> Result<Vec<Turn>, ServerError> {
    turns
        .iter()
        .map(|turn| {
            if turn.content.is_empty() {
                return Err(ServerError::InvalidRequest(
                    "History content cannot be empty".to_string(),
                ));
            }
            match turn.role.to_lowercase().as_str() {
                "user" => Ok(Turn::user(turn.content.clone())),
                "assistant" => Ok(Turn::assistant(turn.content.clone())),
                other => Err(ServerError::InvalidRequest(format!(
                    "Unknown history role: {other}"
                ))),
            }
        })
        .collect()
}

async fn chat_respond(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    if request.message.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Message cannot be empty".to_string(),
        ));
    }
    if request.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ServerError::InvalidRequest(format!(
            "Message must be at most {MAX_MESSAGE_CHARS} characters"
        )));
    }

    let history = parse_history(&request.history)?;
    let response = state.engine.respond(&request.message, &history).await;

    Ok(Json(ChatResponse {
        reply: response.reply,
        suggestions: response.suggestions,
        source: response.source,
    }))
}

async fn list_products(State(state): State<AppState>) -> Json<Vec<LoanProduct>> {
    Json(state.catalog.products().to_vec())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use loan_advisor_agent::ConversationEngine;
    use loan_advisor_config::{CatalogConfig, Settings};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let catalog = Arc::new(CatalogConfig::default().build());
        let engine = ConversationEngine::new(Arc::clone(&catalog));
        AppState::new(Settings::default(), engine, catalog)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_router_builds() {
        let _ = create_router(test_state());
    }

    #[test]
    fn test_parse_history_roles() {
        let turns = vec![
            TurnDto { role: "USER".to_string(), content: "hi".to_string() },
            TurnDto { role: "Assistant".to_string(), content: "Hello!".to_string() },
        ];
        let parsed = parse_history(&turns).unwrap();
        assert!(parsed[0].is_user());
        assert!(!parsed[1].is_user());

        let bad = vec![TurnDto { role: "system".to_string(), content: "x".to_string() }];
        assert!(parse_history(&bad).is_err());
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let app = create_router(test_state());
        let response = app
            .oneshot(post_json("/api/chat/respond", r#"{"message": "   "}"#.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["detail"], "Message cannot be empty");
    }

    #[tokio::test]
    async fn test_overlong_message_is_rejected() {
        let app = create_router(test_state());
        let body = serde_json::json!({ "message": "a".repeat(501) }).to_string();
        let response = app.oneshot(post_json("/api/chat/respond", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["detail"], "Message must be at most 500 characters");
    }

    #[tokio::test]
    async fn test_unknown_history_role_is_rejected() {
        let app = create_router(test_state());
        let body = serde_json::json!({
            "message": "hi",
            "history": [{ "role": "system", "content": "x" }],
        })
        .to_string();
        let response = app.oneshot(post_json("/api/chat/respond", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_responds_with_suggestions() {
        let app = create_router(test_state());
        let body = serde_json::json!({
            "message": "I need a home loan",
            "history": [
                { "role": "USER", "content": "hi" },
                { "role": "assistant", "content": "Hello! Nice to meet you." },
            ],
        })
        .to_string();
        let response = app.oneshot(post_json("/api/chat/respond", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["source"], "rule");
        assert_eq!(payload["suggestions"][0]["id"], "home_plus");
        assert!(!payload["reply"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_products_listing() {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let products: Vec<LoanProduct> = serde_json::from_slice(&body).unwrap();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].id, "home_plus");
    }
}
