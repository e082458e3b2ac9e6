use super::AppState;
use crate::ports::{extractor::SubtitleSource, llm::LanguageModel, repository::VideoRepository};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

/// Liveness plus database reachability. Not authenticated.
pub async fn health<X, R, L>(State(state): State<AppState<X, R, L>>) -> Response
where
    X: SubtitleSource + 'static,
    R: VideoRepository + 'static,
    L: LanguageModel + 'static,
{
    match state.service.health().await {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(e) => {
            warn!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "detail": e.to_string() })),
            )
                .into_response()
        }
    }
}
