use super::jwt::{subject, Claims};
use super::extract::Payload;
use super::AppState;
use crate::domain::evaluation::EvaluationPair;
use crate::error::ServiceError;
use crate::ports::{extractor::SubtitleSource, llm::LanguageModel, repository::VideoRepository};
use axum::extract::{Extension, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub pairs: Vec<EvaluationPair>,
}

pub async fn evaluate<X, R, L>(
    State(state): State<AppState<X, R, L>>,
    Extension(claims): Extension<Claims>,
    Payload(request): Payload<EvaluationRequest>,
) -> Result<Json<Value>, ServiceError>
where
    X: SubtitleSource + 'static,
    R: VideoRepository + 'static,
    L: LanguageModel + 'static,
{
    info!(user = subject(&claims), pairs = request.pairs.len(), "evaluation requested");

    let report = state.service.evaluate(&request.pairs).await?;
    Ok(Json(report))
}
