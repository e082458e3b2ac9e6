use super::jwt::{subject, Claims};
use super::extract::Payload;
use super::AppState;
use crate::domain::questions::QuestionList;
use crate::error::ServiceError;
use crate::ports::{extractor::SubtitleSource, llm::LanguageModel, repository::VideoRepository};
use axum::extract::{Extension, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub questions: QuestionList,
}

pub async fn generate<X, R, L>(
    State(state): State<AppState<X, R, L>>,
    Extension(claims): Extension<Claims>,
    Payload(request): Payload<QuestionRequest>,
) -> Result<Json<QuestionResponse>, ServiceError>
where
    X: SubtitleSource + 'static,
    R: VideoRepository + 'static,
    L: LanguageModel + 'static,
{
    info!(user = subject(&claims), video_id = %request.id, "questions requested");

    let set = state.service.generate_questions(&request.id).await?;
    Ok(Json(QuestionResponse {
        id: set.video_id,
        questions: set.questions,
    }))
}
