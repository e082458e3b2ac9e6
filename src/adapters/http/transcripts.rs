use super::jwt::{subject, Claims};
use super::extract::Payload;
use super::AppState;
use crate::domain::video::VideoUrl;
use crate::error::ServiceError;
use crate::ports::{extractor::SubtitleSource, llm::LanguageModel, repository::VideoRepository};
use axum::extract::{Extension, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub id: String,
    pub transcript: String,
}

pub async fn generate<X, R, L>(
    State(state): State<AppState<X, R, L>>,
    Extension(claims): Extension<Claims>,
    Payload(request): Payload<TranscriptRequest>,
) -> Result<Json<TranscriptResponse>, ServiceError>
where
    X: SubtitleSource + 'static,
    R: VideoRepository + 'static,
    L: LanguageModel + 'static,
{
    let url = VideoUrl::parse(&request.url).map_err(ServiceError::InvalidRequest)?;
    info!(user = subject(&claims), %url, "transcript requested");

    let transcript = state.service.generate_transcript(&url).await?;
    Ok(Json(TranscriptResponse {
        id: transcript.video_id,
        transcript: transcript.transcript,
    }))
}
