//! Application layer - Use cases composed from ports.

mod evaluation;
mod questions;
mod transcripts;

use crate::error::ServiceError;
use crate::ports::extractor::SubtitleSource;
use crate::ports::llm::LanguageModel;
use crate::ports::repository::VideoRepository;

pub struct VideoService<X, R, L> {
    extractor: X,
    repo: R,
    model: L,
}

impl<X, R, L> VideoService<X, R, L>
where
    X: SubtitleSource,
    R: VideoRepository,
    L: LanguageModel,
{
    pub fn new(extractor: X, repo: R, model: L) -> Self {
        Self {
            extractor,
            repo,
            model,
        }
    }

    pub async fn health(&self) -> Result<(), ServiceError> {
        self.repo.ping().await.map_err(ServiceError::storage)
    }
}
