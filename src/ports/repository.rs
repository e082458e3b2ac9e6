use super::BoxError;
use crate::domain::questions::QuestionSet;
use crate::domain::transcript::Transcript;
use async_trait::async_trait;
use std::sync::Arc;

/// Cache of transcripts and question sets, keyed by video id.
///
/// Saves keep the first stored value: saving an id that already exists is
/// not an error and does not overwrite it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn find_transcript(&self, video_id: &str) -> Result<Option<Transcript>, BoxError>;

    async fn save_transcript(&self, transcript: &Transcript) -> Result<(), BoxError>;

    async fn find_questions(&self, video_id: &str) -> Result<Option<QuestionSet>, BoxError>;

    async fn save_questions(&self, questions: &QuestionSet) -> Result<(), BoxError>;

    /// Check the backing store is reachable
    async fn ping(&self) -> Result<(), BoxError>;
}

#[async_trait]
impl<T: VideoRepository + ?Sized> VideoRepository for Arc<T> {
    async fn find_transcript(&self, video_id: &str) -> Result<Option<Transcript>, BoxError> {
        (**self).find_transcript(video_id).await
    }

    async fn save_transcript(&self, transcript: &Transcript) -> Result<(), BoxError> {
        (**self).save_transcript(transcript).await
    }

    async fn find_questions(&self, video_id: &str) -> Result<Option<QuestionSet>, BoxError> {
        (**self).find_questions(video_id).await
    }

    async fn save_questions(&self, questions: &QuestionSet) -> Result<(), BoxError> {
        (**self).save_questions(questions).await
    }

    async fn ping(&self) -> Result<(), BoxError> {
        (**self).ping().await
    }
}
