use super::VideoService;
use crate::domain::prompt::{question_prompt, with_persona};
use crate::domain::questions::{parse_questions, QuestionList, QuestionSet};
use crate::error::ServiceError;
use crate::ports::extractor::SubtitleSource;
use crate::ports::llm::LanguageModel;
use crate::ports::repository::VideoRepository;
use tracing::{debug, info};

impl<X, R, L> VideoService<X, R, L>
where
    X: SubtitleSource,
    R: VideoRepository,
    L: LanguageModel,
{
    /// Return the study questions for a stored transcript, generating them once.
    pub async fn generate_questions(&self, video_id: &str) -> Result<QuestionSet, ServiceError> {
        let transcript = self
            .repo
            .find_transcript(video_id)
            .await
            .map_err(ServiceError::storage)?
            .ok_or(ServiceError::TranscriptNotFound)?;

        if let Some(existing) = self
            .repo
            .find_questions(video_id)
            .await
            .map_err(ServiceError::storage)?
        {
            debug!(video_id, "questions served from cache");
            return Ok(existing);
        }

        let prompt = with_persona(&question_prompt(&transcript.transcript));
        let reply = self
            .model
            .complete(&prompt)
            .await
            .map_err(ServiceError::model)?;

        let pairs = parse_questions(&reply);
        if pairs.is_empty() {
            return Err(ServiceError::ModelOutput(
                "no questions found in the reply".to_string(),
            ));
        }

        let questions = QuestionSet {
            video_id: video_id.to_string(),
            questions: QuestionList { pairs },
        };
        self.repo
            .save_questions(&questions)
            .await
            .map_err(ServiceError::storage)?;

        info!(
            video_id,
            count = questions.questions.pairs.len(),
            "questions generated"
        );
        Ok(questions)
    }
}
