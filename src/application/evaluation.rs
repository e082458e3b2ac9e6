use super::VideoService;
use crate::domain::evaluation::{parse_evaluation, EvaluationPair};
use crate::domain::prompt::{evaluation_prompt, with_persona};
use crate::error::ServiceError;
use crate::ports::extractor::SubtitleSource;
use crate::ports::llm::LanguageModel;
use crate::ports::repository::VideoRepository;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

impl<X, R, L> VideoService<X, R, L>
where
    X: SubtitleSource,
    R: VideoRepository,
    L: LanguageModel,
{
    /// Grade student answers and return the model's JSON report.
    pub async fn evaluate(&self, pairs: &[EvaluationPair]) -> Result<Value, ServiceError> {
        if pairs.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "at least one question-answer pair is required".to_string(),
            ));
        }

        let report_id = Uuid::new_v4();
        let prompt = with_persona(&evaluation_prompt(pairs));
        let reply = self
            .model
            .complete(&prompt)
            .await
            .map_err(ServiceError::model)?;

        let text = reply
            .first()
            .and_then(|block| block.as_text())
            .ok_or_else(|| ServiceError::ModelOutput("reply carried no text".to_string()))?;

        let report = parse_evaluation(text).map_err(|e| {
            warn!(%report_id, "evaluation reply is not JSON: {}", e);
            ServiceError::ModelOutput(e)
        })?;

        info!(%report_id, pairs = pairs.len(), "answers evaluated");
        Ok(report)
    }
}
