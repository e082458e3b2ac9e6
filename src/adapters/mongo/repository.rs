//! MongoDB VideoRepository implementation.

use super::error::StoreError;
use super::MongoStore;
use crate::domain::questions::QuestionSet;
use crate::domain::transcript::Transcript;
use crate::ports::repository::VideoRepository;
use crate::ports::BoxError;
use async_trait::async_trait;
use mongodb::bson::{doc, to_bson};

#[async_trait]
impl VideoRepository for MongoStore {
    async fn find_transcript(&self, video_id: &str) -> Result<Option<Transcript>, BoxError> {
        let found = self
            .transcripts
            .find_one(doc! { "_id": video_id })
            .await
            .map_err(StoreError::from)?;
        Ok(found.map(Transcript::from))
    }

    async fn save_transcript(&self, transcript: &Transcript) -> Result<(), BoxError> {
        // $setOnInsert keeps whichever concurrent request stored first
        self.transcripts
            .update_one(
                doc! { "_id": transcript.video_id.as_str() },
                doc! { "$setOnInsert": { "transcript": transcript.transcript.as_str() } },
            )
            .upsert(true)
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn find_questions(&self, video_id: &str) -> Result<Option<QuestionSet>, BoxError> {
        let found = self
            .questions
            .find_one(doc! { "_id": video_id })
            .await
            .map_err(StoreError::from)?;
        Ok(found.map(QuestionSet::from))
    }

    async fn save_questions(&self, questions: &QuestionSet) -> Result<(), BoxError> {
        let list = to_bson(&questions.questions).map_err(StoreError::from)?;
        self.questions
            .update_one(
                doc! { "_id": questions.video_id.as_str() },
                doc! { "$setOnInsert": { "questions": list } },
            )
            .upsert(true)
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), BoxError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }
}
