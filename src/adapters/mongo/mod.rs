//! MongoDB adapter.
//!
//! This module provides the MongoDB-backed implementation of
//! `VideoRepository`: one collection for transcripts and one for question
//! sets, both keyed by video id.

mod documents;
mod error;
mod repository;

pub use error::StoreError;

use documents::{QuestionDocument, TranscriptDocument};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// Collection names
const TRANSCRIPTS: &str = "transcripts";
const QUESTIONS: &str = "questions";

/// MongoDB-backed adapter for the transcript and question caches.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
    transcripts: Collection<TranscriptDocument>,
    questions: Collection<QuestionDocument>,
}

impl MongoStore {
    /// Build a client for `url`. Connections are opened lazily on first use.
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some("videoservice".to_string());
        let client = Client::with_options(options)?;
        Ok(Self::new(client.database(db_name)))
    }

    pub fn new(db: Database) -> Self {
        Self {
            transcripts: db.collection(TRANSCRIPTS),
            questions: db.collection(QUESTIONS),
            db,
        }
    }
}
