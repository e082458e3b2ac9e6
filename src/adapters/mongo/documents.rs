//! Stored document shapes.

use crate::domain::questions::{QuestionList, QuestionSet};
use crate::domain::transcript::Transcript;
use serde::{Deserialize, Serialize};

/// `{ _id: <video id>, transcript: <text> }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub transcript: String,
}

/// `{ _id: <video id>, questions: { pairs: [{question, topic}] } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub questions: QuestionList,
}

impl From<TranscriptDocument> for Transcript {
    fn from(doc: TranscriptDocument) -> Self {
        Transcript {
            video_id: doc.id,
            transcript: doc.transcript,
        }
    }
}

impl From<QuestionDocument> for QuestionSet {
    fn from(doc: QuestionDocument) -> Self {
        QuestionSet {
            video_id: doc.id,
            questions: doc.questions,
        }
    }
}
