use crate::domain::prompt::ContentBlock;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_TOPIC: &str = "Unknown";

static TOPIC_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*?)\]").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPair {
    pub question: String,
    pub topic: String,
}

/// Wire and storage shape: `{"pairs": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionList {
    pub pairs: Vec<QuestionPair>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSet {
    pub video_id: String,
    pub questions: QuestionList,
}

/// Extract `[TOPIC] question` lines from the text blocks of a model reply.
pub fn parse_questions(blocks: &[ContentBlock]) -> Vec<QuestionPair> {
    blocks
        .iter()
        .filter_map(ContentBlock::as_text)
        .flat_map(|text| text.trim().split('\n'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> QuestionPair {
    match TOPIC_PREFIX.captures(line) {
        Some(caps) => {
            let tag = &caps[0];
            QuestionPair {
                question: line.replace(tag, "").trim().to_string(),
                topic: caps[1].to_string(),
            }
        }
        None => QuestionPair {
            question: line.to_string(),
            topic: UNKNOWN_TOPIC.to_string(),
        },
    }
}
