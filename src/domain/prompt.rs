//! Prompts sent to the language model and the shape of its reply.

use crate::domain::evaluation::EvaluationPair;
use serde::{Deserialize, Serialize};

/// Persona prepended to every prompt.
pub const PERSONA: &str = "You are an elementary school teacher.";

pub const EVALUATION_INSTRUCTIONS: &str = r#"You are an elementary school teacher who is assigned to evaluate question-answer pairs (answered by students). <instruction>Respond in the following json schema, where reports is an array of report on each question
{
    "evaluation": { , donot make an array, use this schema as it is strictly
        "score": "Number", out of 10,
        "topic": "String",
        "question_text": "String",
        "student_answer": "String",
        "insight_gained": boolean, check whether the student has understood the subject material
        "follow_up_required": boolean, make the decision if the student needs to have a followup question
        "feedback": "String" provide a feedback upon the answer provided
    }
},
}</instruction>"#;

/// One entry of the model's `content` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
        }
    }

    /// The block's text if it is a text block.
    pub fn as_text(&self) -> Option<&str> {
        if self.kind == "text" {
            self.text.as_deref()
        } else {
            None
        }
    }
}

pub fn with_persona(prompt: &str) -> String {
    format!("{} {}", PERSONA, prompt)
}

pub fn question_prompt(transcript: &str) -> String {
    format!(
        "Generate as many relevant questions as possible on the underlying topic based on the provided video transcript. \
Each question should be prefixed with the topic name in square brackets, and the questions should be listed without any introductory phrases. \
Separate each question with a newline character. Use the following schema:

[TOPIC] 1. Question 1
[TOPIC] 2. Question 2
[TOPIC] 3. Question 3
...
[TOPIC] N. Question N

Here is the video transcript:
{}
",
        transcript
    )
}

pub fn evaluation_prompt(pairs: &[EvaluationPair]) -> String {
    let pairs_text = pairs
        .iter()
        .map(|pair| {
            format!(
                "Question: {}\nAnswer: {}\nTopic: {}",
                pair.question, pair.answer, pair.topic
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\nPlease evaluate the student responses.",
        EVALUATION_INSTRUCTIONS, pairs_text
    )
}
