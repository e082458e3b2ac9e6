use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A student's answer to one generated question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPair {
    pub question: String,
    pub topic: String,
    pub answer: String,
}

/// Parse the JSON document the model was asked to produce.
///
/// Models sometimes wrap the object in prose or a code fence, so when the
/// whole text is not JSON the outermost `{...}` span is tried as well.
pub fn parse_evaluation(text: &str) -> Result<Value, String> {
    let text = text.trim();
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(whole_err) => {
            let start = text.find('{');
            let end = text.rfind('}');
            match (start, end) {
                (Some(start), Some(end)) if start < end => {
                    serde_json::from_str(&text[start..=end]).map_err(|e| e.to_string())
                }
                _ => Err(whole_err.to_string()),
            }
        }
    }
}
